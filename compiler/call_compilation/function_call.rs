use compiler__call_syntax::{CallExpression, ExpectedReturn};
use compiler__compilation_context::CompilationContext;
use compiler__diagnostics::{CompilationError, NONEXISTENT_FUNCTION_WARNING_TAG};

use crate::emission::emit_function_call;
use crate::{
    CompiledExpression, FunctionCallCompiler, MaterializationMode, bind_expected_return,
    function_exists,
};

impl FunctionCallCompiler {
    /// Compiles a call to a free function.
    ///
    /// Unknown functions only produce a warning: the call is still emitted
    /// and resolved by the runtime. Fatal errors leave already emitted
    /// instructions in place.
    pub fn compile(
        &mut self,
        call: &CallExpression,
        expected_return: &ExpectedReturn,
        context: &mut CompilationContext,
    ) -> Result<CompiledExpression, CompilationError> {
        let function_name = call.name.to_lowercase();

        let exists = function_exists(&self.host_functions, &function_name);
        if !exists {
            context.warn(
                format!("Function \"{function_name}\" does not exist at compile time"),
                NONEXISTENT_FUNCTION_WARNING_TAG,
                call.span.clone(),
            );
        }

        if let Some(compiled_expression) =
            self.optimize(&function_name, call, expected_return, context)?
        {
            return Ok(compiled_expression);
        }

        let read_only = exists
            && self.mutability_analyzer.is_read_only(
                &self.host_functions,
                &function_name,
                call.arguments.len(),
                &call.span,
            )?;
        let mode = if read_only {
            MaterializationMode::ReadOnly
        } else {
            MaterializationMode::Owned
        };

        let handles = self.resolve_parameters(&call.arguments, mode, context)?;
        let return_binding = bind_expected_return(call, expected_return, context)?;
        emit_function_call(&function_name, handles, &return_binding, &call.span, context)
    }

    fn optimize(
        &mut self,
        function_name: &str,
        call: &CallExpression,
        expected_return: &ExpectedReturn,
        context: &mut CompilationContext,
    ) -> Result<Option<CompiledExpression>, CompilationError> {
        let Some(optimizer) = self.optimizer_dispatch.resolve(function_name) else {
            return Ok(None);
        };
        optimizer.optimize(call, expected_return, self, context)
    }
}
