use compiler__call_syntax::{CallExpression, ExpectedReturn};
use compiler__compilation_context::{CompilationContext, Instruction, RuntimeType};
use compiler__diagnostics::CompilationError;
use compiler__runtime_interface::BuiltinFunctionContract;

use crate::{
    CompiledExpression, CompiledKind, FunctionCallCompiler, FunctionCallOptimizer,
    MaterializationMode, bind_expected_return,
};

/// Calls a kernel helper that writes its result into a boxed destination,
/// e.g. `zephir_camelize(destination, value)`.
pub struct BoxedHelperOptimizer {
    contract: BuiltinFunctionContract,
}

impl BoxedHelperOptimizer {
    #[must_use]
    pub fn new(contract: BuiltinFunctionContract) -> Self {
        Self { contract }
    }
}

impl FunctionCallOptimizer for BoxedHelperOptimizer {
    fn optimize(
        &self,
        call: &CallExpression,
        expected_return: &ExpectedReturn,
        compiler: &mut FunctionCallCompiler,
        context: &mut CompilationContext,
    ) -> Result<Option<CompiledExpression>, CompilationError> {
        if call.arguments.len() != self.contract.parameter_count
            || *expected_return == ExpectedReturn::NotExpected
        {
            return Ok(None);
        }

        context.headers_manager.add(self.contract.header);
        let handles =
            compiler.resolve_parameters(&call.arguments, MaterializationMode::ReadOnly, context)?;
        let return_binding = bind_expected_return(call, expected_return, context)?;
        let Some(destination) = return_binding.destination() else {
            return Ok(None);
        };
        if destination.runtime_type != RuntimeType::Variable {
            return Err(CompilationError::non_boxed_return_destination(
                call.span.clone(),
            ));
        }
        if return_binding.must_init {
            context.code_printer.output(Instruction::ReinitVariable {
                variable: destination.name.clone(),
            });
        }

        let mut arguments = vec![destination.name.clone()];
        arguments.extend(handles);
        arguments.extend(
            self.contract
                .trailing_arguments
                .iter()
                .map(ToString::to_string),
        );
        context.code_printer.output(Instruction::KernelCall {
            symbol_name: self.contract.kernel_symbol_name.to_string(),
            arguments,
        });

        Ok(Some(CompiledExpression::new(
            CompiledKind::Variable,
            destination.name.clone(),
            call.span.clone(),
        )))
    }
}
