use compiler__call_syntax::{CallExpression, ExpectedReturn};
use compiler__compilation_context::CompilationContext;
use compiler__diagnostics::CompilationError;
use compiler__runtime_interface::BuiltinFunctionContract;

use crate::{
    CompiledExpression, CompiledKind, FunctionCallCompiler, FunctionCallOptimizer,
    MaterializationMode,
};

/// Inlines a kernel predicate such as `zephir_memnstr(haystack, needle)` as
/// a boolean C expression.
pub struct BooleanHelperOptimizer {
    contract: BuiltinFunctionContract,
}

impl BooleanHelperOptimizer {
    #[must_use]
    pub fn new(contract: BuiltinFunctionContract) -> Self {
        Self { contract }
    }
}

impl FunctionCallOptimizer for BooleanHelperOptimizer {
    fn optimize(
        &self,
        call: &CallExpression,
        _expected_return: &ExpectedReturn,
        compiler: &mut FunctionCallCompiler,
        context: &mut CompilationContext,
    ) -> Result<Option<CompiledExpression>, CompilationError> {
        if call.arguments.len() != self.contract.parameter_count {
            return Ok(None);
        }

        context.headers_manager.add(self.contract.header);
        let mut arguments =
            compiler.resolve_parameters(&call.arguments, MaterializationMode::ReadOnly, context)?;
        arguments.extend(
            self.contract
                .trailing_arguments
                .iter()
                .map(ToString::to_string),
        );

        Ok(Some(CompiledExpression::new(
            CompiledKind::Bool,
            format!(
                "{}({})",
                self.contract.kernel_symbol_name,
                arguments.join(", ")
            ),
            call.span.clone(),
        )))
    }
}
