use std::collections::HashMap;

use compiler__diagnostics::CompilationError;
use compiler__host_functions::{FunctionSignature, HostFunctionRegistry, ParameterPassing};
use compiler__runtime_interface::is_builtin_function;
use compiler__source::Span;

/// Decides whether a call is read-only: every parameter that receives an
/// argument is passed by value, so arguments can be lent to the callee
/// instead of copied into owned containers.
#[derive(Default)]
pub struct MutabilityAnalyzer {
    signature_by_name: HashMap<String, Option<FunctionSignature>>,
}

impl MutabilityAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when fewer than the required arguments are supplied. A single
    /// by-reference parameter makes the whole call not read-only.
    pub fn is_read_only(
        &mut self,
        host_functions: &HostFunctionRegistry,
        function_name: &str,
        argument_count: usize,
        span: &Span,
    ) -> Result<bool, CompilationError> {
        if is_builtin_function(function_name) {
            return Ok(false);
        }
        let Some(signature) = self.signature(host_functions, function_name) else {
            return Ok(false);
        };

        if argument_count < signature.required_parameter_count {
            return Err(CompilationError::insufficient_argument_count(
                function_name,
                span.clone(),
            ));
        }

        let passes_by_reference = signature
            .parameters
            .iter()
            .take(argument_count)
            .any(|parameter| *parameter == ParameterPassing::ByReference);
        Ok(!passes_by_reference)
    }

    #[must_use]
    pub fn is_cached(&self, function_name: &str) -> bool {
        self.signature_by_name.contains_key(function_name)
    }

    pub fn invalidate(&mut self, function_name: &str) -> bool {
        self.signature_by_name.remove(function_name).is_some()
    }

    fn signature(
        &mut self,
        host_functions: &HostFunctionRegistry,
        function_name: &str,
    ) -> Option<&FunctionSignature> {
        self.signature_by_name
            .entry(function_name.to_string())
            .or_insert_with(|| {
                let signature = host_functions.signature_of(function_name).cloned();
                tracing::debug!(
                    function_name,
                    known = signature.is_some(),
                    "cached host function signature"
                );
                signature
            })
            .as_ref()
    }
}
