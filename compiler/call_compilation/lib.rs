use std::rc::Rc;

use compiler__host_functions::{FunctionSignature, HostFunctionRegistry};

mod emission;
mod existence;
mod expressions;
mod function_call;
mod mutability;
mod optimizer_dispatch;
mod optimizers;
mod parameters;
mod read_detector;
mod return_binding;

pub use existence::function_exists;
pub use expressions::{CompiledExpression, CompiledKind};
pub use mutability::MutabilityAnalyzer;
pub use optimizer_dispatch::{FunctionCallOptimizer, OptimizerDispatch, OptimizerRegistry};
pub use optimizers::{BooleanHelperOptimizer, BoxedHelperOptimizer};
pub use parameters::MaterializationMode;
pub use read_detector::reads_variable;
pub use return_binding::{ReturnBinding, bind_expected_return};

/// Compiles calls to free functions.
///
/// The optimizer and signature caches live as long as this value and are
/// never invalidated implicitly: a compiler kept alive across compilations
/// must call [`FunctionCallCompiler::invalidate_function`] when a function is
/// redefined.
pub struct FunctionCallCompiler {
    host_functions: HostFunctionRegistry,
    optimizer_dispatch: OptimizerDispatch,
    mutability_analyzer: MutabilityAnalyzer,
}

impl FunctionCallCompiler {
    #[must_use]
    pub fn new(host_functions: HostFunctionRegistry, optimizer_registry: OptimizerRegistry) -> Self {
        Self {
            host_functions,
            optimizer_dispatch: OptimizerDispatch::new(optimizer_registry),
            mutability_analyzer: MutabilityAnalyzer::new(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            HostFunctionRegistry::with_standard_functions(),
            OptimizerRegistry::with_builtin_optimizers(),
        )
    }

    #[must_use]
    pub fn host_functions(&self) -> &HostFunctionRegistry {
        &self.host_functions
    }

    /// Mutable access to the registry. Cached signatures are not refreshed;
    /// use [`FunctionCallCompiler::redefine_host_function`] for that.
    pub fn host_functions_mut(&mut self) -> &mut HostFunctionRegistry {
        &mut self.host_functions
    }

    #[must_use]
    pub fn optimizer_dispatch(&self) -> &OptimizerDispatch {
        &self.optimizer_dispatch
    }

    pub fn optimizer_dispatch_mut(&mut self) -> &mut OptimizerDispatch {
        &mut self.optimizer_dispatch
    }

    #[must_use]
    pub fn mutability_analyzer(&self) -> &MutabilityAnalyzer {
        &self.mutability_analyzer
    }

    pub fn redefine_host_function(
        &mut self,
        function_name: &str,
        signature: Option<FunctionSignature>,
    ) {
        self.host_functions.register(function_name, signature);
        self.invalidate_function(function_name);
    }

    pub fn register_optimizer(
        &mut self,
        function_name: &str,
        optimizer: Rc<dyn FunctionCallOptimizer>,
    ) {
        self.optimizer_dispatch.register(function_name, optimizer);
    }

    /// Drops every cached fact about `function_name`.
    pub fn invalidate_function(&mut self, function_name: &str) {
        let function_name = function_name.to_lowercase();
        self.optimizer_dispatch.invalidate(&function_name);
        self.mutability_analyzer.invalidate(&function_name);
    }
}
