use std::collections::HashMap;
use std::rc::Rc;

use compiler__call_syntax::{CallExpression, ExpectedReturn};
use compiler__compilation_context::CompilationContext;
use compiler__diagnostics::CompilationError;
use compiler__runtime_interface::{BUILTIN_FUNCTION_CONTRACTS, BuiltinReturnKind};

use crate::optimizers::{BooleanHelperOptimizer, BoxedHelperOptimizer};
use crate::{CompiledExpression, FunctionCallCompiler};

/// Call-specific code generator for one function name.
///
/// Returning `Ok(None)` falls back to the default compilation of the call.
/// Returning a result replaces it entirely: the optimizer owns the return
/// binding and every emitted instruction.
pub trait FunctionCallOptimizer {
    fn optimize(
        &self,
        call: &CallExpression,
        expected_return: &ExpectedReturn,
        compiler: &mut FunctionCallCompiler,
        context: &mut CompilationContext,
    ) -> Result<Option<CompiledExpression>, CompilationError>;
}

#[derive(Default)]
pub struct OptimizerRegistry {
    optimizer_by_name: HashMap<String, Rc<dyn FunctionCallOptimizer>>,
}

impl OptimizerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_builtin_optimizers() -> Self {
        let mut registry = Self::new();
        for contract in BUILTIN_FUNCTION_CONTRACTS {
            let optimizer: Rc<dyn FunctionCallOptimizer> = match contract.return_kind {
                BuiltinReturnKind::Boolean => Rc::new(BooleanHelperOptimizer::new(contract)),
                BuiltinReturnKind::BoxedValue => Rc::new(BoxedHelperOptimizer::new(contract)),
            };
            registry.register(contract.language_name, optimizer);
        }
        registry
    }

    pub fn register(&mut self, function_name: &str, optimizer: Rc<dyn FunctionCallOptimizer>) {
        self.optimizer_by_name
            .insert(function_name.to_lowercase(), optimizer);
    }

    #[must_use]
    pub fn lookup(&self, function_name: &str) -> Option<Rc<dyn FunctionCallOptimizer>> {
        self.optimizer_by_name.get(function_name).cloned()
    }

    #[must_use]
    pub fn contains(&self, function_name: &str) -> bool {
        self.optimizer_by_name.contains_key(function_name)
    }
}

/// Memoized optimizer lookup. The first lookup of a name fixes its outcome,
/// "no optimizer" included, until the name is invalidated.
pub struct OptimizerDispatch {
    registry: OptimizerRegistry,
    resolved_by_name: HashMap<String, Option<Rc<dyn FunctionCallOptimizer>>>,
}

impl OptimizerDispatch {
    #[must_use]
    pub fn new(registry: OptimizerRegistry) -> Self {
        Self {
            registry,
            resolved_by_name: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, function_name: &str) -> Option<Rc<dyn FunctionCallOptimizer>> {
        if let Some(resolved) = self.resolved_by_name.get(function_name) {
            return resolved.clone();
        }
        let resolved = self.registry.lookup(function_name);
        tracing::debug!(
            function_name,
            found = resolved.is_some(),
            "resolved call optimizer"
        );
        self.resolved_by_name
            .insert(function_name.to_string(), resolved.clone());
        resolved
    }

    #[must_use]
    pub fn is_resolved(&self, function_name: &str) -> bool {
        self.resolved_by_name.contains_key(function_name)
    }

    /// Registry access that leaves resolved entries untouched.
    pub fn registry_mut(&mut self) -> &mut OptimizerRegistry {
        &mut self.registry
    }

    pub fn register(&mut self, function_name: &str, optimizer: Rc<dyn FunctionCallOptimizer>) {
        self.registry.register(function_name, optimizer);
        self.invalidate(&function_name.to_lowercase());
    }

    pub fn invalidate(&mut self, function_name: &str) -> bool {
        self.resolved_by_name.remove(function_name).is_some()
    }
}
