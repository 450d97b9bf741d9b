use std::collections::HashMap;

mod standard_functions;

pub use standard_functions::{HostFunctionDefinition, STANDARD_HOST_FUNCTIONS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterPassing {
    ByValue,
    ByReference,
}

/// Aliasing contract of a host function: how many arguments it requires and
/// how each declared parameter is passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSignature {
    pub required_parameter_count: usize,
    pub parameters: Vec<ParameterPassing>,
}

impl FunctionSignature {
    #[must_use]
    pub fn new(required_parameter_count: usize, parameters: Vec<ParameterPassing>) -> Self {
        Self {
            required_parameter_count,
            parameters,
        }
    }

    #[must_use]
    pub fn by_value(required_parameter_count: usize, parameter_count: usize) -> Self {
        Self::new(
            required_parameter_count,
            vec![ParameterPassing::ByValue; parameter_count],
        )
    }
}

/// Host functions known at compile time. A function may be known without a
/// signature, in which case nothing can be assumed about how it treats its
/// arguments.
#[derive(Default)]
pub struct HostFunctionRegistry {
    signature_by_name: HashMap<String, Option<FunctionSignature>>,
}

impl HostFunctionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_standard_functions() -> Self {
        let mut registry = Self::new();
        for definition in STANDARD_HOST_FUNCTIONS {
            registry.register(definition.name, Some(definition.signature()));
        }
        registry
    }

    pub fn register(&mut self, function_name: &str, signature: Option<FunctionSignature>) {
        self.signature_by_name
            .insert(function_name.to_lowercase(), signature);
    }

    pub fn unregister(&mut self, function_name: &str) -> bool {
        self.signature_by_name
            .remove(&function_name.to_lowercase())
            .is_some()
    }

    #[must_use]
    pub fn contains(&self, function_name: &str) -> bool {
        self.signature_by_name
            .contains_key(&function_name.to_lowercase())
    }

    #[must_use]
    pub fn signature_of(&self, function_name: &str) -> Option<&FunctionSignature> {
        self.signature_by_name
            .get(&function_name.to_lowercase())
            .and_then(Option::as_ref)
    }
}
