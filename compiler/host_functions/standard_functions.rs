use crate::ParameterPassing::{ByReference, ByValue};
use crate::{FunctionSignature, ParameterPassing};

#[derive(Clone, Copy, Debug)]
pub struct HostFunctionDefinition {
    pub name: &'static str,
    pub required_parameter_count: usize,
    pub parameters: &'static [ParameterPassing],
}

impl HostFunctionDefinition {
    #[must_use]
    pub fn signature(&self) -> FunctionSignature {
        FunctionSignature::new(self.required_parameter_count, self.parameters.to_vec())
    }
}

const fn definition(
    name: &'static str,
    required_parameter_count: usize,
    parameters: &'static [ParameterPassing],
) -> HostFunctionDefinition {
    HostFunctionDefinition {
        name,
        required_parameter_count,
        parameters,
    }
}

pub const STANDARD_HOST_FUNCTIONS: &[HostFunctionDefinition] = &[
    // keep-sorted start
    definition("array_keys", 1, &[ByValue, ByValue, ByValue]),
    definition("array_pop", 1, &[ByReference]),
    definition("array_push", 2, &[ByReference, ByValue]),
    definition("array_shift", 1, &[ByReference]),
    definition("count", 1, &[ByValue, ByValue]),
    definition("end", 1, &[ByReference]),
    definition("explode", 2, &[ByValue, ByValue, ByValue]),
    definition("implode", 1, &[ByValue, ByValue]),
    definition("in_array", 2, &[ByValue, ByValue, ByValue]),
    definition("is_array", 1, &[ByValue]),
    definition("is_null", 1, &[ByValue]),
    definition("is_string", 1, &[ByValue]),
    definition("json_decode", 1, &[ByValue, ByValue, ByValue, ByValue]),
    definition("json_encode", 1, &[ByValue, ByValue]),
    definition("ksort", 1, &[ByReference, ByValue]),
    definition("microtime", 0, &[ByValue]),
    definition("preg_match", 2, &[ByValue, ByValue, ByReference, ByValue, ByValue]),
    definition("preg_match_all", 2, &[ByValue, ByValue, ByReference, ByValue, ByValue]),
    definition("preg_replace", 3, &[ByValue, ByValue, ByValue, ByValue, ByReference]),
    definition("reset", 1, &[ByReference]),
    definition("sort", 1, &[ByReference, ByValue]),
    definition("str_repeat", 2, &[ByValue, ByValue]),
    definition("str_replace", 3, &[ByValue, ByValue, ByValue, ByReference]),
    definition("strlen", 1, &[ByValue]),
    definition("strpos", 2, &[ByValue, ByValue, ByValue]),
    definition("strtolower", 1, &[ByValue]),
    definition("strtoupper", 1, &[ByValue]),
    definition("substr", 2, &[ByValue, ByValue, ByValue]),
    definition("time", 0, &[]),
    definition("trim", 1, &[ByValue, ByValue]),
    definition("ucfirst", 1, &[ByValue]),
    // keep-sorted end
];
