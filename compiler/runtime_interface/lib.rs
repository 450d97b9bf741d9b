#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinReturnKind {
    /// The kernel helper is a C expression evaluating to a boolean.
    Boolean,
    /// The kernel helper writes a boxed value into a destination variable.
    BoxedValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinFunctionContract {
    pub language_name: &'static str,
    pub kernel_symbol_name: &'static str,
    pub header: &'static str,
    pub parameter_count: usize,
    /// Constant arguments appended after the materialized ones.
    pub trailing_arguments: &'static [&'static str],
    pub return_kind: BuiltinReturnKind,
}

pub const FUNCTION_CALL_HEADER: &str = "kernel/fcall";
pub const STRING_HEADER: &str = "kernel/string";
pub const OBJECT_HEADER: &str = "kernel/object";

pub const MEMSTR_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "memstr",
    kernel_symbol_name: "zephir_memnstr",
    header: STRING_HEADER,
    parameter_count: 2,
    trailing_arguments: &[],
    return_kind: BuiltinReturnKind::Boolean,
};

pub const STARTS_WITH_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "starts_with",
    kernel_symbol_name: "zephir_start_with",
    header: STRING_HEADER,
    parameter_count: 2,
    trailing_arguments: &["NULL"],
    return_kind: BuiltinReturnKind::Boolean,
};

pub const ENDS_WITH_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "ends_with",
    kernel_symbol_name: "zephir_end_with",
    header: STRING_HEADER,
    parameter_count: 2,
    trailing_arguments: &["NULL"],
    return_kind: BuiltinReturnKind::Boolean,
};

pub const CAMELIZE_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "camelize",
    kernel_symbol_name: "zephir_camelize",
    header: STRING_HEADER,
    parameter_count: 1,
    trailing_arguments: &[],
    return_kind: BuiltinReturnKind::BoxedValue,
};

pub const UNCAMELIZE_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "uncamelize",
    kernel_symbol_name: "zephir_uncamelize",
    header: STRING_HEADER,
    parameter_count: 1,
    trailing_arguments: &[],
    return_kind: BuiltinReturnKind::BoxedValue,
};

pub const GET_CLASS_NS_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "get_class_ns",
    kernel_symbol_name: "zephir_get_class_ns",
    header: OBJECT_HEADER,
    parameter_count: 1,
    trailing_arguments: &["0"],
    return_kind: BuiltinReturnKind::BoxedValue,
};

pub const GET_NS_CLASS_FUNCTION_CONTRACT: BuiltinFunctionContract = BuiltinFunctionContract {
    language_name: "get_ns_class",
    kernel_symbol_name: "zephir_get_ns_class",
    header: OBJECT_HEADER,
    parameter_count: 1,
    trailing_arguments: &["0"],
    return_kind: BuiltinReturnKind::BoxedValue,
};

pub const BUILTIN_FUNCTION_CONTRACTS: [BuiltinFunctionContract; 7] = [
    MEMSTR_FUNCTION_CONTRACT,
    GET_CLASS_NS_FUNCTION_CONTRACT,
    GET_NS_CLASS_FUNCTION_CONTRACT,
    CAMELIZE_FUNCTION_CONTRACT,
    UNCAMELIZE_FUNCTION_CONTRACT,
    STARTS_WITH_FUNCTION_CONTRACT,
    ENDS_WITH_FUNCTION_CONTRACT,
];

#[must_use]
pub fn builtin_function_contract(function_name: &str) -> Option<&'static BuiltinFunctionContract> {
    BUILTIN_FUNCTION_CONTRACTS
        .iter()
        .find(|contract| contract.language_name == function_name)
}

#[must_use]
pub fn is_builtin_function(function_name: &str) -> bool {
    builtin_function_contract(function_name).is_some()
}

/// Name of the runtime primitive that calls a userland function with
/// `arity` boxed arguments, optionally writing the result into a
/// destination.
#[must_use]
pub fn call_function_primitive_name(arity: usize, expects_return: bool) -> String {
    let base_name = if arity == 0 {
        "zephir_call_func".to_string()
    } else {
        format!("zephir_call_func_p{arity}")
    };
    if expects_return {
        base_name
    } else {
        format!("{base_name}_noret")
    }
}
