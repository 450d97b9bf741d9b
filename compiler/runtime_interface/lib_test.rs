use compiler__runtime_interface::{
    BuiltinReturnKind, builtin_function_contract, call_function_primitive_name,
    is_builtin_function,
};

#[test]
fn builtin_set_is_closed() {
    for name in [
        "memstr",
        "get_class_ns",
        "get_ns_class",
        "camelize",
        "uncamelize",
        "starts_with",
        "ends_with",
    ] {
        assert!(is_builtin_function(name), "{name} should be a builtin");
    }
    assert!(!is_builtin_function("strlen"));
    assert!(!is_builtin_function("Camelize"));
}

#[test]
fn builtin_contracts_describe_kernel_helpers() {
    let memstr = builtin_function_contract("memstr").unwrap();
    assert_eq!(memstr.kernel_symbol_name, "zephir_memnstr");
    assert_eq!(memstr.parameter_count, 2);
    assert_eq!(memstr.return_kind, BuiltinReturnKind::Boolean);

    let camelize = builtin_function_contract("camelize").unwrap();
    assert_eq!(camelize.return_kind, BuiltinReturnKind::BoxedValue);
    assert_eq!(camelize.header, "kernel/string");

    for name in ["starts_with", "ends_with"] {
        let contract = builtin_function_contract(name).unwrap();
        assert_eq!(contract.trailing_arguments, ["NULL"]);
    }
}

#[test]
fn call_primitive_names_are_arity_specialized() {
    assert_eq!(call_function_primitive_name(0, true), "zephir_call_func");
    assert_eq!(call_function_primitive_name(0, false), "zephir_call_func_noret");
    assert_eq!(call_function_primitive_name(2, true), "zephir_call_func_p2");
    assert_eq!(call_function_primitive_name(3, false), "zephir_call_func_p3_noret");
}
