use compiler__host_functions::HostFunctionRegistry;
use compiler__runtime_interface::is_builtin_function;

#[must_use]
pub fn function_exists(host_functions: &HostFunctionRegistry, function_name: &str) -> bool {
    host_functions.contains(function_name) || is_builtin_function(function_name)
}
