use compiler__compilation_context::{CompilationContext, Instruction, RuntimeType};
use compiler__diagnostics::CompilationError;
use compiler__runtime_interface::FUNCTION_CALL_HEADER;
use compiler__source::Span;

use crate::{CompiledExpression, CompiledKind, ReturnBinding};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InvocationShape {
    NoArgumentsNoReturn,
    NoArgumentsWithReturn,
    ArgumentsNoReturn,
    ArgumentsWithReturn,
}

impl InvocationShape {
    fn select(has_arguments: bool, is_expecting: bool) -> Self {
        match (has_arguments, is_expecting) {
            (false, false) => Self::NoArgumentsNoReturn,
            (false, true) => Self::NoArgumentsWithReturn,
            (true, false) => Self::ArgumentsNoReturn,
            (true, true) => Self::ArgumentsWithReturn,
        }
    }

    fn writes_destination(self) -> bool {
        matches!(
            self,
            Self::NoArgumentsWithReturn | Self::ArgumentsWithReturn
        )
    }
}

/// Emits the userland invocation of `function_name` with the already
/// materialized argument handles.
pub(crate) fn emit_function_call(
    function_name: &str,
    handles: Vec<String>,
    return_binding: &ReturnBinding,
    span: &Span,
    context: &mut CompilationContext,
) -> Result<CompiledExpression, CompilationError> {
    let destination = return_binding.destination();
    if destination.is_some_and(|destination| destination.runtime_type != RuntimeType::Variable) {
        return Err(CompilationError::non_boxed_return_destination(span.clone()));
    }

    context.headers_manager.add(FUNCTION_CALL_HEADER);

    let shape = InvocationShape::select(!handles.is_empty(), destination.is_some());
    tracing::trace!(function_name, ?shape, arity = handles.len(), "emitting function call");

    let destination_name = match destination {
        Some(destination) if shape.writes_destination() => {
            if return_binding.must_init {
                context.code_printer.output(Instruction::ReinitVariable {
                    variable: destination.name.clone(),
                });
            }
            Some(destination.name.clone())
        }
        _ => None,
    };

    context.code_printer.output(Instruction::CallFunction {
        function_name: function_name.to_string(),
        destination: destination_name.clone(),
        arguments: handles,
    });

    Ok(match destination_name {
        Some(destination_name) => {
            CompiledExpression::new(CompiledKind::Variable, destination_name, span.clone())
        }
        None => CompiledExpression::new(CompiledKind::Null, "null", span.clone()),
    })
}
