use std::error::Error;
use std::fmt;

use serde::Serialize;

use compiler__source::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilationErrorReason {
    InsufficientArgumentCount,
    UnsupportedValueType,
    UnsupportedVariableType,
    NonBoxedReturnDestination,
    UndeclaredVariable,
}

/// Fatal failure while compiling a call. Instructions emitted before the
/// failure stay in the output, so the whole compilation unit is aborted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilationError {
    pub reason: CompilationErrorReason,
    pub message: String,
    pub span: Span,
}

impl CompilationError {
    pub fn new(reason: CompilationErrorReason, message: impl Into<String>, span: Span) -> Self {
        Self {
            reason,
            message: message.into(),
            span,
        }
    }

    #[must_use]
    pub fn insufficient_argument_count(function_name: &str, span: Span) -> Self {
        Self::new(
            CompilationErrorReason::InsufficientArgumentCount,
            format!(
                "The number of parameters passed is less than the number of required parameters by '{function_name}'"
            ),
            span,
        )
    }

    #[must_use]
    pub fn unsupported_value_type(type_name: &str, span: Span) -> Self {
        Self::new(
            CompilationErrorReason::UnsupportedValueType,
            format!("Cannot use value type: {type_name} as parameter"),
            span,
        )
    }

    #[must_use]
    pub fn unsupported_variable_type(type_name: &str, span: Span) -> Self {
        Self::new(
            CompilationErrorReason::UnsupportedVariableType,
            format!("Cannot use variable type: {type_name} as parameter"),
            span,
        )
    }

    #[must_use]
    pub fn non_boxed_return_destination(span: Span) -> Self {
        Self::new(
            CompilationErrorReason::NonBoxedReturnDestination,
            "Returned values by functions can only be assigned to variant variables",
            span,
        )
    }

    #[must_use]
    pub fn undeclared_variable(variable_name: &str, span: Span) -> Self {
        Self::new(
            CompilationErrorReason::UndeclaredVariable,
            format!("Cannot read variable '{variable_name}' because it wasn't declared"),
            span,
        )
    }
}

impl fmt::Display for CompilationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} at {}", self.message, self.span)
    }
}

impl Error for CompilationError {}
