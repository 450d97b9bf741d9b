use serde::Serialize;

use compiler__source::Span;

/// Tag of the "function unknown at compile time" warning. Users silence
/// warnings by tag, so the spelling is fixed.
pub const NONEXISTENT_FUNCTION_WARNING_TAG: &str = "nonexistant-function";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
    pub tag: &'static str,
    pub span: Span,
}

impl Warning {
    pub fn new(message: impl Into<String>, tag: &'static str, span: Span) -> Self {
        Self {
            message: message.into(),
            tag,
            span,
        }
    }
}
