mod compilation_error;
mod warning;

pub use compilation_error::{CompilationError, CompilationErrorReason};
pub use warning::{NONEXISTENT_FUNCTION_WARNING_TAG, Warning};
