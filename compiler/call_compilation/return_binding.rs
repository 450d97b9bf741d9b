use compiler__call_syntax::{CallExpression, ExpectedReturn};
use compiler__compilation_context::{CompilationContext, Variable};
use compiler__diagnostics::CompilationError;

use crate::reads_variable;

/// Where the value of a call goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnBinding {
    pub is_expecting: bool,
    /// The destination is a reused variable whose storage must be
    /// re-initialized before the call writes into it.
    pub must_init: bool,
    pub symbol_variable: Option<Variable>,
}

impl ReturnBinding {
    #[must_use]
    pub fn destination(&self) -> Option<&Variable> {
        if self.is_expecting {
            self.symbol_variable.as_ref()
        } else {
            None
        }
    }
}

/// Chooses the destination for the value of `call`.
///
/// An existing destination is reused unless the call's own arguments read
/// it, since writing the result there would clobber a value still being
/// read. Fresh temporaries are valid on allocation and never need `must_init`.
pub fn bind_expected_return(
    call: &CallExpression,
    expected_return: &ExpectedReturn,
    context: &mut CompilationContext,
) -> Result<ReturnBinding, CompilationError> {
    let ExpectedReturn::Expected { destination } = expected_return else {
        return Ok(ReturnBinding {
            is_expecting: false,
            must_init: false,
            symbol_variable: None,
        });
    };

    let (symbol_variable, must_init) = match destination {
        Some(destination_name) => {
            let destination_variable = context
                .symbol_table
                .variable_for_read(destination_name, &call.span)?
                .clone();
            if reads_variable(&call.arguments, &destination_variable.name) {
                (context.temp_variable_for_write(), false)
            } else {
                (destination_variable, true)
            }
        }
        None => (context.temp_variable_for_write(), false),
    };

    Ok(ReturnBinding {
        is_expecting: true,
        must_init,
        symbol_variable: Some(symbol_variable),
    })
}
