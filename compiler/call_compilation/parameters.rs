use compiler__call_syntax::Expression;
use compiler__compilation_context::{CompilationContext, Instruction, RuntimeType, Variable};
use compiler__diagnostics::CompilationError;
use compiler__source::Span;

use crate::{CompiledExpression, CompiledKind, FunctionCallCompiler};

/// How arguments are boxed for one call. Chosen once per call and applied to
/// every argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterializationMode {
    /// Heap-boxed temporaries that own their data, passed by pointer.
    Owned,
    /// Stack-local containers passed by address. Data that outlives the call
    /// is referenced, never duplicated.
    ReadOnly,
}

impl MaterializationMode {
    fn duplicates_strings(self) -> bool {
        self == MaterializationMode::Owned
    }
}

impl FunctionCallCompiler {
    /// Compiles `arguments` left to right and boxes each one, returning the
    /// handles to pass to the callee.
    pub fn resolve_parameters(
        &mut self,
        arguments: &[Expression],
        mode: MaterializationMode,
        context: &mut CompilationContext,
    ) -> Result<Vec<String>, CompilationError> {
        let mut handles = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let compiled_expression = self.compile_expression(argument, context)?;
            handles.push(materialize_argument(
                &compiled_expression,
                argument.span(),
                mode,
                context,
            )?);
        }
        Ok(handles)
    }
}

fn materialize_argument(
    compiled_expression: &CompiledExpression,
    argument_span: &Span,
    mode: MaterializationMode,
    context: &mut CompilationContext,
) -> Result<String, CompilationError> {
    let code = compiled_expression.code.clone();
    match compiled_expression.kind {
        CompiledKind::Int | CompiledKind::Uint | CompiledKind::Long | CompiledKind::Ulong => {
            Ok(store_argument(mode, context, |target| Instruction::StoreLong {
                target,
                value: code,
            }))
        }
        CompiledKind::Double => Ok(store_argument(mode, context, |target| {
            Instruction::StoreDouble {
                target,
                value: code,
            }
        })),
        CompiledKind::Bool => {
            let value = compiled_expression.boolean_code().to_string();
            Ok(store_argument(mode, context, |target| {
                Instruction::StoreBool { target, value }
            }))
        }
        CompiledKind::String => Ok(store_argument(mode, context, |target| {
            Instruction::StoreString {
                target,
                literal: code,
                duplicate: mode.duplicates_strings(),
            }
        })),
        CompiledKind::Variable => {
            let variable = context
                .symbol_table
                .variable_for_read(&code, argument_span)?
                .clone();
            materialize_variable(&variable, argument_span, mode, context)
        }
        CompiledKind::Null => Err(CompilationError::unsupported_value_type(
            compiled_expression.kind.name(),
            argument_span.clone(),
        )),
    }
}

/// Unboxed variables get a fresh container; boxed ones are passed as they
/// are, with no instruction emitted.
fn materialize_variable(
    variable: &Variable,
    argument_span: &Span,
    mode: MaterializationMode,
    context: &mut CompilationContext,
) -> Result<String, CompilationError> {
    let source = variable.name.clone();
    match variable.runtime_type {
        RuntimeType::Variable => Ok(variable.handle()),
        RuntimeType::Int | RuntimeType::Uint | RuntimeType::Long | RuntimeType::Ulong => {
            Ok(store_argument(mode, context, |target| Instruction::StoreLong {
                target,
                value: source,
            }))
        }
        RuntimeType::Double => Ok(store_argument(mode, context, |target| {
            Instruction::StoreDouble {
                target,
                value: source,
            }
        })),
        RuntimeType::Bool => Ok(store_argument(mode, context, |target| {
            Instruction::StoreBool {
                target,
                value: source,
            }
        })),
        RuntimeType::String => Ok(store_argument(mode, context, |target| {
            Instruction::StoreStringWithLength {
                target,
                source,
                duplicate: mode.duplicates_strings(),
            }
        })),
        RuntimeType::Char | RuntimeType::Array => Err(CompilationError::unsupported_variable_type(
            variable.runtime_type.name(),
            argument_span.clone(),
        )),
    }
}

fn store_argument(
    mode: MaterializationMode,
    context: &mut CompilationContext,
    store_instruction: impl FnOnce(String) -> Instruction,
) -> String {
    let target = match mode {
        MaterializationMode::Owned => context.temp_variable_for_write(),
        MaterializationMode::ReadOnly => context.temp_local_variable_for_write(),
    }
    .handle();
    context.code_printer.output(store_instruction(target.clone()));
    target
}
