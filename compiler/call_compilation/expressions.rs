use serde::Serialize;

use compiler__call_syntax::{ExpectedReturn, Expression};
use compiler__compilation_context::CompilationContext;
use compiler__diagnostics::CompilationError;
use compiler__source::Span;

use crate::FunctionCallCompiler;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompiledKind {
    Int,
    Uint,
    Long,
    Ulong,
    Double,
    Bool,
    String,
    /// `code` names a variable in the symbol table.
    Variable,
    Null,
}

impl CompiledKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CompiledKind::Int => "int",
            CompiledKind::Uint => "uint",
            CompiledKind::Long => "long",
            CompiledKind::Ulong => "ulong",
            CompiledKind::Double => "double",
            CompiledKind::Bool => "bool",
            CompiledKind::String => "string",
            CompiledKind::Variable => "variable",
            CompiledKind::Null => "null",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompiledExpression {
    pub kind: CompiledKind,
    pub code: String,
    pub span: Span,
}

impl CompiledExpression {
    pub fn new(kind: CompiledKind, code: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            code: code.into(),
            span,
        }
    }

    #[must_use]
    pub fn boolean_code(&self) -> &str {
        match self.code.as_str() {
            "true" => "1",
            "false" => "0",
            code => code,
        }
    }
}

impl FunctionCallCompiler {
    /// Compiles an argument expression. Nested calls are compiled
    /// depth-first into fresh temporaries, so instructions come out in source
    /// evaluation order.
    pub fn compile_expression(
        &mut self,
        expression: &Expression,
        context: &mut CompilationContext,
    ) -> Result<CompiledExpression, CompilationError> {
        let span = expression.span().clone();
        let compiled_expression = match expression {
            Expression::IntLiteral { value, .. } => {
                CompiledExpression::new(CompiledKind::Int, value.to_string(), span)
            }
            Expression::LongLiteral { value, .. } => {
                CompiledExpression::new(CompiledKind::Long, value.to_string(), span)
            }
            Expression::UintLiteral { value, .. } => {
                CompiledExpression::new(CompiledKind::Uint, value.to_string(), span)
            }
            Expression::UlongLiteral { value, .. } => {
                CompiledExpression::new(CompiledKind::Ulong, value.to_string(), span)
            }
            Expression::DoubleLiteral { value, .. } => {
                CompiledExpression::new(CompiledKind::Double, format!("{value:?}"), span)
            }
            Expression::BoolLiteral { value, .. } => {
                CompiledExpression::new(CompiledKind::Bool, value.to_string(), span)
            }
            Expression::StringLiteral { value, .. } => CompiledExpression::new(
                CompiledKind::String,
                escape_string_literal(value),
                span,
            ),
            Expression::NullLiteral { .. } => {
                CompiledExpression::new(CompiledKind::Null, "null", span)
            }
            Expression::Variable { name, .. } => {
                CompiledExpression::new(CompiledKind::Variable, name.clone(), span)
            }
            Expression::Call(call) => {
                self.compile(call, &ExpectedReturn::in_temporary(), context)?
            }
        };
        Ok(compiled_expression)
    }
}

fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(character),
        }
    }
    escaped
}
