use compiler__call_syntax::Expression;

/// Whether evaluating any of `expressions` reads the variable `name`,
/// including reads inside nested call arguments.
#[must_use]
pub fn reads_variable(expressions: &[Expression], name: &str) -> bool {
    expressions
        .iter()
        .any(|expression| expression_reads_variable(expression, name))
}

fn expression_reads_variable(expression: &Expression, name: &str) -> bool {
    match expression {
        Expression::Variable {
            name: variable_name,
            ..
        } => variable_name == name,
        Expression::Call(call) => reads_variable(&call.arguments, name),
        Expression::IntLiteral { .. }
        | Expression::UintLiteral { .. }
        | Expression::LongLiteral { .. }
        | Expression::UlongLiteral { .. }
        | Expression::DoubleLiteral { .. }
        | Expression::BoolLiteral { .. }
        | Expression::StringLiteral { .. }
        | Expression::NullLiteral { .. } => false,
    }
}
