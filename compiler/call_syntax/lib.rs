use serde::{Deserialize, Serialize};

use compiler__source::Span;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    IntLiteral {
        value: i64,
        #[serde(default)]
        span: Span,
    },
    UintLiteral {
        value: u64,
        #[serde(default)]
        span: Span,
    },
    LongLiteral {
        value: i64,
        #[serde(default)]
        span: Span,
    },
    UlongLiteral {
        value: u64,
        #[serde(default)]
        span: Span,
    },
    DoubleLiteral {
        value: f64,
        #[serde(default)]
        span: Span,
    },
    BoolLiteral {
        value: bool,
        #[serde(default)]
        span: Span,
    },
    StringLiteral {
        value: String,
        #[serde(default)]
        span: Span,
    },
    NullLiteral {
        #[serde(default)]
        span: Span,
    },
    Variable {
        name: String,
        #[serde(default)]
        span: Span,
    },
    Call(CallExpression),
}

impl Expression {
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Expression::IntLiteral { span, .. }
            | Expression::UintLiteral { span, .. }
            | Expression::LongLiteral { span, .. }
            | Expression::UlongLiteral { span, .. }
            | Expression::DoubleLiteral { span, .. }
            | Expression::BoolLiteral { span, .. }
            | Expression::StringLiteral { span, .. }
            | Expression::NullLiteral { span }
            | Expression::Variable { span, .. } => span,
            Expression::Call(call) => &call.span,
        }
    }
}

/// A call to a free function. A missing argument list is the same as an
/// empty one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    #[serde(default)]
    pub span: Span,
}

impl CallExpression {
    pub fn new(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            arguments,
            span: Span::default(),
        }
    }
}

/// What the surrounding code does with the value of a call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExpectedReturn {
    #[default]
    NotExpected,
    Expected {
        destination: Option<String>,
    },
}

impl ExpectedReturn {
    #[must_use]
    pub fn in_variable(name: impl Into<String>) -> Self {
        Self::Expected {
            destination: Some(name.into()),
        }
    }

    #[must_use]
    pub fn in_temporary() -> Self {
        Self::Expected { destination: None }
    }
}
