use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use compiler__diagnostics::{CompilationError, Warning};
use compiler__source::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid report format '{value}'")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedWarning {
    pub path: String,
    pub tag: &'static str,
    pub message: String,
    pub span: Span,
}

impl RenderedWarning {
    #[must_use]
    pub fn new(path: &str, warning: &Warning) -> Self {
        Self {
            path: path.to_string(),
            tag: warning.tag,
            message: warning.message.clone(),
            span: warning.span.clone(),
        }
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "{}:{}: warning: {} [-W{}]",
            self.path, self.span, self.message, self.tag
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CompilerFailure {
    pub kind: CompilerFailureKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<CompilerFailureDetail>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilerFailureKind {
    ReadInput,
    InvalidCallUnit,
    CompilationFailed,
}

#[derive(Clone, Debug, Serialize)]
pub struct CompilerFailureDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CompilerFailure {
    pub fn new(kind: CompilerFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            span: None,
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, message: impl Into<String>) -> Self {
        self.details.push(CompilerFailureDetail {
            message: message.into(),
            path: self.path.clone(),
        });
        self
    }

    #[must_use]
    pub fn compilation_failed(path: &str, error: &CompilationError) -> Self {
        let mut failure =
            Self::new(CompilerFailureKind::CompilationFailed, error.message.clone()).with_path(path);
        if !error.span.is_synthesized() {
            failure.span = Some(error.span.clone());
        }
        failure
    }

    #[must_use]
    pub fn render_text(&self) -> String {
        let location = match (&self.path, &self.span) {
            (Some(path), Some(span)) => format!("{path}:{span}: "),
            (Some(path), None) => format!("{path}: "),
            (None, _) => String::new(),
        };
        let mut text = format!("{location}error: {}", self.message);
        for detail in &self.details {
            text.push_str("\n  ");
            text.push_str(&detail.message);
        }
        text
    }
}

/// Everything reported for one compiled unit.
#[derive(Clone, Debug, Serialize)]
pub struct CompileReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub headers: Vec<String>,
    pub warnings: Vec<RenderedWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<CompilerFailure>,
}

impl CompileReport {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}
