use compiler__diagnostics::{CompilationError, NONEXISTENT_FUNCTION_WARNING_TAG, Warning};
use compiler__reports::{
    CompileReport, CompilerFailure, CompilerFailureKind, RenderedWarning, ReportFormat,
};
use compiler__source::Span;

#[test]
fn report_format_round_trips_through_its_name() {
    for format in [ReportFormat::Text, ReportFormat::Json] {
        assert_eq!(format.to_string().parse::<ReportFormat>(), Ok(format));
    }
    assert_eq!(
        "yaml".parse::<ReportFormat>(),
        Err("invalid report format 'yaml'".to_string())
    );
}

#[test]
fn warnings_render_with_location_and_tag() {
    let warning = Warning::new(
        "Function \"foo\" does not exist at compile time",
        NONEXISTENT_FUNCTION_WARNING_TAG,
        Span::at(4, 2),
    );

    let rendered = RenderedWarning::new("unit.json", &warning);

    assert_eq!(
        rendered.render_text(),
        "unit.json:4:2: warning: Function \"foo\" does not exist at compile time [-Wnonexistant-function]"
    );
}

#[test]
fn compilation_failures_keep_real_spans_only() {
    let located = CompilerFailure::compilation_failed(
        "unit.json",
        &CompilationError::non_boxed_return_destination(Span::at(7, 3)),
    );
    assert_eq!(located.kind, CompilerFailureKind::CompilationFailed);
    assert_eq!(
        located.render_text(),
        "unit.json:7:3: error: Returned values by functions can only be assigned to variant variables"
    );

    let synthesized = CompilerFailure::compilation_failed(
        "unit.json",
        &CompilationError::insufficient_argument_count("strlen", Span::default()),
    );
    assert!(synthesized.span.is_none());
    assert!(synthesized.render_text().starts_with("unit.json: error: "));
}

#[test]
fn failure_details_render_indented() {
    let failure = CompilerFailure::new(CompilerFailureKind::InvalidCallUnit, "invalid call unit")
        .with_path("unit.json")
        .with_detail("missing field `function_name` at line 1 column 2");

    assert_eq!(
        failure.render_text(),
        "unit.json: error: invalid call unit\n  missing field `function_name` at line 1 column 2"
    );
    assert_eq!(failure.details[0].path.as_deref(), Some("unit.json"));
}

#[test]
fn json_reports_omit_empty_fields() {
    let report = CompileReport {
        path: "unit.json".to_string(),
        code: None,
        headers: Vec::new(),
        warnings: Vec::new(),
        failure: Some(CompilerFailure::new(
            CompilerFailureKind::ReadInput,
            "No such file or directory",
        )),
    };

    assert!(!report.succeeded());
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({
            "path": "unit.json",
            "headers": [],
            "warnings": [],
            "failure": {
                "kind": "read_input",
                "message": "No such file or directory"
            }
        })
    );
}
