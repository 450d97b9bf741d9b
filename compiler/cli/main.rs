use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use compiler__call_compilation::FunctionCallCompiler;
use compiler__driver::{compile_call_unit, parse_call_unit};
use compiler__reports::{
    CompileReport, CompilerFailure, CompilerFailureKind, RenderedWarning, ReportFormat,
};

#[derive(Parser)]
#[command(name = "boxc", version)]
struct CommandLine {
    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Compile a call unit to a C function.
    Compile {
        /// JSON call unit.
        path: PathBuf,
        #[arg(long, default_value_t = ReportFormat::Text)]
        report_format: ReportFormat,
    },
}

fn main() -> ExitCode {
    if let Ok(filter) = EnvFilter::try_from_env("BOXC_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let command_line = CommandLine::parse();
    match command_line.command {
        Mode::Compile {
            path,
            report_format,
        } => {
            let report = compile_file(&path);
            let succeeded = report.succeeded();
            match report_format {
                ReportFormat::Text => print_text_report(&report),
                ReportFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(error) => {
                        eprintln!("error: failed to serialize report: {error}");
                        return ExitCode::FAILURE;
                    }
                },
            }
            if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn compile_file(path: &Path) -> CompileReport {
    let display_path = path.display().to_string();
    let mut report = CompileReport {
        path: display_path.clone(),
        code: None,
        headers: Vec::new(),
        warnings: Vec::new(),
        failure: None,
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            report.failure = Some(
                CompilerFailure::new(CompilerFailureKind::ReadInput, error.to_string())
                    .with_path(&display_path),
            );
            return report;
        }
    };
    let unit = match parse_call_unit(&source) {
        Ok(unit) => unit,
        Err(error) => {
            report.failure = Some(
                CompilerFailure::new(CompilerFailureKind::InvalidCallUnit, "invalid call unit")
                    .with_path(&display_path)
                    .with_detail(error.to_string()),
            );
            return report;
        }
    };

    let mut compiler = FunctionCallCompiler::with_defaults();
    match compile_call_unit(&unit, &mut compiler) {
        Ok(compiled_unit) => {
            report.warnings = compiled_unit
                .warnings
                .iter()
                .map(|warning| RenderedWarning::new(&display_path, warning))
                .collect();
            report.headers = compiled_unit.headers;
            report.code = Some(compiled_unit.code);
        }
        Err(error) => {
            tracing::debug!(reason = ?error.reason, "call unit aborted");
            report.failure = Some(CompilerFailure::compilation_failed(&display_path, &error));
        }
    }
    report
}

fn print_text_report(report: &CompileReport) {
    for warning in &report.warnings {
        eprintln!("{}", warning.render_text());
    }
    if let Some(failure) = &report.failure {
        eprintln!("{}", failure.render_text());
        return;
    }
    for header in &report.headers {
        println!("#include \"{header}.h\"");
    }
    if !report.headers.is_empty() {
        println!();
    }
    if let Some(code) = &report.code {
        print!("{code}");
    }
}
