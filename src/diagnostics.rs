//! Renders a [`CompileError`] onto the diagnostic stream (stderr) as a
//! source-annotated report, shared by all three binaries.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::error::CompileError;
use crate::token::Span;

fn message_for(error: &CompileError) -> String {
    match error {
        CompileError::Lex(e) => e.message.clone(),
        CompileError::Parse(e) => e.message.clone(),
        CompileError::Semantic(e) => e.message.clone(),
        CompileError::Internal { message, .. } => format!("internal error: {}", message),
    }
}

fn kind_label(error: &CompileError) -> &'static str {
    match error {
        CompileError::Lex(_) => "lex error",
        CompileError::Parse(_) => "parse error",
        CompileError::Semantic(_) => "semantic error",
        CompileError::Internal { .. } => "internal error",
    }
}

/// A zero-width span collapses to an empty `ariadne` label range, which
/// renders nothing; widen it by one byte (or point at the last byte of
/// the source) so every error still carries a visible caret.
fn displayable_range(span: Span, source: &str) -> std::ops::Range<usize> {
    if span.start < span.end {
        span.start..span.end
    } else if source.is_empty() {
        0..0
    } else {
        let end = source.len().min(span.start + 1).max(1);
        (end - 1)..end
    }
}

/// Prints `error`, attributed to `filename`/`source`, as an annotated
/// report. Falls back to a plain line if the report itself cannot be
/// rendered (e.g. `source` does not actually correspond to `filename`).
pub fn report_error(filename: &str, source: &str, error: &CompileError) {
    let span = error.span();
    let range = displayable_range(span, source);
    let message = message_for(error);

    let result = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(kind_label(error))
        .with_label(
            Label::new((filename, range))
                .with_message(&message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));

    if let Err(report_err) = result {
        eprintln!(
            "{}: {} (at {}:{})",
            filename, message, span.line, span.column
        );
        eprintln!("(failed to render diagnostic report: {})", report_err);
    }
}
