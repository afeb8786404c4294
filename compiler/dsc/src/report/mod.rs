//! Source-labelled rendering of syntax errors.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use ds_parse::SyntaxError;

/// Render `error` against the text it was parsed from.
///
/// `color` is off for anything that is not a terminal.
pub fn render_syntax_error(source: &str, error: &SyntaxError, color: bool) -> String {
    let range = label_range(source, error);
    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, (), range.start)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(
            Label::new(range)
                .with_message(error.label())
                .with_color(Color::Red),
        )
        .finish()
        .write(Source::from(source), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("error: {error}\n"),
    }
}

// Ariadne works on character offsets; spans are byte offsets. An empty span
// at end of input is widened so the label has something to point at.
fn label_range(source: &str, error: &SyntaxError) -> std::ops::Range<usize> {
    let span = error.span.to_range();
    let start = char_offset(source, span.start);
    let end = char_offset(source, span.end).max(start + 1);
    start..end
}

fn char_offset(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|&(i, _)| i < byte)
        .count()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
