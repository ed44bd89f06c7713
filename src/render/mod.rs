//! Output formatting for today's plan entry.
//!
//! Every format writes the matched row in header order and silently skips
//! header columns the row does not reach. Each format also defines what is
//! printed when no row matched.
//!
//! # Module Structure
//!
//! - `text`: one `Name: value` line per cell
//! - `json`: an object of name/value strings, strict or legacy layout
//! - `summary`: distance and notes only

pub mod json;
pub mod summary;
pub mod text;

use crate::ops::today::{Lookup, TodayReport};
use clap::ValueEnum;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Name: value` lines
    #[default]
    Text,
    /// A JSON object of name/value strings
    Json,
    /// Planned distance and notes
    Summary,
}

/// How JSON output is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Escaped values, commas between emitted pairs. Always valid JSON.
    #[default]
    Strict,
    /// Byte-for-byte legacy layout: no escaping, commas placed by row
    /// length. A row longer than the header leaves a trailing comma.
    Legacy,
}

/// Rendering settings, fixed for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Selected output format
    pub format: OutputFormat,
    /// Layout used when `format` is JSON
    pub json_style: JsonStyle,
}

/// Renders a lookup report in the configured format.
///
/// The returned string always ends with a newline.
pub fn render(report: &TodayReport, options: &OutputOptions) -> String {
    let row = match &report.lookup {
        Lookup::Found(entry) => Some(entry.cells.as_slice()),
        Lookup::NoMatch => None,
    };

    match options.format {
        OutputFormat::Text => text::render_text(&report.header, row, report.keys.padded()),
        OutputFormat::Json => match options.json_style {
            JsonStyle::Strict => json::render_strict(&report.header, row),
            JsonStyle::Legacy => json::render_legacy(&report.header, row),
        },
        OutputFormat::Summary => summary::render_summary(report),
    }
}

/// Pairs each header name with the row's cell at the same position, stopping
/// at whichever runs out first.
pub(crate) fn cells_in_range<'a>(
    header: &'a [String],
    row: &'a [String],
) -> impl Iterator<Item = (usize, &'a str, &'a str)> + 'a {
    header
        .iter()
        .zip(row.iter())
        .enumerate()
        .map(|(index, (name, value))| (index, name.as_str(), value.as_str()))
}
