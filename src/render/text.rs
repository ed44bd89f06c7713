//! Plain text output: one `Name: value` line per cell.

use super::cells_in_range;

/// Renders the matched row as `Name: value` lines in header order.
///
/// Values are written as they appear in the sheet, so a cell containing a
/// line break spans several output lines. When nothing matched, a single
/// notice line naming the date is returned.
///
/// # Examples
///
/// ```
/// use runplan::render::text::render_text;
///
/// let header: Vec<String> = vec!["Date".into(), "Distance Planned".into(), "My Notes".into()];
/// let row: Vec<String> = vec!["01/15".into(), "5.5".into()];
///
/// assert_eq!(
///     render_text(&header, Some(&row), "01/15"),
///     "Date: 01/15\nDistance Planned: 5.5\n"
/// );
/// ```
pub fn render_text(header: &[String], row: Option<&[String]>, today: &str) -> String {
    let Some(row) = row else {
        return format!("No entry found for today ({}).\n", today);
    };

    let mut output = String::new();
    for (_, name, value) in cells_in_range(header, row) {
        output.push_str(&format!("{}: {}\n", name, value));
    }
    output
}
