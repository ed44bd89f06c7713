//! JSON output of the matched row.
//!
//! Two layouts exist. The strict layout escapes keys and values and places
//! commas between the pairs actually written, so it always parses. The legacy
//! layout reproduces older output byte for byte for scripts that depend on
//! it: values are not escaped, each pair is followed by a newline, and a
//! comma is written after every pair that is not the last cell of the row.
//! A row longer than the header therefore ends in `,}`.

use super::cells_in_range;
use serde_json::Value;

/// Renders the row as an escaped JSON object, one pair per line.
///
/// An unmatched day renders as `{}`.
///
/// # Examples
///
/// ```
/// use runplan::render::json::render_strict;
///
/// let header: Vec<String> = vec!["Date".into(), "Plan Notes".into()];
/// let row: Vec<String> = vec!["01/15".into(), "say \"go\"".into()];
///
/// let output = render_strict(&header, Some(&row));
/// assert_eq!(output, "{\n  \"Date\": \"01/15\",\n  \"Plan Notes\": \"say \\\"go\\\"\"\n}\n");
/// ```
pub fn render_strict(header: &[String], row: Option<&[String]>) -> String {
    let pairs: Vec<String> = row
        .map(|row| {
            cells_in_range(header, row)
                .map(|(_, name, value)| format!("  {}: {}", quote(name), quote(value)))
                .collect()
        })
        .unwrap_or_default();

    if pairs.is_empty() {
        return "{}\n".to_string();
    }
    format!("{{\n{}\n}}\n", pairs.join(",\n"))
}

/// Renders the row in the legacy, unescaped layout.
///
/// An unmatched day renders as an empty pair of braces on two lines.
pub fn render_legacy(header: &[String], row: Option<&[String]>) -> String {
    let mut output = String::from("{\n");

    if let Some(row) = row {
        for (index, name, value) in cells_in_range(header, row) {
            output.push_str(&format!("\"{}\": \"{}\"\n", name, value));
            if index + 1 < row.len() {
                output.push(',');
            }
        }
    }

    output.push_str("}\n");
    output
}

fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    fn plan_header() -> Vec<String> {
        strings(&["Date", "Distance Planned", "Plan Notes", "My Notes"])
    }

    fn parse(output: &str) -> serde_json::Map<String, Value> {
        match serde_json::from_str::<Value>(output).unwrap() {
            Value::Object(map) => map,
            other => panic!("Expected an object, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_full_row_parses() {
        let row = strings(&["01/15", "5.5", "Easy run", "Felt good"]);
        let output = render_strict(&plan_header(), Some(&row));

        let object = parse(&output);
        assert_eq!(object.len(), 4);
        assert_eq!(object["Date"], "01/15");
        assert_eq!(object["Distance Planned"], "5.5");
        assert_eq!(object["Plan Notes"], "Easy run");
        assert_eq!(object["My Notes"], "Felt good");

        // Pairs stay in header order.
        let date = output.find("\"Date\"").unwrap();
        let notes = output.find("\"My Notes\"").unwrap();
        assert!(date < notes);
    }

    #[test]
    fn test_strict_short_row_has_no_trailing_comma() {
        let row = strings(&["01/15", "5.5"]);
        let output = render_strict(&plan_header(), Some(&row));
        assert_eq!(
            output,
            "{\n  \"Date\": \"01/15\",\n  \"Distance Planned\": \"5.5\"\n}\n"
        );
        assert_eq!(parse(&output).len(), 2);
    }

    #[test]
    fn test_strict_escapes_quotes_backslashes_and_newlines() {
        let header = strings(&["Date", "Plan Notes"]);
        let row = strings(&["01/15", "4x \"fast\"\nC:\\temp"]);
        let output = render_strict(&header, Some(&row));

        assert!(output.contains(r#""4x \"fast\"\nC:\\temp""#));
        assert_eq!(parse(&output)["Plan Notes"], "4x \"fast\"\nC:\\temp");
    }

    #[test]
    fn test_strict_no_match_is_empty_object() {
        let output = render_strict(&plan_header(), None);
        assert_eq!(output, "{}\n");
        assert!(parse(&output).is_empty());
    }

    #[test]
    fn test_legacy_full_row_layout() {
        let row = strings(&["01/15", "5.5", "Easy run", "Felt good"]);
        assert_eq!(
            render_legacy(&plan_header(), Some(&row)),
            "{\n\"Date\": \"01/15\"\n,\"Distance Planned\": \"5.5\"\n,\"Plan Notes\": \"Easy run\"\n,\"My Notes\": \"Felt good\"\n}\n"
        );
    }

    #[test]
    fn test_legacy_short_row_ends_cleanly() {
        let row = strings(&["01/15", "5.5"]);
        let output = render_legacy(&plan_header(), Some(&row));
        assert_eq!(
            output,
            "{\n\"Date\": \"01/15\"\n,\"Distance Planned\": \"5.5\"\n}\n"
        );
        assert_eq!(parse(&output).len(), 2);
    }

    #[test]
    fn test_legacy_long_row_keeps_trailing_comma() {
        let header = strings(&["Date", "Distance Planned"]);
        let row = strings(&["01/15", "5.5", "extra"]);
        let output = render_legacy(&header, Some(&row));
        assert_eq!(
            output,
            "{\n\"Date\": \"01/15\"\n,\"Distance Planned\": \"5.5\"\n,}\n"
        );
        assert!(serde_json::from_str::<Value>(&output).is_err());
    }

    #[test]
    fn test_legacy_does_not_escape() {
        let header = strings(&["Date", "Plan Notes"]);
        let row = strings(&["01/15", "say \"hi\""]);
        assert_eq!(
            render_legacy(&header, Some(&row)),
            "{\n\"Date\": \"01/15\"\n,\"Plan Notes\": \"say \"hi\"\"\n}\n"
        );
    }

    #[test]
    fn test_legacy_no_match() {
        assert_eq!(render_legacy(&plan_header(), None), "{\n}\n");
    }
}
