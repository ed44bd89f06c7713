//! Short summary: planned distance and notes.

use crate::ops::today::{Lookup, TodayReport};

/// Renders the planned distance followed by any notes.
pub fn render_summary(report: &TodayReport) -> String {
    let today = report.keys.padded();
    let entry = match &report.lookup {
        Lookup::Found(entry) => entry,
        Lookup::NoMatch => {
            return format!("Did not find planned distance for today ({})!\n", today);
        }
    };

    let mut output = format!(
        "Planned Distance today ({}): {} mi\n",
        today,
        format_distance(entry.fields.planned_distance)
    );
    if let Some(notes) = &entry.fields.plan_notes {
        output.push_str(&format!("Plan Notes:\n{}\n", notes));
    }
    if let Some(notes) = &entry.fields.my_notes {
        output.push_str(&format!("My Notes:\n{}\n", notes));
    }
    output
}

/// Formats a distance with the shortest digits that round-trip, switching to
/// exponent form (`1e+06`, `1e-05`) when the decimal exponent is below -4 or
/// at least 6. Infinities are signed (`+Inf`).
fn format_distance(distance: f64) -> String {
    if distance.is_nan() {
        return "NaN".to_string();
    }
    if distance.is_infinite() {
        return if distance > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` yields the shortest mantissa, e.g. `1.5e-7`.
    let scientific = format!("{:e}", distance);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return distance.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if distance == 0.0 || (-4..6).contains(&exponent) {
        return distance.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::today::TodayEntry;
    use crate::table::{DateKeys, ExtractedFields};
    use chrono::NaiveDate;

    fn report(lookup: Lookup) -> TodayReport {
        TodayReport {
            header: vec![],
            keys: DateKeys::for_date(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()),
            lookup,
        }
    }

    fn found(distance: f64, plan_notes: Option<&str>, my_notes: Option<&str>) -> Lookup {
        Lookup::Found(TodayEntry {
            grid_row: 1,
            cells: vec![],
            fields: ExtractedFields {
                planned_distance: distance,
                plan_notes: plan_notes.map(str::to_string),
                my_notes: my_notes.map(str::to_string),
            },
        })
    }

    #[test]
    fn test_summary_with_notes() {
        let output = render_summary(&report(found(5.5, Some("Easy run"), Some("Felt good"))));
        assert_eq!(
            output,
            "Planned Distance today (03/07): 5.5 mi\nPlan Notes:\nEasy run\nMy Notes:\nFelt good\n"
        );
    }

    #[test]
    fn test_summary_whole_distance_and_no_notes() {
        let output = render_summary(&report(found(10.0, None, None)));
        assert_eq!(output, "Planned Distance today (03/07): 10 mi\n");
    }

    #[test]
    fn test_summary_keeps_empty_notes_cell() {
        let output = render_summary(&report(found(3.0, Some(""), None)));
        assert_eq!(output, "Planned Distance today (03/07): 3 mi\nPlan Notes:\n\n");
    }

    #[test]
    fn test_format_distance_plain_range() {
        assert_eq!(format_distance(5.5), "5.5");
        assert_eq!(format_distance(26.2), "26.2");
        assert_eq!(format_distance(0.0), "0");
        assert_eq!(format_distance(-3.0), "-3");
        assert_eq!(format_distance(0.0001), "0.0001");
        assert_eq!(format_distance(123456.0), "123456");
    }

    #[test]
    fn test_format_distance_exponent_range() {
        assert_eq!(format_distance(1e21), "1e+21");
        assert_eq!(format_distance(1e6), "1e+06");
        assert_eq!(format_distance(1234567.0), "1.234567e+06");
        assert_eq!(format_distance(0.00001), "1e-05");
        assert_eq!(format_distance(-2.5e-7), "-2.5e-07");
        assert_eq!(format_distance(1e100), "1e+100");
    }

    #[test]
    fn test_format_distance_special_values() {
        assert_eq!(format_distance(f64::INFINITY), "+Inf");
        assert_eq!(format_distance(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_distance(f64::NAN), "NaN");
    }

    #[test]
    fn test_summary_huge_distance_uses_exponent() {
        let output = render_summary(&report(found(1e21, None, None)));
        assert_eq!(output, "Planned Distance today (03/07): 1e+21 mi\n");
    }

    #[test]
    fn test_summary_no_match() {
        assert_eq!(
            render_summary(&report(Lookup::NoMatch)),
            "Did not find planned distance for today (03/07)!\n"
        );
    }
}
