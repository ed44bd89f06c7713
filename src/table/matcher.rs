//! Finds the data row planned for a given day.

use super::columns::MandatoryColumns;
use super::Row;
use crate::constants::{DATE_FORMAT_PADDED, DATE_FORMAT_UNPADDED};
use chrono::NaiveDate;
use tracing::debug;

/// The two textual encodings of a plan date that a Date cell may use.
///
/// # Examples
///
/// ```
/// use runplan::table::DateKeys;
/// use chrono::NaiveDate;
///
/// let keys = DateKeys::for_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
/// assert_eq!(keys.padded(), "03/07");
/// assert_eq!(keys.unpadded(), "3/7");
/// assert!(keys.matches("3/7"));
/// assert!(!keys.matches("3/07"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKeys {
    padded: String,
    unpadded: String,
}

impl DateKeys {
    /// Builds the `MM/DD` and `M/D` encodings of `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        DateKeys {
            padded: date.format(DATE_FORMAT_PADDED).to_string(),
            unpadded: date.format(DATE_FORMAT_UNPADDED).to_string(),
        }
    }

    /// The zero-padded encoding, e.g. `01/05`.
    pub fn padded(&self) -> &str {
        &self.padded
    }

    /// The unpadded encoding, e.g. `1/5`.
    pub fn unpadded(&self) -> &str {
        &self.unpadded
    }

    /// Exact comparison against either encoding.
    pub fn matches(&self, cell: &str) -> bool {
        cell == self.padded || cell == self.unpadded
    }
}

/// A data row selected by [`find_today_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRow<'a> {
    /// Position of the row within the grid, counting the header as 0.
    pub grid_row: usize,
    /// The row's cells.
    pub cells: &'a [String],
}

/// Returns the first data row whose Date cell equals either date key.
///
/// Rows are scanned in order and the scan stops at the first match, so later
/// rows for the same day are ignored. A row too short to contain the Date or
/// the Distance Planned column never matches.
pub fn find_today_row<'a>(
    data_rows: &'a [Row],
    columns: MandatoryColumns,
    keys: &DateKeys,
) -> Option<MatchedRow<'a>> {
    debug!(
        "Looking for date {:?} or {:?} in column {}",
        keys.padded(),
        keys.unpadded(),
        columns.date
    );

    for (offset, row) in data_rows.iter().enumerate() {
        let grid_row = offset + 1;

        let Some(date_cell) = row.get(columns.date) else {
            debug!("Row {} has no date cell ({} cells)", grid_row, row.len());
            continue;
        };
        if row.len() <= columns.distance_planned {
            debug!(
                "Row {} has no distance cell ({} cells)",
                grid_row,
                row.len()
            );
            continue;
        }

        debug!("Row {}: {:?}", grid_row, row);
        if keys.matches(date_cell) {
            debug!("Row {} matches {:?}", grid_row, date_cell);
            return Some(MatchedRow {
                grid_row,
                cells: row,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_7() -> DateKeys {
        DateKeys::for_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    const COLUMNS: MandatoryColumns = MandatoryColumns {
        date: 0,
        distance_planned: 1,
    };

    #[test]
    fn test_keys_for_double_digit_dates() {
        let keys = DateKeys::for_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(keys.padded(), "12/31");
        assert_eq!(keys.unpadded(), "12/31");
    }

    #[test]
    fn test_both_encodings_match() {
        let keys = march_7();
        assert!(keys.matches("03/07"));
        assert!(keys.matches("3/7"));
    }

    #[test]
    fn test_mixed_padding_does_not_match() {
        let keys = march_7();
        assert!(!keys.matches("3/07"));
        assert!(!keys.matches("03/7"));
        assert!(!keys.matches(" 3/7"));
        assert!(!keys.matches("2024-03-07"));
    }

    #[test]
    fn test_finds_unpadded_row() {
        let rows = vec![row(&["3/6", "4"]), row(&["3/7", "6"]), row(&["3/8", "8"])];
        let matched = find_today_row(&rows, COLUMNS, &march_7()).unwrap();
        assert_eq!(matched.grid_row, 2);
        assert_eq!(matched.cells[1], "6");
    }

    #[test]
    fn test_first_matching_row_wins() {
        let rows = vec![
            row(&["03/07", "5", "first"]),
            row(&["3/7", "10", "second"]),
        ];
        let matched = find_today_row(&rows, COLUMNS, &march_7()).unwrap();
        assert_eq!(matched.grid_row, 1);
        assert_eq!(matched.cells[2], "first");
    }

    #[test]
    fn test_no_match_returns_none() {
        let rows = vec![row(&["3/6", "4"]), row(&["3/8", "8"])];
        assert!(find_today_row(&rows, COLUMNS, &march_7()).is_none());
    }

    #[test]
    fn test_short_rows_never_match() {
        let columns = MandatoryColumns {
            date: 2,
            distance_planned: 3,
        };
        let rows = vec![
            row(&[]),
            row(&["x", "y"]),
            // Date cell present but distance column missing.
            row(&["x", "y", "3/7"]),
            row(&["x", "y", "3/7", "9"]),
        ];

        let matched = find_today_row(&rows, columns, &march_7()).unwrap();
        assert_eq!(matched.grid_row, 4);
        assert_eq!(matched.cells[3], "9");
    }

    #[test]
    fn test_empty_rows_slice() {
        assert!(find_today_row(&[], COLUMNS, &march_7()).is_none());
    }
}
