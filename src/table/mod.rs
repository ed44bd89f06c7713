//! The plan grid and the pure logic that reads it.
//!
//! A [`Grid`] is the header row followed by data rows, every cell already
//! converted to text. The submodules resolve named columns, find today's row
//! and pull typed fields out of it. Nothing here performs I/O.
//!
//! # Module Structure
//!
//! - `columns`: header name → column position
//! - `matcher`: today's date encodings and the row scan
//! - `extract`: planned distance and notes from the matched row

pub mod columns;
pub mod extract;
pub mod matcher;

pub use columns::{ColumnIndex, Field, MandatoryColumns};
pub use extract::ExtractedFields;
pub use matcher::{find_today_row, DateKeys, MatchedRow};

use serde_json::Value;

/// One row of cells. Rows may be shorter or longer than the header.
pub type Row = Vec<String>;

/// A header row plus data rows, held entirely in memory.
///
/// # Examples
///
/// ```
/// use runplan::table::Grid;
///
/// let grid = Grid::new(vec![
///     vec!["Date".to_string(), "Distance Planned".to_string()],
///     vec!["01/15".to_string(), "5.5".to_string()],
/// ]);
/// assert_eq!(grid.header().len(), 2);
/// assert_eq!(grid.data_rows().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Creates a grid from rows of text; row 0 is the header.
    pub fn new(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    /// Creates a grid from untyped spreadsheet values.
    ///
    /// Strings are kept verbatim, `null` becomes an empty cell and any other
    /// value (numbers, booleans) is kept as its JSON text. After this point
    /// every cell is a `String`.
    pub fn from_values(values: Vec<Vec<Value>>) -> Self {
        let rows = values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect();
        Grid { rows }
    }

    /// Returns true when the grid has no rows, not even a header.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, or an empty slice for an empty grid.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Header names as they are shown in output.
///
/// Multi-line header cells are flattened: each line break becomes a single
/// space. Column matching does not use these names.
pub fn header_display_names(header: &[String]) -> Vec<String> {
    header
        .iter()
        .map(|cell| cell.replace("\r\n", " ").replace('\n', " "))
        .collect()
}
