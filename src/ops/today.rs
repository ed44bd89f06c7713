//! Today's plan entry: column resolution, row match and field extraction.

use crate::constants::NO_DATA_MESSAGE;
use crate::errors::AppResult;
use crate::render::{render, OutputOptions};
use crate::table::{
    find_today_row, header_display_names, ColumnIndex, DateKeys, ExtractedFields, Grid,
};
use chrono::NaiveDate;
use tracing::{debug, info};

/// The row planned for the day, with its typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayEntry {
    /// Position of the row in the grid, counting the header as 0.
    pub grid_row: usize,
    /// The row's cells, in sheet order. May be shorter or longer than the header.
    pub cells: Vec<String>,
    /// Planned distance and notes.
    pub fields: ExtractedFields,
}

/// Outcome of looking up a day in the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// A row was planned for the day.
    Found(TodayEntry),
    /// No row's Date cell matched the day.
    NoMatch,
}

/// Everything the renderer needs about one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayReport {
    /// Header names in sheet order, line breaks flattened.
    pub header: Vec<String>,
    /// Encodings of the day that was looked up.
    pub keys: DateKeys,
    /// The matched row, if any.
    pub lookup: Lookup,
}

/// Looks up the plan entry for `today`.
///
/// # Errors
///
/// Returns `TableError::MissingColumns` before any row is scanned when the
/// header lacks a `Date` or `Distance Planned` column, and
/// `TableError::InvalidDistance` when the matched row's distance is not a
/// number. A day without a row is not an error: the report carries
/// [`Lookup::NoMatch`].
pub fn lookup_today(grid: &Grid, today: NaiveDate) -> AppResult<TodayReport> {
    let header = grid.header();
    debug!("Header: {:?}", header);

    let columns = ColumnIndex::resolve(header);
    debug!("Columns: {:?}", columns);
    let mandatory = columns.require_mandatory()?;

    let keys = DateKeys::for_date(today);
    let lookup = match find_today_row(grid.data_rows(), mandatory, &keys) {
        Some(matched) => {
            let fields = ExtractedFields::from_row(matched.cells, &columns, mandatory)?;
            info!(
                "Found plan for {} in row {}: {} planned",
                keys.padded(),
                matched.grid_row,
                fields.planned_distance
            );
            Lookup::Found(TodayEntry {
                grid_row: matched.grid_row,
                cells: matched.cells.to_vec(),
                fields,
            })
        }
        None => {
            info!("No plan entry for {}", keys.padded());
            Lookup::NoMatch
        }
    };

    Ok(TodayReport {
        header: header_display_names(header),
        keys,
        lookup,
    })
}

/// Looks up `today` and renders the result for stdout.
///
/// An empty grid renders the "no data" notice instead of failing on the
/// missing header.
pub fn render_today(grid: &Grid, today: NaiveDate, options: &OutputOptions) -> AppResult<String> {
    if grid.is_empty() {
        info!("Sheet returned no rows");
        return Ok(format!("{}\n", NO_DATA_MESSAGE));
    }

    let report = lookup_today(grid, today)?;
    debug!("Rendering with {:?}", options);
    Ok(render(&report, options))
}
