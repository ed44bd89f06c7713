//! Typed fields of the matched row.

use super::columns::{ColumnIndex, Field, MandatoryColumns};
use crate::errors::TableError;

/// The values read from today's row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    /// Planned distance, parsed from the Distance Planned cell.
    pub planned_distance: f64,
    /// Plan notes, when the column exists and the row reaches it.
    pub plan_notes: Option<String>,
    /// The runner's notes, when the column exists and the row reaches it.
    pub my_notes: Option<String>,
}

impl ExtractedFields {
    /// Reads the recognized fields from `row`.
    ///
    /// The distance cell is parsed as written, without trimming. A value
    /// that is not a number fails the whole run with
    /// [`TableError::InvalidDistance`]. Notes are copied verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use runplan::table::{ColumnIndex, ExtractedFields};
    ///
    /// let header: Vec<String> = vec!["Date".into(), "Distance Planned".into(), "My Notes".into()];
    /// let columns = ColumnIndex::resolve(&header);
    /// let mandatory = columns.require_mandatory().unwrap();
    ///
    /// let row: Vec<String> = vec!["1/15".into(), "5.5".into(), "Felt good".into()];
    /// let fields = ExtractedFields::from_row(&row, &columns, mandatory).unwrap();
    ///
    /// assert_eq!(fields.planned_distance, 5.5);
    /// assert_eq!(fields.my_notes.as_deref(), Some("Felt good"));
    /// assert_eq!(fields.plan_notes, None);
    /// ```
    pub fn from_row(
        row: &[String],
        columns: &ColumnIndex,
        mandatory: MandatoryColumns,
    ) -> Result<Self, TableError> {
        let distance_text = row
            .get(mandatory.distance_planned)
            .map(String::as_str)
            .unwrap_or_default();
        let planned_distance =
            distance_text
                .parse::<f64>()
                .map_err(|source| TableError::InvalidDistance {
                    text: distance_text.to_string(),
                    source,
                })?;

        Ok(ExtractedFields {
            planned_distance,
            plan_notes: optional_cell(row, columns.get(Field::PlanNotes)),
            my_notes: optional_cell(row, columns.get(Field::MyNotes)),
        })
    }
}

fn optional_cell(row: &[String], position: Option<usize>) -> Option<String> {
    position.and_then(|position| row.get(position)).cloned()
}
