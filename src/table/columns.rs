//! Resolves the recognized columns from a header row.

use crate::constants::{
    COLUMN_DATE, COLUMN_DISTANCE_PLANNED, COLUMN_MY_NOTES, COLUMN_PLAN_NOTES,
};
use crate::errors::TableError;

/// The logical fields the plan is read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The plan date (`MM/DD` or `M/D`). Mandatory.
    Date,
    /// Planned distance for the day. Mandatory.
    DistancePlanned,
    /// Notes from the plan itself.
    PlanNotes,
    /// The runner's own notes.
    MyNotes,
}

impl Field {
    /// Every recognized field, in header-check order.
    pub const ALL: [Field; 4] = [
        Field::Date,
        Field::DistancePlanned,
        Field::PlanNotes,
        Field::MyNotes,
    ];

    /// The header text this field is recognized by (compared case-insensitively).
    pub fn header_name(self) -> &'static str {
        match self {
            Field::Date => COLUMN_DATE,
            Field::DistancePlanned => COLUMN_DISTANCE_PLANNED,
            Field::PlanNotes => COLUMN_PLAN_NOTES,
            Field::MyNotes => COLUMN_MY_NOTES,
        }
    }

    /// Whether the run cannot proceed without this column.
    pub fn is_mandatory(self) -> bool {
        matches!(self, Field::Date | Field::DistancePlanned)
    }
}

/// Column positions of the recognized fields within a header row.
///
/// A field that was not found has no position. When a name appears more than
/// once, the leftmost column is used.
///
/// # Examples
///
/// ```
/// use runplan::table::{ColumnIndex, Field};
///
/// let header: Vec<String> = vec!["Week".into(), "DATE".into(), "distance planned".into()];
/// let columns = ColumnIndex::resolve(&header);
///
/// assert_eq!(columns.get(Field::Date), Some(1));
/// assert_eq!(columns.get(Field::DistancePlanned), Some(2));
/// assert_eq!(columns.get(Field::MyNotes), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    date: Option<usize>,
    distance_planned: Option<usize>,
    plan_notes: Option<usize>,
    my_notes: Option<usize>,
}

/// Positions of the two mandatory columns, available once both were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandatoryColumns {
    /// Position of the `Date` column
    pub date: usize,
    /// Position of the `Distance Planned` column
    pub distance_planned: usize,
}

impl ColumnIndex {
    /// Scans the header left to right and records the first position of each
    /// recognized name.
    ///
    /// The raw cell text is lower-cased and compared for exact equality; no
    /// trimming or line-break folding is applied. Missing columns are not an
    /// error here, see [`ColumnIndex::require_mandatory`].
    pub fn resolve(header: &[String]) -> Self {
        let mut columns = ColumnIndex::default();

        for (position, cell) in header.iter().enumerate() {
            let cell_lower = cell.to_lowercase();
            let field = Field::ALL
                .into_iter()
                .find(|field| field.header_name().to_lowercase() == cell_lower);

            if let Some(field) = field {
                let slot = columns.slot_mut(field);
                if slot.is_none() {
                    *slot = Some(position);
                }
            }
        }

        columns
    }

    /// Position of a field, if its column was found.
    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Date => self.date,
            Field::DistancePlanned => self.distance_planned,
            Field::PlanNotes => self.plan_notes,
            Field::MyNotes => self.my_notes,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<usize> {
        match field {
            Field::Date => &mut self.date,
            Field::DistancePlanned => &mut self.distance_planned,
            Field::PlanNotes => &mut self.plan_notes,
            Field::MyNotes => &mut self.my_notes,
        }
    }

    /// Returns the mandatory column positions, or an error naming every
    /// mandatory column that is missing.
    pub fn require_mandatory(&self) -> Result<MandatoryColumns, TableError> {
        match (self.date, self.distance_planned) {
            (Some(date), Some(distance_planned)) => Ok(MandatoryColumns {
                date,
                distance_planned,
            }),
            _ => Err(TableError::MissingColumns {
                missing: Field::ALL
                    .into_iter()
                    .filter(|field| field.is_mandatory() && self.get(*field).is_none())
                    .map(Field::header_name)
                    .collect(),
            }),
        }
    }
}
