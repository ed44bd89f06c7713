/*!
# runplan

runplan prints the day's entry from a training plan kept in a spreadsheet. The
plan has a header row naming its columns and one row per day; the row whose
`Date` cell reads today's date (`03/07` or `3/7`) is printed as text, JSON, or a
short summary of the planned distance and notes.

## Architecture

- `table`: the grid, column resolution, date matching and field extraction
- `render`: text, JSON and summary output
- `ops`: the lookup tying the table logic to the renderer
- `sheets`: Google Sheets client, OAuth token cache and grid files
- `cli`: command-line interface handling using clap
- `config`: configuration loading and validation
- `errors`: error handling infrastructure

## Usage Example

```rust
use runplan::ops::render_today;
use runplan::render::OutputOptions;
use runplan::table::Grid;
use chrono::NaiveDate;

let grid = Grid::new(vec![
    vec!["Date".into(), "Distance Planned".into(), "Plan Notes".into()],
    vec!["1/15".into(), "5.5".into(), "Easy run".into()],
]);
let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

let output = render_today(&grid, today, &OutputOptions::default())?;
assert_eq!(output, "Date: 1/15\nDistance Planned: 5.5\nPlan Notes: Easy run\n");
# Ok::<(), runplan::AppError>(())
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Plan lookups
pub mod ops;
/// Output formats
pub mod render;
/// Grid sources: Sheets API and grid files
pub mod sheets;
/// The plan grid and its column, date and field logic
pub mod table;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
