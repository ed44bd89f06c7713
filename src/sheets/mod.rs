//! Grid sources: the Google Sheets API and local grid files.
//!
//! Both sources produce the same JSON shape, a `ValueRange` whose `values`
//! field holds rows of cells. Conversion to a [`Grid`] happens here, so the
//! rest of the crate only ever sees text cells.
//!
//! # Module Structure
//!
//! - `auth`: OAuth client secrets, token cache and token refresh
//! - `client`: HTTP client for `spreadsheets.values.get`
//!
//! # Example
//!
//! ```no_run
//! use runplan::sheets::{Authenticator, ClientSecrets, SheetsClient};
//! use std::path::{Path, PathBuf};
//! use std::time::Duration;
//!
//! let secrets = ClientSecrets::load(Path::new("credentials.json"))?;
//! let auth = Authenticator::new(secrets, PathBuf::from("token.json"), Duration::from_secs(30))?;
//! let token = auth.access_token(chrono::Utc::now())?;
//!
//! let client = SheetsClient::new("https://sheets.googleapis.com", Duration::from_secs(30))?;
//! let grid = client.fetch_grid("1AbCdEf", "Main", &token)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod auth;
pub mod client;

pub use auth::{Authenticator, ClientSecrets, StoredToken};
pub use client::SheetsClient;

use crate::errors::{AppError, AppResult};
use crate::table::Grid;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Body of a `spreadsheets.values.get` response.
///
/// The API omits `values` entirely when the range is empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// The range that was read, in A1 notation.
    #[serde(default)]
    pub range: Option<String>,
    /// Rows of cells.
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Converts the response into a text grid.
    pub fn into_grid(self) -> Grid {
        Grid::from_values(self.values)
    }
}

/// Reads a grid from a JSON file shaped like a `values.get` response.
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be read and
/// `AppError::GridFile` if it does not hold a value range.
pub fn load_grid_file(path: &Path) -> AppResult<Grid> {
    debug!("Reading grid from {}", path.display());
    let text = fs::read_to_string(path)?;
    let value_range: ValueRange =
        serde_json::from_str(&text).map_err(|source| AppError::GridFile {
            path: path.display().to_string(),
            source,
        })?;
    debug!("Grid file holds {} rows", value_range.values.len());
    Ok(value_range.into_grid())
}
