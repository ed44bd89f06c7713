//! Error handling utilities for the runplan application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Errors raised while interpreting the plan grid.
///
/// Both variants are fatal: the run stops before anything is rendered.
///
/// # Examples
///
/// ```
/// use runplan::errors::TableError;
///
/// let error = TableError::MissingColumns {
///     missing: vec!["Distance Planned"],
/// };
/// assert!(format!("{}", error).contains("Distance Planned"));
/// ```
#[derive(Debug, Error)]
pub enum TableError {
    /// The header row lacks one or both of the mandatory columns.
    #[error("Did not find required column(s) in header row: {}. The sheet needs both a \"Date\" and a \"Distance Planned\" column.", .missing.join(", "))]
    MissingColumns {
        /// Display names of the columns that were not found
        missing: Vec<&'static str>,
    },

    /// The matched row's planned distance is not a number.
    #[error("Error parsing planned distance ({text:?}): {source}")]
    InvalidDistance {
        /// The cell text that failed to parse
        text: String,
        /// The underlying parse error
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Represents errors that can occur when obtaining an OAuth access token.
///
/// # Examples
///
/// ```
/// use runplan::errors::AuthError;
///
/// let error = AuthError::InvalidCredentials("missing client_id".to_string());
/// assert!(format!("{}", error).contains("client_id"));
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The client secrets file could not be read.
    #[error("Unable to read client secret file {path}: {source}. Download OAuth client credentials from the Google Cloud console.")]
    MissingCredentials {
        /// Path that was attempted
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The client secrets file does not have the expected shape.
    #[error("Unable to parse client secret file to config: {0}")]
    InvalidCredentials(String),

    /// The token cache exists but could not be parsed.
    #[error("Unable to decode cached token {path}: {source}. Delete the file to re-authorize.")]
    InvalidToken {
        /// Path of the token cache
        path: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The authorization code could not be read from the terminal.
    #[error("Unable to read authorization code: {0}")]
    AuthorizationCode(#[source] std::io::Error),

    /// The token endpoint could not be reached.
    #[error("Unable to reach token endpoint: {0}")]
    TokenRequest(#[source] reqwest::Error),

    /// The token endpoint rejected the exchange or refresh.
    #[error("Token endpoint returned HTTP {status}: {body}")]
    TokenRejected {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}

/// Represents errors from the Sheets `values.get` call.
///
/// # Examples
///
/// ```
/// use runplan::errors::SheetsError;
///
/// let error = SheetsError::Status { status: 404, body: "Requested entity was not found.".to_string() };
/// assert!(format!("{}", error).contains("404"));
/// ```
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The Sheets API could not be reached.
    #[error("Unable to retrieve data from sheet: {0}")]
    Request(#[source] reqwest::Error),

    /// The Sheets API answered with a non-success status.
    #[error("Sheets API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body was not a value range.
    #[error("Invalid response from Sheets API: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the runplan application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use runplan::errors::AppError;
///
/// let error = AppError::Config("MARATHON_SPREADSHEET_ID is not set".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Configuration error: MARATHON_SPREADSHEET_ID is not set"
/// );
/// ```
///
/// Converting from an IO error:
/// ```
/// use runplan::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors interpreting the plan grid (missing columns, bad distance).
    #[error("Plan error: {0}")]
    Table(#[from] TableError),

    /// Errors obtaining an access token.
    #[error("Authorization error: {0}")]
    Auth(#[from] AuthError),

    /// Errors fetching the grid from the Sheets API.
    #[error("Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    /// A grid file could not be decoded.
    #[error("Invalid grid file {path}: {source}")]
    GridFile {
        /// Path of the grid file
        path: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_missing_columns_lists_every_column() {
        let error = TableError::MissingColumns {
            missing: vec!["Date", "Distance Planned"],
        };
        let message = format!("{}", error);
        assert!(message.contains("Date, Distance Planned"));
    }

    #[test]
    fn test_invalid_distance_names_offending_text() {
        let source = "abc".parse::<f64>().unwrap_err();
        let error: AppError = TableError::InvalidDistance {
            text: "abc".to_string(),
            source,
        }
        .into();

        let message = format!("{}", error);
        assert!(message.starts_with("Plan error: Error parsing planned distance"));
        assert!(message.contains("\"abc\""));
    }

    #[test]
    fn test_sheets_status_display() {
        let error = AppError::Sheets(SheetsError::Status {
            status: 403,
            body: "PERMISSION_DENIED".to_string(),
        });
        assert_eq!(
            format!("{}", error),
            "Sheets error: Sheets API returned HTTP 403: PERMISSION_DENIED"
        );
    }

    #[test]
    fn test_result_combinators() {
        let io_result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "test error"));
        let app_result: AppResult<()> = io_result.map_err(AppError::Io);

        match app_result {
            Err(AppError::Io(inner)) => {
                assert_eq!(inner.kind(), io::ErrorKind::Other);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }
}
