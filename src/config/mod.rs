//! Configuration management for the runplan application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It covers where the plan lives and how to
//! authorize against the spreadsheet service.
//!
//! # Environment Variables
//!
//! - `MARATHON_SPREADSHEET_ID`: Spreadsheet to read (required unless `--grid-file` is used)
//! - `MARATHON_SHEET_RANGE`: Range or sheet name to read (defaults to `Main`)
//! - `MARATHON_CREDENTIALS`: OAuth client secrets file (defaults to `credentials.json`)
//! - `MARATHON_TOKEN`: Token cache file (defaults to `token.json`)
//! - `MARATHON_SHEETS_URL`: Sheets API base URL (defaults to `https://sheets.googleapis.com`)
//! - `MARATHON_HTTP_TIMEOUT_SECS`: HTTP timeout in seconds (defaults to 30)

use crate::constants::{
    DEFAULT_CREDENTIALS_FILE, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SHEETS_URL,
    DEFAULT_SHEET_RANGE, DEFAULT_TOKEN_FILE, ENV_VAR_CREDENTIALS, ENV_VAR_HTTP_TIMEOUT,
    ENV_VAR_SHEETS_URL, ENV_VAR_SHEET_RANGE, ENV_VAR_SPREADSHEET_ID, ENV_VAR_TOKEN,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the runplan application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use runplan::Config;
///
/// let config = Config {
///     spreadsheet_id: Some("1AbCdEf".to_string()),
///     ..Config::default()
/// };
/// assert_eq!(config.range, "Main");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Spreadsheet to read. Only needed when the grid is fetched remotely.
    pub spreadsheet_id: Option<String>,

    /// A1 range or sheet name passed to `values.get`.
    pub range: String,

    /// OAuth client secrets downloaded from the Google Cloud console.
    pub credentials_path: PathBuf,

    /// Cached access and refresh token.
    pub token_path: PathBuf,

    /// Base URL of the Sheets API.
    pub sheets_url: String,

    /// Timeout applied to every HTTP request.
    pub http_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "spreadsheet_id",
                &self.spreadsheet_id.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("range", &self.range)
            .field("credentials_path", &self.credentials_path)
            .field("token_path", &self.token_path)
            .field("sheets_url", &self.sheets_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spreadsheet_id: None,
            range: DEFAULT_SHEET_RANGE.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            token_path: PathBuf::from(DEFAULT_TOKEN_FILE),
            sheets_url: DEFAULT_SHEETS_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// File paths are expanded with `shellexpand`, so `~` and `$VAR`
    /// references work. An empty `MARATHON_SPREADSHEET_ID` counts as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - A path cannot be expanded
    /// - `MARATHON_HTTP_TIMEOUT_SECS` is not a positive whole number
    /// - The loaded configuration fails [`Config::validate`]
    pub fn load() -> AppResult<Self> {
        let spreadsheet_id = env::var(ENV_VAR_SPREADSHEET_ID)
            .ok()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let range =
            env::var(ENV_VAR_SHEET_RANGE).unwrap_or_else(|_| DEFAULT_SHEET_RANGE.to_string());

        let credentials_path = expand_path(
            &env::var(ENV_VAR_CREDENTIALS)
                .unwrap_or_else(|_| DEFAULT_CREDENTIALS_FILE.to_string()),
        )?;
        let token_path = expand_path(
            &env::var(ENV_VAR_TOKEN).unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string()),
        )?;

        let sheets_url =
            env::var(ENV_VAR_SHEETS_URL).unwrap_or_else(|_| DEFAULT_SHEETS_URL.to_string());

        let http_timeout = match env::var(ENV_VAR_HTTP_TIMEOUT) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let config = Config {
            spreadsheet_id,
            range,
            credentials_path,
            token_path,
            sheets_url,
            http_timeout,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the range, a path or the Sheets URL is
    /// empty, or the timeout is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.range.trim().is_empty() {
            return Err(AppError::Config("Sheet range is empty".to_string()));
        }

        if self.credentials_path.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Credentials file path is empty".to_string(),
            ));
        }

        if self.token_path.as_os_str().is_empty() {
            return Err(AppError::Config("Token file path is empty".to_string()));
        }

        if self.sheets_url.trim().is_empty() {
            return Err(AppError::Config("Sheets API URL is empty".to_string()));
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::Config(
                "HTTP timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The spreadsheet id, required for fetching the plan from the Sheets API.
    pub fn require_spreadsheet_id(&self) -> AppResult<&str> {
        self.spreadsheet_id.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{} is not set. Set it to the id of the plan spreadsheet or pass --grid-file",
                ENV_VAR_SPREADSHEET_ID
            ))
        })
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn parse_timeout(raw: &str) -> AppResult<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| {
            AppError::Config(format!(
                "{} must be a positive number of seconds, got {:?}",
                ENV_VAR_HTTP_TIMEOUT, raw
            ))
        })
}
