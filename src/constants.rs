//! Constants used throughout the application.
//!
//! This module contains all constants used in the runplan application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "runplan";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Show today's entry from a training plan spreadsheet";

// Header Names
/// Header text of the date column.
pub const COLUMN_DATE: &str = "Date";
/// Header text of the planned distance column.
pub const COLUMN_DISTANCE_PLANNED: &str = "Distance Planned";
/// Header text of the coach's notes column.
pub const COLUMN_PLAN_NOTES: &str = "Plan Notes";
/// Header text of the runner's notes column.
pub const COLUMN_MY_NOTES: &str = "My Notes";

// Date/Time Logic
/// Zero-padded month/day encoding of a plan date (`03/07`).
pub const DATE_FORMAT_PADDED: &str = "%m/%d";
/// Unpadded month/day encoding of a plan date (`3/7`).
pub const DATE_FORMAT_UNPADDED: &str = "%-m/%-d";
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Output
/// Printed when the sheet has no rows at all.
pub const NO_DATA_MESSAGE: &str = "No data found.";

// Configuration Keys & Environment Variables
/// Environment variable holding the spreadsheet id.
pub const ENV_VAR_SPREADSHEET_ID: &str = "MARATHON_SPREADSHEET_ID";
/// Environment variable holding the range (or sheet name) to read.
pub const ENV_VAR_SHEET_RANGE: &str = "MARATHON_SHEET_RANGE";
/// Environment variable holding the OAuth client secrets path.
pub const ENV_VAR_CREDENTIALS: &str = "MARATHON_CREDENTIALS";
/// Environment variable holding the token cache path.
pub const ENV_VAR_TOKEN: &str = "MARATHON_TOKEN";
/// Environment variable overriding the Sheets API base URL.
pub const ENV_VAR_SHEETS_URL: &str = "MARATHON_SHEETS_URL";
/// Environment variable overriding the HTTP timeout in seconds.
pub const ENV_VAR_HTTP_TIMEOUT: &str = "MARATHON_HTTP_TIMEOUT_SECS";
/// Default range: the whole "Main" sheet.
pub const DEFAULT_SHEET_RANGE: &str = "Main";
/// Default OAuth client secrets file.
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";
/// Default token cache file.
pub const DEFAULT_TOKEN_FILE: &str = "token.json";
/// Default Sheets API base URL.
pub const DEFAULT_SHEETS_URL: &str = "https://sheets.googleapis.com";
/// Default HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// OAuth
/// Read-only spreadsheet scope. Changing it requires deleting the token cache.
pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
/// Opaque state parameter sent with the consent URL.
pub const OAUTH_STATE: &str = "state-token";
/// Redirect URI used when the client secrets list none.
pub const OAUTH_OOB_REDIRECT: &str = "urn:ietf:wg:oauth:2.0:oob";
/// Seconds before expiry at which a cached token is treated as expired.
pub const TOKEN_EXPIRY_SKEW_SECS: i64 = 60;
/// Default POSIX permissions for the token cache (owner read/write).
#[cfg(unix)]
pub const TOKEN_FILE_PERMISSIONS: u32 = 0o600;

// Logging Configuration
/// Default log level when `--debug` is not given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level enabled by `--debug`.
pub const DEBUG_LOG_LEVEL: &str = "debug";
