//! Sheets API HTTP client for reading a value range.

use super::ValueRange;
use crate::errors::{AppError, AppResult, SheetsError};
use crate::table::Grid;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Client for the `spreadsheets.values.get` endpoint.
pub struct SheetsClient {
    base_url: String,
    client: Client,
}

impl SheetsClient {
    /// Creates a new Sheets client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Sheets API (e.g., "https://sheets.googleapis.com")
    /// * `timeout` - Timeout applied to each request
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SheetsError::Request)?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Builds the request URL, percent-encoding the id and range as path segments.
    fn values_url(&self, spreadsheet_id: &str, range: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            AppError::Config(format!("Invalid Sheets API URL {:?}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Config(format!(
                    "Sheets API URL cannot have a path: {:?}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);
        Ok(url)
    }

    /// Fetches `range` from the spreadsheet and returns it as a grid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The Sheets API is not reachable
    /// - The API answers with a non-success status (bad id, no access, expired token)
    /// - The response body is not a value range
    pub fn fetch_grid(
        &self,
        spreadsheet_id: &str,
        range: &str,
        access_token: &str,
    ) -> AppResult<Grid> {
        let url = self.values_url(spreadsheet_id, range)?;
        debug!("Fetching range {:?}", range);

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .map_err(SheetsError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(SheetsError::Status { status, body }.into());
        }

        let value_range: ValueRange = response.json().map_err(|e| {
            SheetsError::InvalidResponse(format!("Failed to parse value range: {}", e))
        })?;

        debug!(
            "Got {} rows for range {:?}",
            value_range.values.len(),
            value_range.range
        );
        Ok(value_range.into_grid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> SheetsClient {
        SheetsClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_sheets_client_creation() {
        let client = client("https://sheets.googleapis.com");
        assert_eq!(client.base_url, "https://sheets.googleapis.com");
    }

    #[test]
    fn test_values_url() {
        let url = client("https://sheets.googleapis.com")
            .values_url("1AbC", "Main")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/1AbC/values/Main"
        );
    }

    #[test]
    fn test_values_url_encodes_range() {
        let url = client("http://127.0.0.1:1234/")
            .values_url("1AbC", "Week Plan/A1:D")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:1234/v4/spreadsheets/1AbC/values/Week%20Plan%2FA1:D"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = client("not a url").values_url("1AbC", "Main");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
