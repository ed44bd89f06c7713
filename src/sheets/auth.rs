//! OAuth credentials for the Sheets API.
//!
//! Uses the installed-application flow: the client secrets come from a JSON
//! file downloaded from the Google Cloud console, and the resulting token is
//! cached in a local file so the browser consent only happens once. Expired
//! tokens are renewed with the cached refresh token.

use crate::constants::{
    OAUTH_OOB_REDIRECT, OAUTH_STATE, SHEETS_READONLY_SCOPE, TOKEN_EXPIRY_SKEW_SECS,
};
use crate::errors::{AppError, AppResult, AuthError};
use chrono::{DateTime, Datelike, Duration as ChronoDuration, Utc};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// OAuth client secrets (`installed` or `web` section of `credentials.json`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSecrets {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Consent page URL
    pub auth_uri: String,
    /// Token endpoint URL
    pub token_uri: String,
    /// Registered redirect URIs; the first one is used
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

#[derive(Deserialize)]
struct SecretsFile {
    installed: Option<ClientSecrets>,
    web: Option<ClientSecrets>,
}

impl ClientSecrets {
    /// Reads client secrets from `path`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` if the file cannot be read and
    /// `AuthError::InvalidCredentials` if it has neither section.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| AuthError::MissingCredentials {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Read {}", path.display());
        Ok(Self::from_json(&text)?)
    }

    /// Parses the contents of a client secrets file.
    pub fn from_json(text: &str) -> Result<Self, AuthError> {
        let file: SecretsFile = serde_json::from_str(text)
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        file.installed.or(file.web).ok_or_else(|| {
            AuthError::InvalidCredentials(
                "expected an \"installed\" or \"web\" section".to_string(),
            )
        })
    }

    fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or(OAUTH_OOB_REDIRECT)
    }

    /// The consent page URL the user opens to authorize read-only access.
    pub fn consent_url(&self) -> Result<Url, AuthError> {
        Url::parse_with_params(
            &self.auth_uri,
            &[
                ("access_type", "offline"),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri()),
                ("response_type", "code"),
                ("scope", SHEETS_READONLY_SCOPE),
                ("state", OAUTH_STATE),
            ],
        )
        .map_err(|e| AuthError::InvalidCredentials(format!("invalid auth_uri: {}", e)))
    }
}

/// A cached OAuth token, stored as JSON in the token file.
///
/// `expiry` is an RFC 3339 timestamp. A missing expiry, or the zero time
/// `0001-01-01T00:00:00Z`, means the token does not expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    /// Bearer token sent to the Sheets API
    pub access_token: String,
    /// Token type, normally `Bearer`
    #[serde(default)]
    pub token_type: String,
    /// Long-lived token used to obtain new access tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// When the access token stops working
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

impl StoredToken {
    /// Reads the cached token, or `None` when there is no cache yet.
    pub fn load(path: &Path) -> AppResult<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let token = serde_json::from_str(&text).map_err(|source| AuthError::InvalidToken {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(token))
    }

    /// Writes the token cache, readable by the owner only.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        eprintln!("Saving credential file to: {}", path.display());
        let json = serde_json::to_string(self)
            .map_err(|e| AppError::Io(io::Error::new(ErrorKind::InvalidData, e)))?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(crate::constants::TOKEN_FILE_PERMISSIONS);

        let mut file = options.open(path).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Unable to cache oauth token: {}", e),
            ))
        })?;
        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Whether the access token is expired, or will be within the skew window.
    ///
    /// An expiry that cannot be parsed is treated as expired so the token
    /// gets refreshed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let Some(expiry) = self.expiry.as_deref() else {
            return false;
        };
        match DateTime::parse_from_rfc3339(expiry) {
            Ok(expiry) if expiry.year() <= 1 => false,
            Ok(expiry) => {
                expiry.with_timezone(&Utc) - ChronoDuration::seconds(TOKEN_EXPIRY_SKEW_SECS)
                    <= now
            }
            Err(_) => true,
        }
    }
}

/// Body of a token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: String,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
}

impl TokenResponse {
    fn into_stored(self, now: DateTime<Utc>, previous_refresh: Option<String>) -> StoredToken {
        StoredToken {
            access_token: self.access_token,
            token_type: self.token_type,
            // Refresh responses usually omit the refresh token; keep the old one.
            refresh_token: self.refresh_token.or(previous_refresh),
            expiry: self
                .expires_in
                .map(|secs| (now + ChronoDuration::seconds(secs)).to_rfc3339()),
        }
    }
}

/// Produces access tokens, from the cache when possible.
pub struct Authenticator {
    secrets: ClientSecrets,
    token_path: PathBuf,
    client: Client,
}

impl Authenticator {
    /// Creates an authenticator that caches tokens at `token_path`.
    pub fn new(secrets: ClientSecrets, token_path: PathBuf, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AuthError::TokenRequest)?;
        Ok(Self {
            secrets,
            token_path,
            client,
        })
    }

    /// Returns a usable access token.
    ///
    /// Uses the cached token while it is valid, refreshes it when it has
    /// expired, and falls back to the interactive consent flow when there is
    /// no cache. New tokens are written back to the cache.
    pub fn access_token(&self, now: DateTime<Utc>) -> AppResult<String> {
        let token = match StoredToken::load(&self.token_path)? {
            Some(token) if !token.is_expired(now) => {
                debug!("Using cached token");
                return Ok(token.access_token);
            }
            Some(token) => {
                info!("Cached token expired, refreshing");
                self.refresh(&token, now)?
            }
            None => self.authorize_interactively(now)?,
        };

        token.save(&self.token_path)?;
        Ok(token.access_token)
    }

    /// Exchanges the refresh token of `token` for a new access token.
    ///
    /// Without a refresh token the consent flow is run instead.
    pub fn refresh(&self, token: &StoredToken, now: DateTime<Utc>) -> AppResult<StoredToken> {
        let Some(refresh_token) = token.refresh_token.as_deref() else {
            info!("Cached token has no refresh token, authorizing again");
            return self.authorize_interactively(now);
        };

        let response = self.request_token(&[
            ("client_id", self.secrets.client_id.as_str()),
            ("client_secret", self.secrets.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])?;
        Ok(response.into_stored(now, token.refresh_token.clone()))
    }

    /// Exchanges an authorization code from the consent page for a token.
    pub fn exchange_code(&self, code: &str, now: DateTime<Utc>) -> AppResult<StoredToken> {
        let response = self.request_token(&[
            ("client_id", self.secrets.client_id.as_str()),
            ("client_secret", self.secrets.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.secrets.redirect_uri()),
        ])?;
        Ok(response.into_stored(now, None))
    }

    fn authorize_interactively(&self, now: DateTime<Utc>) -> AppResult<StoredToken> {
        let url = self.secrets.consent_url()?;
        eprintln!(
            "Go to the following link in your browser then type the authorization code: \n{}",
            url
        );

        let mut code = String::new();
        io::stdin()
            .lock()
            .read_line(&mut code)
            .map_err(AuthError::AuthorizationCode)?;

        self.exchange_code(code.trim(), now)
    }

    fn request_token(&self, form: &[(&str, &str)]) -> AppResult<TokenResponse> {
        debug!("Requesting token from {}", self.secrets.token_uri);
        let response = self
            .client
            .post(&self.secrets.token_uri)
            .form(form)
            .send()
            .map_err(AuthError::TokenRequest)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(AuthError::TokenRejected { status, body }.into());
        }

        let token = response.json().map_err(AuthError::TokenRequest)?;
        Ok(token)
    }
}
