use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    InvalidUrl,
    Timeout,
    Connect,
    Request,
    Status,
    Body,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid_url",
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Status => "status",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-record fetch failure. Never fatal to a run; the `Display` text is what
/// ends up in the report's `error_msg` column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("connection to {url} failed: {message}")]
    Connect { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read body from {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::Connect { .. } => FetchErrorKind::Connect,
            Self::Request { .. } => FetchErrorKind::Request,
            Self::Status { .. } => FetchErrorKind::Status,
            Self::Body { .. } => FetchErrorKind::Body,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. } => url,
        }
    }

    pub fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            return Self::Timeout { url };
        }
        let message = error_chain(&err);
        if err.is_connect() {
            Self::Connect { url, message }
        } else if err.is_body() || err.is_decode() {
            Self::Body { url, message }
        } else {
            Self::Request { url, message }
        }
    }
}

/// reqwest hides the interesting part (dns, refused, tls) in the source chain.
fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(src) = cur {
        let text = src.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        cur = src.source();
    }
    out
}
