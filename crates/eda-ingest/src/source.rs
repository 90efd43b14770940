//! Dataset locations.

use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use eda_model::{EdaError, Result};

/// Where a CSV dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A remote `http://` or `https://` URL, fetched once.
    Url(String),
    /// A file on the local filesystem.
    Path(PathBuf),
}

impl Source {
    /// Classifies a location string. `http(s)://` is a URL, `file://` and
    /// anything else a local path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            Self::Path(PathBuf::from(path))
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

/// Downloads the whole body of `url`. Any transport error or non-success
/// status is reported as [`EdaError::SourceUnavailable`]; there is no retry.
pub(crate) fn fetch_url(url: &str, timeout: Duration) -> Result<Cursor<Vec<u8>>> {
    let unavailable = |message: String| EdaError::SourceUnavailable {
        location: url.to_string(),
        message,
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| unavailable(e.to_string()))?;

    debug!(url, timeout_secs = timeout.as_secs(), "fetching dataset");

    let response = client
        .get(url)
        .header(
            USER_AGENT,
            concat!("eda-profiler/", env!("CARGO_PKG_VERSION")),
        )
        .send()
        .map_err(|e| unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(unavailable(format!("HTTP status {status}")));
    }

    let body = response.bytes().map_err(|e| unavailable(e.to_string()))?;
    debug!(url, bytes = body.len(), "dataset fetched");
    Ok(Cursor::new(body.to_vec()))
}
