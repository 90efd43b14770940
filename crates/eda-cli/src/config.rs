//! TOML configuration for the profiler CLI.
//!
//! Every field is optional. Absent fields fall back to the adult census
//! defaults, and command-line arguments override whatever the file says.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use eda_ingest::{LoadOptions, Source};
use eda_model::ColumnSpec;
use eda_model::census::DEFAULT_SOURCE_URL;

/// Missing-value marker used by the census extract.
pub const CENSUS_MISSING_MARKER: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Path or URL of the CSV to profile.
    pub source: Option<String>,
    /// Field values read as missing, in addition to empty fields.
    pub missing_values: Vec<String>,
    /// Request timeout for URL sources, in seconds.
    pub timeout_secs: Option<u64>,
    /// Column partition. `None` means the census schema.
    pub schema: Option<ColumnSpec>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            source: None,
            missing_values: vec![CENSUS_MISSING_MARKER.to_string()],
            timeout_secs: None,
            schema: None,
        }
    }
}

impl ProfileConfig {
    /// Read a config file, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the source, preferring `cli_source` over the file's value.
    pub fn source(&self, cli_source: Option<&str>) -> Source {
        let location = cli_source
            .or(self.source.as_deref())
            .unwrap_or(DEFAULT_SOURCE_URL);
        Source::parse(location)
    }

    /// The configured schema, or the census schema.
    pub fn spec(&self) -> ColumnSpec {
        self.schema.clone().unwrap_or_else(ColumnSpec::adult_census)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Load options typed by `spec`.
    pub fn load_options_for(&self, spec: &ColumnSpec) -> LoadOptions {
        self.finish_options(LoadOptions::for_spec(spec))
    }

    /// Load options for ad-hoc queries: typed by the explicit schema when the
    /// file has one, otherwise by inference alone.
    pub fn inferred_load_options(&self) -> LoadOptions {
        match &self.schema {
            Some(spec) => self.load_options_for(spec),
            None => self.finish_options(LoadOptions::default()),
        }
    }

    fn finish_options(&self, options: LoadOptions) -> LoadOptions {
        let options = options.with_missing_values(self.missing_values.iter().cloned());
        match self.timeout() {
            Some(timeout) => options.with_timeout(timeout),
            None => options,
        }
    }
}
