//! Optional `hydrate.toml` configuration
//!
//! ```toml
//! [defaults]
//! policy = "default-then-accessible-setters"
//! output = "json"
//! seed = 7
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```
//!
//! Command-line flags override every value read here.

use crate::errors::CliError;
use crate::logging::{LogLevel, TracingFormat};
use crate::report::OutputFormat;
use hydrate_core::ConstructionPolicy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub policy: Option<ConstructionPolicy>,
    pub output: Option<OutputFormat>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub format: Option<TracingFormat>,
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| CliError::file_error(path, e))?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParseError {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }
}
