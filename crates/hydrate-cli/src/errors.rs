//! CLI error types with miette diagnostics

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Failed to read {}", path.display())]
    #[diagnostic(
        code(hydrate::cli::file_error),
        help("Check file permissions and ensure the path exists")
    )]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {} is invalid", path.display())]
    #[diagnostic(code(hydrate::cli::config_parse_error))]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("No construction policy given")]
    #[diagnostic(
        code(hydrate::cli::missing_policy),
        help(
            "Pass --policy or set [defaults] policy in the config file; one of: prefer-parameterized-if-complete, parameterized-only, default-then-accessible-setters, synthetic-fill-all"
        )
    )]
    MissingPolicy,

    #[error("Failed to write report")]
    #[diagnostic(code(hydrate::cli::report_error))]
    ReportError {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] hydrate_sources::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] hydrate_core::Error),
}

impl CliError {
    pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileError {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::ReportError { source }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::ReportError {
            source: source.into(),
        }
    }
}
