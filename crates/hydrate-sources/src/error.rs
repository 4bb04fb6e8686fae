//! Error types for record sources.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for record source operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning source data into records.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The JSON text could not be parsed.
    #[error("Failed to parse JSON record: {source}")]
    #[diagnostic(code(hydrate::sources::json))]
    Json {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The JSON value is not an object.
    #[error("Expected a JSON object for a record, found {found}")]
    #[diagnostic(
        code(hydrate::sources::not_an_object),
        help("A record is a flat object of field names to scalar values")
    )]
    NotAnObject {
        /// Kind of value that was found.
        found: &'static str,
    },

    /// A record field holds an array or object.
    #[error("Field '{field}' holds a nested {found}; records only carry scalar values")]
    #[diagnostic(code(hydrate::sources::non_scalar_field))]
    NonScalarField {
        /// Offending field name.
        field: String,
        /// Kind of value that was found.
        found: &'static str,
    },

    /// A table row has a different number of cells than the header.
    #[error("Table row {row} has {found} cells but the header has {expected}")]
    #[diagnostic(code(hydrate::sources::row_width_mismatch))]
    RowWidthMismatch {
        /// Zero-based data row index.
        row: usize,
        /// Header width.
        expected: usize,
        /// Row width.
        found: usize,
    },

    /// A single record was requested from a table with a different row count.
    #[error("Expected exactly one table row, found {found}")]
    #[diagnostic(
        code(hydrate::sources::expected_single_row),
        help("Use Table::records() to read every row")
    )]
    ExpectedSingleRow {
        /// Number of data rows present.
        found: usize,
    },

    /// Table text could not be parsed.
    #[error("Malformed table at line {line}: {reason}")]
    #[diagnostic(
        code(hydrate::sources::malformed_table),
        help("Each line must look like '| cell | cell |'")
    )]
    MalformedTable {
        /// One-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },

    /// A failure from the materialization core.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] hydrate_core::Error),
}
