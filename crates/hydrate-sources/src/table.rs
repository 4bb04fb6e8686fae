//! Records from tabular fixtures.
//!
//! A [`Table`] is a header row plus data rows, the shape used by step-driven
//! test fixtures. A horizontal table yields one record per row. A vertical
//! table, whose header is exactly `Field | Value`, describes a single record
//! with one field per row.

use crate::{Error, Result};
use hydrate_core::Record;
use tracing::debug;

/// A header row plus data rows of string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given header and no rows.
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowWidthMismatch`] if the row width differs from the header.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(Error::RowWidthMismatch {
                row: self.rows.len(),
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(self)
    }

    /// Parse pipe-delimited text.
    ///
    /// The first non-blank line is the header. Blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTable`] for lines not delimited by `|` or a
    /// missing header, and [`Error::RowWidthMismatch`] for ragged rows.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table: Option<Self> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let cells = parse_line(line).ok_or_else(|| Error::MalformedTable {
                line: idx + 1,
                reason: "expected cells between '|' delimiters".to_string(),
            })?;

            match table.as_mut() {
                None => table = Some(Self::new(cells)),
                Some(table) => {
                    table.add_row(cells)?;
                }
            }
        }

        table.ok_or_else(|| Error::MalformedTable {
            line: 1,
            reason: "table has no header row".to_string(),
        })
    }

    /// Header cells.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the header is the vertical `Field | Value` form.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(
            self.headers.as_slice(),
            [field, value] if field.eq_ignore_ascii_case("field") && value.eq_ignore_ascii_case("value")
        )
    }

    /// One record per data row of a horizontal table, or the single record a
    /// vertical table describes.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        if self.is_vertical() {
            return vec![self.vertical_record()];
        }
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// The only record the table describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpectedSingleRow`] if a horizontal table does not have
    /// exactly one data row.
    pub fn single_record(&self) -> Result<Record> {
        let mut records = self.records();
        if records.len() != 1 {
            return Err(Error::ExpectedSingleRow {
                found: records.len(),
            });
        }
        let record = records.remove(0);
        debug!(fields = record.len(), vertical = self.is_vertical(), "Built record from table");
        Ok(record)
    }

    fn vertical_record(&self) -> Record {
        self.rows
            .iter()
            .map(|row| (row[0].clone(), row[1].clone()))
            .collect()
    }
}

fn parse_line(line: &str) -> Option<Vec<String>> {
    let inner = line.strip_prefix('|')?.strip_suffix('|')?;
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}
