//! Consumer profiles.
//!
//! A [`Backend`] pairs a construction policy with the record its consumer
//! would hand to the core for the sample family.

use crate::catalog::{FULL_PROP, INIT_PROP, PRIVATE_SET_PROP};
use crate::{Result, Table, json};
use hydrate_core::{ConstructionPolicy, Record};
use std::fmt;
use std::str::FromStr;

const JSON_PAYLOAD: &str = r#"{
    "GetOnlyProp": "asd",
    "PrivateSetProp": "qwe",
    "InitProp": "zxc",
    "FullProp": "vbn"
}"#;

/// A family of record consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// JSON-style deserializer.
    Json,
    /// Document-database mapper.
    Document,
    /// Tabular test-fixture instantiator.
    Table,
    /// Randomized fixture generator.
    Synthetic,
}

impl Backend {
    /// All backends, in reporting order.
    pub const ALL: [Self; 4] = [Self::Json, Self::Document, Self::Table, Self::Synthetic];

    /// Policy that reproduces this backend.
    #[must_use]
    pub const fn policy(self) -> ConstructionPolicy {
        match self {
            Self::Json => ConstructionPolicy::PreferParameterizedIfComplete,
            Self::Document => ConstructionPolicy::ParameterizedOnly,
            Self::Table => ConstructionPolicy::DefaultThenAccessibleSetters,
            Self::Synthetic => ConstructionPolicy::SyntheticFillAll,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Document => "document",
            Self::Table => "table",
            Self::Synthetic => "synthetic",
        }
    }

    /// The record this backend supplies for the sample family.
    ///
    /// The JSON and document payloads carry all four fields, the table omits
    /// the read-only one and the synthetic generator starts from nothing.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures on the embedded payloads.
    pub fn sample_record(self) -> Result<Record> {
        match self {
            Self::Json | Self::Document => json::record_from_str(JSON_PAYLOAD),
            Self::Table => {
                let mut table = Table::new([PRIVATE_SET_PROP, INIT_PROP, FULL_PROP]);
                table.add_row(["asd", "zxc", "vbn"])?;
                table.single_record()
            }
            Self::Synthetic => Ok(Record::new()),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown backend: {s}"))
    }
}
