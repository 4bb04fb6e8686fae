//! Value synthesis for policies that must fill every property.

use crate::PropertyDescriptor;
use uuid::Uuid;

/// Produces property values for policies that fill every property.
///
/// Implementations must be deterministic for a given input so that repeated
/// materializations of the same request agree.
pub trait ValueSynthesizer: Send + Sync {
    /// Produce a value for `property` of `type_name`.
    fn synthesize(&self, type_name: &str, property: &PropertyDescriptor) -> String;
}

/// Synthesizer producing `"{property}{uuid}"`, with a v5 uuid derived from a
/// seed, the type name and the property name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeededSynthesizer {
    seed: u64,
}

impl SeededSynthesizer {
    /// Create a synthesizer for the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed in use.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl ValueSynthesizer for SeededSynthesizer {
    fn synthesize(&self, type_name: &str, property: &PropertyDescriptor) -> String {
        let seeded = Uuid::new_v5(&Uuid::NAMESPACE_OID, &self.seed.to_le_bytes());
        let type_scope = Uuid::new_v5(&seeded, type_name.as_bytes());
        let id = Uuid::new_v5(&type_scope, property.name().as_bytes());
        format!("{}{id}", property.name())
    }
}
