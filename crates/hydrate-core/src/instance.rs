//! Materialized instances and their invocation counters.

use crate::{ConstructorKind, TypeDescriptor};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many times each construction step ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Counters {
    /// Parameterless constructor invocations.
    pub default_ctor_calls: u32,
    /// Parameterized constructor invocations.
    pub param_ctor_calls: u32,
    /// Setter invocations per property. Every declared property has an entry.
    pub per_property_setter_calls: BTreeMap<String, u32>,
}

/// A materialized object together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instance {
    /// Type that was materialized.
    pub type_name: String,
    /// Property values. Every declared property has an entry; `None` is the default.
    pub values: BTreeMap<String, Option<String>>,
    /// Invocation counters.
    pub counters: Counters,
}

impl Instance {
    /// A fresh, unconstructed instance with every property at its default.
    pub(crate) fn blank(descriptor: &TypeDescriptor) -> Self {
        let values = descriptor
            .properties()
            .iter()
            .map(|p| (p.name().to_string(), None))
            .collect();
        let per_property_setter_calls = descriptor
            .properties()
            .iter()
            .map(|p| (p.name().to_string(), 0))
            .collect();

        Self {
            type_name: descriptor.name().to_string(),
            values,
            counters: Counters {
                per_property_setter_calls,
                ..Counters::default()
            },
        }
    }

    pub(crate) fn record_construction(&mut self, kind: ConstructorKind) {
        match kind {
            ConstructorKind::Parameterless => self.counters.default_ctor_calls += 1,
            ConstructorKind::Parameterized => self.counters.param_ctor_calls += 1,
        }
    }

    /// Store a value without going through a setter.
    pub(crate) fn write_backing(&mut self, property: &str, value: Option<String>) {
        self.values.insert(property.to_string(), value);
    }

    /// Store a value through the property's setter.
    pub(crate) fn invoke_setter(&mut self, property: &str, value: Option<String>) {
        self.write_backing(property, value);
        *self
            .counters
            .per_property_setter_calls
            .entry(property.to_string())
            .or_insert(0) += 1;
    }

    /// Value of a property, `None` if it was never given one.
    #[must_use]
    pub fn value(&self, property: &str) -> Option<&str> {
        self.values.get(property).and_then(|v| v.as_deref())
    }

    /// How many times the property's setter ran.
    #[must_use]
    pub fn setter_calls(&self, property: &str) -> u32 {
        self.counters
            .per_property_setter_calls
            .get(property)
            .copied()
            .unwrap_or(0)
    }

    /// Total constructor invocations. Always 1 for a materialized instance.
    #[must_use]
    pub fn construction_count(&self) -> u32 {
        self.counters.default_ctor_calls + self.counters.param_ctor_calls
    }
}
