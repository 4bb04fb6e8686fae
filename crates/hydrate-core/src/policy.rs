//! Construction policies.
//!
//! Each policy reproduces how one family of consumers picks a constructor
//! and decides which properties to assign after construction.

use crate::MutabilityClass;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy for deriving a construction plan from a type and a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConstructionPolicy {
    /// Use the parameterized constructor when the record fills every
    /// parameter, otherwise the parameterless one plus public setters.
    PreferParameterizedIfComplete,
    /// Require the parameterized constructor; missing fields pass as absent.
    ParameterizedOnly,
    /// Use the parameterless constructor, then every setter with a value.
    DefaultThenAccessibleSetters,
    /// Produce a fully populated instance, synthesizing missing values.
    SyntheticFillAll,
}

/// Which setters a policy may invoke after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterReach {
    /// Only setters an external consumer can see (`InitOnly`, `PublicSet`).
    Public,
    /// Every setter, including restricted ones.
    Trusted,
}

impl SetterReach {
    /// Whether a property of the given class can be assigned under this reach.
    #[must_use]
    pub const fn admits(self, mutability: MutabilityClass) -> bool {
        match self {
            Self::Public => mutability.is_publicly_settable(),
            Self::Trusted => mutability.is_settable(),
        }
    }
}

impl ConstructionPolicy {
    /// All policies.
    pub const ALL: [Self; 4] = [
        Self::PreferParameterizedIfComplete,
        Self::ParameterizedOnly,
        Self::DefaultThenAccessibleSetters,
        Self::SyntheticFillAll,
    ];

    /// Setters this policy may invoke after construction.
    #[must_use]
    pub const fn setter_reach(self) -> SetterReach {
        match self {
            Self::PreferParameterizedIfComplete | Self::ParameterizedOnly => SetterReach::Public,
            Self::DefaultThenAccessibleSetters | Self::SyntheticFillAll => SetterReach::Trusted,
        }
    }

    /// Whether values missing from the record are synthesized.
    #[must_use]
    pub const fn synthesizes(self) -> bool {
        matches!(self, Self::SyntheticFillAll)
    }

    /// Kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreferParameterizedIfComplete => "prefer-parameterized-if-complete",
            Self::ParameterizedOnly => "parameterized-only",
            Self::DefaultThenAccessibleSetters => "default-then-accessible-setters",
            Self::SyntheticFillAll => "synthetic-fill-all",
        }
    }
}

impl fmt::Display for ConstructionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstructionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown construction policy: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_round_trips_through_name() {
        for policy in ConstructionPolicy::ALL {
            assert_eq!(policy.as_str().parse::<ConstructionPolicy>(), Ok(policy));
        }
        assert!("reflection".parse::<ConstructionPolicy>().is_err());
    }

    #[test]
    fn test_public_reach_skips_restricted_setters() {
        let reach = ConstructionPolicy::PreferParameterizedIfComplete.setter_reach();
        assert!(!reach.admits(MutabilityClass::ReadOnly));
        assert!(!reach.admits(MutabilityClass::RestrictedSet));
        assert!(reach.admits(MutabilityClass::InitOnly));
        assert!(reach.admits(MutabilityClass::PublicSet));
    }

    #[test]
    fn test_trusted_reach_never_admits_read_only() {
        let reach = ConstructionPolicy::DefaultThenAccessibleSetters.setter_reach();
        assert!(!reach.admits(MutabilityClass::ReadOnly));
        assert!(reach.admits(MutabilityClass::RestrictedSet));
    }
}
