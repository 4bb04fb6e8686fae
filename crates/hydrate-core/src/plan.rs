//! Resolved construction plans.

use crate::{ConstructionPolicy, ConstructorDescriptor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a constructor argument comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ArgumentBinding {
    /// Read the record field named after the parameter.
    FromRecord,
    /// Pass a synthesized value.
    Synthesized(String),
    /// Pass the default (absent) value.
    Default,
}

/// One constructor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Argument {
    /// Parameter (and property) name.
    pub parameter: String,
    /// Source of the value.
    pub binding: ArgumentBinding,
}

/// One post-construction setter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    /// Property to assign.
    pub property: String,
    /// Value to assign.
    pub value: String,
}

/// A concrete sequence of construction and assignment steps.
///
/// Produced by [`Planner::plan`](crate::Planner::plan) and executed by
/// [`materialize`](crate::materialize).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructionPlan {
    /// Type the plan was made for.
    pub type_name: String,
    /// Policy that produced the plan.
    pub policy: ConstructionPolicy,
    /// Constructor to invoke.
    pub constructor: ConstructorDescriptor,
    /// Arguments, one per constructor parameter, in parameter order.
    pub arguments: Vec<Argument>,
    /// Setter invocations after construction, in execution order.
    pub post_assignments: Vec<Assignment>,
}

impl ConstructionPlan {
    /// Whether the plan assigns `property` after construction.
    #[must_use]
    pub fn assigns(&self, property: &str) -> bool {
        self.post_assignments.iter().any(|a| a.property == property)
    }
}
