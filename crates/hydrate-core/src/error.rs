//! Error types for descriptor building, planning and materialization.

use crate::{ConstructionPolicy, ConstructorKind};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for materialization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing, planning or materializing a type.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum Error {
    /// A property name was registered twice on the same type.
    #[error("Type '{type_name}' declares property '{property}' more than once")]
    #[diagnostic(
        code(hydrate::core::duplicate_property),
        help("Property names must be unique within a type descriptor")
    )]
    DuplicateProperty {
        /// Type being described.
        type_name: String,
        /// The repeated property name.
        property: String,
    },

    /// A constructor parameter does not name a declared property.
    #[error("Constructor of '{type_name}' takes parameter '{parameter}' which is not a declared property")]
    #[diagnostic(
        code(hydrate::core::unknown_parameter),
        help("Declare the property before listing it as a constructor parameter")
    )]
    UnknownParameter {
        /// Type being described.
        type_name: String,
        /// The unmatched parameter name.
        parameter: String,
    },

    /// A constructor lists the same parameter twice.
    #[error("Constructor of '{type_name}' takes parameter '{parameter}' more than once")]
    #[diagnostic(code(hydrate::core::duplicate_parameter))]
    DuplicateParameter {
        /// Type being described.
        type_name: String,
        /// The repeated parameter name.
        parameter: String,
    },

    /// A second constructor of the same kind was declared.
    #[error("Type '{type_name}' declares more than one {kind} constructor")]
    #[diagnostic(
        code(hydrate::core::duplicate_constructor),
        help("A type exposes at most one parameterless and one parameterized constructor")
    )]
    DuplicateConstructor {
        /// Type being described.
        type_name: String,
        /// Kind of the repeated constructor.
        kind: ConstructorKind,
    },

    /// The policy cannot find a constructor it is allowed to invoke.
    #[error("No viable constructor for '{type_name}' under policy {policy}: {reason}")]
    #[diagnostic(
        code(hydrate::core::no_viable_constructor),
        help("Pick a policy compatible with the constructors this type exposes")
    )]
    NoViableConstructor {
        /// Type being planned.
        type_name: String,
        /// Policy that was requested.
        policy: ConstructionPolicy,
        /// Why no constructor qualified.
        reason: String,
    },

    /// A plan asked the materializer to do something the type forbids.
    #[error("Construction plan for '{type_name}' is invalid: {reason}")]
    #[diagnostic(
        code(hydrate::core::plan_violation),
        help("This indicates a defect in the planner or a hand-built plan")
    )]
    PlanViolation {
        /// Type being materialized.
        type_name: String,
        /// Which check failed.
        reason: String,
    },

    /// A descriptor was registered twice under the same name.
    #[error("Type '{type_name}' is already registered")]
    #[diagnostic(code(hydrate::core::duplicate_type))]
    DuplicateType {
        /// The repeated type name.
        type_name: String,
    },

    /// A lookup named a type the provider does not know.
    #[error("Type '{type_name}' is not registered")]
    #[diagnostic(
        code(hydrate::core::unknown_type),
        help("Register the type descriptor before materializing it")
    )]
    UnknownType {
        /// The requested type name.
        type_name: String,
    },
}

impl Error {
    /// Create a no-viable-constructor error
    #[must_use]
    pub fn no_viable_constructor(
        type_name: impl Into<String>,
        policy: ConstructionPolicy,
        reason: impl Into<String>,
    ) -> Self {
        Self::NoViableConstructor {
            type_name: type_name.into(),
            policy,
            reason: reason.into(),
        }
    }

    /// Create a plan violation error
    #[must_use]
    pub fn plan_violation(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PlanViolation {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown type error
    #[must_use]
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }
}
