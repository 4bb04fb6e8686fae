//! Construction planning and instrumented materialization for hydrate.
//!
//! This crate decides how to build an instance of a described type from a
//! flat record of named values, then builds it while counting every
//! constructor and setter invocation.
//!
//! # Key Types
//!
//! - [`TypeDescriptor`]: properties (each with a [`MutabilityClass`]) and constructors of a type
//! - [`Record`]: ordered field name → value mapping from a data source
//! - [`ConstructionPolicy`]: strategy for choosing a constructor and setters
//! - [`Planner`] / [`plan`]: derive a [`ConstructionPlan`]
//! - [`materialize`]: execute a plan into an [`Instance`] with [`Counters`]
//! - [`Engine`]: plan + materialize, single or batched in parallel
//!
//! # Example
//!
//! ```rust
//! use hydrate_core::{ConstructionPolicy, MutabilityClass, Record, TypeDescriptor, materialize, plan};
//!
//! let descriptor = TypeDescriptor::builder("Widget")
//!     .property("Id", MutabilityClass::ReadOnly)
//!     .property("Label", MutabilityClass::PublicSet)
//!     .parameterless_constructor()
//!     .build()?;
//!
//! let record = Record::new().with_field("Label", "knob");
//! let plan = plan(&descriptor, &record, ConstructionPolicy::DefaultThenAccessibleSetters)?;
//! let instance = materialize(&descriptor, &record, &plan)?;
//!
//! assert_eq!(instance.value("Label"), Some("knob"));
//! assert_eq!(instance.counters.default_ctor_calls, 1);
//! # Ok::<(), hydrate_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: Enable serde serialization/deserialization for plans, policies and instances

mod descriptor;
mod engine;
mod error;
mod instance;
mod materializer;
mod plan;
mod planner;
mod policy;
mod record;
mod registry;
mod synth;

pub use descriptor::{
    ConstructorDescriptor, ConstructorKind, MutabilityClass, PropertyDescriptor, TypeDescriptor,
    TypeDescriptorBuilder,
};
pub use engine::{Engine, Job};
pub use error::{Error, Result};
pub use instance::{Counters, Instance};
pub use materializer::materialize;
pub use plan::{Argument, ArgumentBinding, Assignment, ConstructionPlan};
pub use planner::{Planner, plan};
pub use policy::{ConstructionPolicy, SetterReach};
pub use record::Record;
pub use registry::{DescriptorProvider, TypeRegistry};
pub use synth::{SeededSynthesizer, ValueSynthesizer};
