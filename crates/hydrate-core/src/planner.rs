//! Construction planning.
//!
//! The planner is pure: it looks at a [`TypeDescriptor`], a [`Record`] and a
//! [`ConstructionPolicy`] and decides which constructor to call, where each
//! constructor argument comes from, and which setters run afterwards.

use crate::{
    Argument, ArgumentBinding, Assignment, ConstructionPlan, ConstructionPolicy,
    ConstructorDescriptor, Error, Record, Result, SeededSynthesizer, TypeDescriptor,
    ValueSynthesizer,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Derives [`ConstructionPlan`]s.
#[derive(Clone)]
pub struct Planner {
    synthesizer: Arc<dyn ValueSynthesizer>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::with_synthesizer(SeededSynthesizer::default())
    }
}

impl fmt::Debug for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Planner").finish_non_exhaustive()
    }
}

impl Planner {
    /// Planner with the default seeded synthesizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner using a custom synthesizer for [`ConstructionPolicy::SyntheticFillAll`].
    #[must_use]
    pub fn with_synthesizer(synthesizer: impl ValueSynthesizer + 'static) -> Self {
        Self {
            synthesizer: Arc::new(synthesizer),
        }
    }

    /// Derive a plan for materializing `descriptor` from `record` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoViableConstructor`] when the type has no constructor
    /// at all, or under [`ConstructionPolicy::ParameterizedOnly`] when it has
    /// no parameterized constructor.
    #[instrument(skip_all, fields(type_name = descriptor.name(), policy = %policy))]
    pub fn plan(
        &self,
        descriptor: &TypeDescriptor,
        record: &Record,
        policy: ConstructionPolicy,
    ) -> Result<ConstructionPlan> {
        let constructor = select_constructor(descriptor, record, policy)?;
        debug!(
            constructor = constructor.id(),
            kind = %constructor.kind(),
            "Selected constructor"
        );

        let arguments = constructor
            .parameters()
            .iter()
            .map(|parameter| Argument {
                parameter: parameter.clone(),
                binding: self.bind_argument(descriptor, record, policy, parameter),
            })
            .collect();

        let post_assignments = self.post_assignments(descriptor, constructor, record, policy);
        debug!(
            assignments = post_assignments.len(),
            "Planned post-construction assignments"
        );

        Ok(ConstructionPlan {
            type_name: descriptor.name().to_string(),
            policy,
            constructor: constructor.clone(),
            arguments,
            post_assignments,
        })
    }

    fn bind_argument(
        &self,
        descriptor: &TypeDescriptor,
        record: &Record,
        policy: ConstructionPolicy,
        parameter: &str,
    ) -> ArgumentBinding {
        if policy.synthesizes()
            && let Some(property) = descriptor.property(parameter)
        {
            return ArgumentBinding::Synthesized(
                self.synthesizer.synthesize(descriptor.name(), property),
            );
        }
        if record.contains(parameter) {
            ArgumentBinding::FromRecord
        } else {
            ArgumentBinding::Default
        }
    }

    fn post_assignments(
        &self,
        descriptor: &TypeDescriptor,
        constructor: &ConstructorDescriptor,
        record: &Record,
        policy: ConstructionPolicy,
    ) -> Vec<Assignment> {
        let reach = policy.setter_reach();

        descriptor
            .properties()
            .iter()
            .filter(|property| !constructor.binds(property.name()))
            .filter(|property| reach.admits(property.mutability()))
            .filter_map(|property| {
                // Synthesis ignores the record entirely
                let value = if policy.synthesizes() {
                    self.synthesizer.synthesize(descriptor.name(), property)
                } else {
                    record.get(property.name())?.to_string()
                };
                Some(Assignment {
                    property: property.name().to_string(),
                    value,
                })
            })
            .collect()
    }
}

/// Derive a plan with the default [`Planner`].
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan(
    descriptor: &TypeDescriptor,
    record: &Record,
    policy: ConstructionPolicy,
) -> Result<ConstructionPlan> {
    Planner::default().plan(descriptor, record, policy)
}

fn select_constructor<'a>(
    descriptor: &'a TypeDescriptor,
    record: &Record,
    policy: ConstructionPolicy,
) -> Result<&'a ConstructorDescriptor> {
    let parameterless = descriptor.parameterless_constructor();
    let parameterized = descriptor.parameterized_constructor();

    let selected = match policy {
        ConstructionPolicy::PreferParameterizedIfComplete => match (parameterized, parameterless) {
            // The richer constructor wins whenever the record satisfies it
            (Some(full), _) if full.parameters().iter().all(|p| record.contains(p)) => Some(full),
            (_, Some(default)) => Some(default),
            (full, None) => full,
        },
        ConstructionPolicy::ParameterizedOnly => {
            return parameterized.ok_or_else(|| {
                Error::no_viable_constructor(
                    descriptor.name(),
                    policy,
                    "type has no parameterized constructor",
                )
            });
        }
        ConstructionPolicy::DefaultThenAccessibleSetters | ConstructionPolicy::SyntheticFillAll => {
            parameterless.or(parameterized)
        }
    };

    selected.ok_or_else(|| {
        Error::no_viable_constructor(descriptor.name(), policy, "type exposes no constructors")
    })
}
