//! Plan-then-materialize pipeline, single or batched.

use crate::{ConstructionPolicy, Instance, Planner, Record, Result, TypeDescriptor, materialize};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// One independent materialization request.
#[derive(Debug, Clone)]
pub struct Job {
    /// Type to materialize.
    pub descriptor: Arc<TypeDescriptor>,
    /// Source record.
    pub record: Record,
    /// Policy to plan with.
    pub policy: ConstructionPolicy,
}

impl Job {
    /// Create a job.
    #[must_use]
    pub fn new(descriptor: Arc<TypeDescriptor>, record: Record, policy: ConstructionPolicy) -> Self {
        Self {
            descriptor,
            record,
            policy,
        }
    }
}

/// Runs [`Planner::plan`] followed by [`materialize`].
#[derive(Debug, Clone, Default)]
pub struct Engine {
    planner: Planner,
}

impl Engine {
    /// Engine with the default planner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom planner.
    #[must_use]
    pub fn with_planner(planner: Planner) -> Self {
        Self { planner }
    }

    /// The planner in use.
    #[must_use]
    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Plan and materialize one instance.
    ///
    /// # Errors
    ///
    /// Propagates planning and materialization failures.
    pub fn run(
        &self,
        descriptor: &TypeDescriptor,
        record: &Record,
        policy: ConstructionPolicy,
    ) -> Result<Instance> {
        let plan = self.planner.plan(descriptor, record, policy)?;
        materialize(descriptor, record, &plan)
    }

    /// Run independent jobs in parallel. Results are returned in job order.
    #[must_use]
    pub fn run_batch(&self, jobs: &[Job]) -> Vec<Result<Instance>> {
        debug!(jobs = jobs.len(), "Running materialization batch");
        jobs.par_iter()
            .map(|job| self.run(&job.descriptor, &job.record, job.policy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MutabilityClass};

    fn descriptor(parameterless: bool) -> Arc<TypeDescriptor> {
        let mut builder = TypeDescriptor::builder("Sample")
            .property("Id", MutabilityClass::ReadOnly)
            .property("Full", MutabilityClass::PublicSet)
            .parameterized_constructor(["Id", "Full"]);
        if parameterless {
            builder = builder.parameterless_constructor();
        }
        Arc::new(builder.build().unwrap())
    }

    #[test]
    fn test_run_plans_and_materializes() {
        let record = Record::new().with_field("Id", "1").with_field("Full", "x");
        let instance = Engine::new()
            .run(
                &descriptor(true),
                &record,
                ConstructionPolicy::PreferParameterizedIfComplete,
            )
            .unwrap();
        assert_eq!(instance.counters.param_ctor_calls, 1);
        assert_eq!(instance.value("Id"), Some("1"));
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let record = Record::new().with_field("Full", "x");
        let jobs = vec![
            Job::new(descriptor(true), record.clone(), ConstructionPolicy::SyntheticFillAll),
            Job::new(
                Arc::new(
                    TypeDescriptor::builder("Bare")
                        .property("Full", MutabilityClass::PublicSet)
                        .build()
                        .unwrap(),
                ),
                record.clone(),
                ConstructionPolicy::ParameterizedOnly,
            ),
            Job::new(descriptor(false), record, ConstructionPolicy::ParameterizedOnly),
        ];

        let results = Engine::new().run_batch(&jobs);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().counters.default_ctor_calls,
            1
        );
        assert!(matches!(results[1], Err(Error::NoViableConstructor { .. })));
        assert_eq!(results[2].as_ref().unwrap().counters.param_ctor_calls, 1);
    }
}
