//! Plan execution.
//!
//! [`materialize`] runs exactly one constructor and then the planned setters,
//! checking every step against the type's mutability contracts instead of
//! trusting the plan.

use crate::{
    ArgumentBinding, ConstructionPlan, Error, Instance, MutabilityClass, Record, Result,
    TypeDescriptor,
};
use tracing::{debug, info, instrument};

/// Execute `plan` against `record`, producing an instrumented instance.
///
/// Constructor parameters naming a [`MutabilityClass::ReadOnly`] property are
/// written to the backing value directly; all other parameters go through the
/// property's setter inside the constructor and count as that setter's call.
///
/// # Errors
///
/// Returns [`Error::PlanViolation`] if the plan does not fit the type or the
/// record, or asks for an assignment the property's mutability forbids. No
/// instance is returned in that case.
#[instrument(skip_all, fields(type_name = descriptor.name(), policy = %plan.policy))]
pub fn materialize(
    descriptor: &TypeDescriptor,
    record: &Record,
    plan: &ConstructionPlan,
) -> Result<Instance> {
    let violation = |reason: String| Error::plan_violation(descriptor.name(), reason);

    if plan.type_name != descriptor.name() {
        return Err(violation(format!(
            "plan was made for type '{}'",
            plan.type_name
        )));
    }

    let constructor = descriptor
        .constructors()
        .iter()
        .find(|c| **c == plan.constructor)
        .ok_or_else(|| {
            violation(format!(
                "constructor {} is not declared by the type",
                plan.constructor.id()
            ))
        })?;

    let parameters_match = plan.arguments.len() == constructor.parameters().len()
        && plan
            .arguments
            .iter()
            .zip(constructor.parameters())
            .all(|(argument, parameter)| argument.parameter == *parameter);
    if !parameters_match {
        return Err(violation(format!(
            "arguments do not match the parameters of constructor {}",
            constructor.id()
        )));
    }

    let mut instance = Instance::blank(descriptor);

    for argument in &plan.arguments {
        let property = descriptor.property(&argument.parameter).ok_or_else(|| {
            violation(format!("parameter '{}' is not a property", argument.parameter))
        })?;
        let value = match &argument.binding {
            ArgumentBinding::FromRecord => {
                let value = record.get(&argument.parameter).ok_or_else(|| {
                    violation(format!(
                        "record has no field '{}' for its constructor argument",
                        argument.parameter
                    ))
                })?;
                Some(value.to_string())
            }
            ArgumentBinding::Synthesized(value) => Some(value.clone()),
            ArgumentBinding::Default => None,
        };

        if property.mutability() == MutabilityClass::ReadOnly {
            instance.write_backing(property.name(), value);
        } else {
            instance.invoke_setter(property.name(), value);
        }
    }
    instance.record_construction(constructor.kind());
    debug!(
        constructor = constructor.id(),
        kind = %constructor.kind(),
        "Invoked constructor"
    );

    for assignment in &plan.post_assignments {
        let name = assignment.property.as_str();
        let property = descriptor
            .property(name)
            .ok_or_else(|| violation(format!("property '{name}' is not declared")))?;

        match property.mutability() {
            MutabilityClass::ReadOnly => {
                return Err(violation(format!("property '{name}' is read-only")));
            }
            MutabilityClass::InitOnly if constructor.binds(name) => {
                return Err(violation(format!(
                    "init-only property '{name}' was already initialized by the constructor"
                )));
            }
            mutability if !plan.policy.setter_reach().admits(mutability) => {
                return Err(violation(format!(
                    "{mutability} property '{name}' is not settable under {}",
                    plan.policy
                )));
            }
            _ => {}
        }
        if instance.setter_calls(name) > 0 {
            return Err(violation(format!("property '{name}' is assigned twice")));
        }

        instance.invoke_setter(name, Some(assignment.value.clone()));
        debug!(property = name, mutability = %property.mutability(), "Invoked setter");
    }

    info!(
        default_ctor_calls = instance.counters.default_ctor_calls,
        param_ctor_calls = instance.counters.param_ctor_calls,
        assignments = plan.post_assignments.len(),
        "Materialized instance"
    );
    Ok(instance)
}
