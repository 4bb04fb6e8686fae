//! Property-based tests for materialization invariants.
//!
//! These tests verify the behavioral contracts of planning and materialization:
//! - Planning and materialization are deterministic
//! - Every instance is constructed exactly once
//! - Every setter runs at most once
//! - Read-only properties are never assigned

use hydrate_core::{
    ConstructionPolicy, Error, MutabilityClass, Record, TypeDescriptor, materialize, plan,
};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating test data
// =============================================================================

fn mutability_strategy() -> impl Strategy<Value = MutabilityClass> {
    proptest::sample::select(MutabilityClass::ALL.to_vec())
}

fn policy_strategy() -> impl Strategy<Value = ConstructionPolicy> {
    proptest::sample::select(ConstructionPolicy::ALL.to_vec())
}

/// A type with 1..=6 uniquely named properties and a random constructor set.
fn descriptor_strategy() -> impl Strategy<Value = TypeDescriptor> {
    (
        proptest::collection::vec(mutability_strategy(), 1..=6),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(classes, parameterless, parameterized)| {
            let names: Vec<String> = (0..classes.len()).map(|i| format!("prop_{i}")).collect();
            let mut builder = TypeDescriptor::builder("Generated");
            for (name, class) in names.iter().zip(classes) {
                builder = builder.property(name.clone(), class);
            }
            if parameterless {
                builder = builder.parameterless_constructor();
            }
            if parameterized {
                builder = builder.parameterized_constructor(names);
            }
            builder.build().expect("generated descriptor should be valid")
        })
}

/// A record covering a random subset of `prop_0..prop_7`, so some fields miss
/// and some name no property at all.
fn record_strategy() -> impl Strategy<Value = Record> {
    proptest::collection::btree_map(0..8_usize, "[a-z]{1,6}", 0..8).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(i, value)| (format!("prop_{i}"), value))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Contract: the same request always yields the same plan and instance.
    #[test]
    fn materialization_is_deterministic(
        descriptor in descriptor_strategy(),
        record in record_strategy(),
        policy in policy_strategy(),
    ) {
        let first = plan(&descriptor, &record, policy);
        let second = plan(&descriptor, &record, policy);
        prop_assert_eq!(&first, &second);

        if let Ok(plan) = first {
            let a = materialize(&descriptor, &record, &plan).expect("planned steps are valid");
            let b = materialize(&descriptor, &record, &plan).expect("planned steps are valid");
            prop_assert_eq!(a, b);
        }
    }

    /// Contract: exactly one constructor runs and no setter runs twice.
    #[test]
    fn construction_is_single_and_setters_at_most_once(
        descriptor in descriptor_strategy(),
        record in record_strategy(),
        policy in policy_strategy(),
    ) {
        let Ok(plan) = plan(&descriptor, &record, policy) else {
            return Ok(());
        };
        let instance = materialize(&descriptor, &record, &plan).expect("planned steps are valid");

        prop_assert_eq!(instance.construction_count(), 1);
        for (name, calls) in &instance.counters.per_property_setter_calls {
            prop_assert!(*calls <= 1, "setter of '{}' ran {} times", name, calls);
        }
    }

    /// Contract: no plan assigns a read-only property, and no read-only
    /// property's setter counter ever moves.
    #[test]
    fn read_only_properties_are_never_assigned(
        descriptor in descriptor_strategy(),
        record in record_strategy(),
        policy in policy_strategy(),
    ) {
        let Ok(plan) = plan(&descriptor, &record, policy) else {
            return Ok(());
        };
        let instance = materialize(&descriptor, &record, &plan).expect("planned steps are valid");

        for property in descriptor.properties() {
            if property.mutability() == MutabilityClass::ReadOnly {
                prop_assert!(!plan.assigns(property.name()));
                prop_assert_eq!(instance.setter_calls(property.name()), 0);
            }
        }
    }

    /// Contract: planning only fails when no permitted constructor exists.
    #[test]
    fn planning_fails_only_without_viable_constructor(
        descriptor in descriptor_strategy(),
        record in record_strategy(),
        policy in policy_strategy(),
    ) {
        let expected_failure = match policy {
            ConstructionPolicy::ParameterizedOnly => !descriptor.has_parameterized_constructor(),
            _ => descriptor.constructors().is_empty(),
        };

        match plan(&descriptor, &record, policy) {
            Ok(_) => prop_assert!(!expected_failure),
            Err(Error::NoViableConstructor { .. }) => prop_assert!(expected_failure),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Contract: the parameterized constructor wins when the record fills it.
    #[test]
    fn complete_record_selects_parameterized_constructor(
        descriptor in descriptor_strategy(),
        value in "[a-z]{1,6}",
    ) {
        prop_assume!(descriptor.has_parameterized_constructor());
        let record: Record = descriptor
            .properties()
            .iter()
            .map(|p| (p.name().to_string(), value.clone()))
            .collect();

        let plan = plan(&descriptor, &record, ConstructionPolicy::PreferParameterizedIfComplete)
            .expect("parameterized constructor is viable");
        let instance = materialize(&descriptor, &record, &plan).expect("planned steps are valid");

        prop_assert_eq!(instance.counters.param_ctor_calls, 1);
        prop_assert_eq!(instance.counters.default_ctor_calls, 0);
    }

    /// Contract: synthetic fill leaves no settable property empty.
    #[test]
    fn synthetic_fill_populates_every_settable_property(
        descriptor in descriptor_strategy(),
        record in record_strategy(),
    ) {
        prop_assume!(!descriptor.constructors().is_empty());
        let plan = plan(&descriptor, &record, ConstructionPolicy::SyntheticFillAll)
            .expect("a constructor exists");
        let instance = materialize(&descriptor, &record, &plan).expect("planned steps are valid");

        for property in descriptor.properties() {
            if property.mutability().is_settable() {
                prop_assert!(instance.value(property.name()).is_some(), "{}", property.name());
            }
        }
    }
}
