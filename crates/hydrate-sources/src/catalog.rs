//! The sample type family.
//!
//! Three variants share the same four properties, one per mutability class,
//! and differ only in which constructors they expose.

use hydrate_core::{MutabilityClass, Result, TypeDescriptor, TypeDescriptorBuilder, TypeRegistry};

/// Property without a setter.
pub const GET_ONLY_PROP: &str = "GetOnlyProp";
/// Property with a restricted setter.
pub const PRIVATE_SET_PROP: &str = "PrivateSetProp";
/// Property settable only during construction.
pub const INIT_PROP: &str = "InitProp";
/// Freely settable property.
pub const FULL_PROP: &str = "FullProp";

/// Property names in declaration order, which is also the parameter order.
pub const PROPERTIES: [&str; 4] = [GET_ONLY_PROP, PRIVATE_SET_PROP, INIT_PROP, FULL_PROP];

/// Variant with only a parameterless constructor.
pub const DEFAULT_ONLY: &str = "DefaultOnlyConstructorClass";
/// Variant with only the four-parameter constructor.
pub const PARAM_ONLY: &str = "ParamOnlyConstructorClass";
/// Variant with both constructors.
pub const DEFAULT_AND_PARAM: &str = "DefaultAndParamConstructorClass";

/// Variant names in reporting order.
pub const VARIANTS: [&str; 3] = [DEFAULT_ONLY, PARAM_ONLY, DEFAULT_AND_PARAM];

fn family(name: &str) -> TypeDescriptorBuilder {
    TypeDescriptor::builder(name)
        .property(GET_ONLY_PROP, MutabilityClass::ReadOnly)
        .property(PRIVATE_SET_PROP, MutabilityClass::RestrictedSet)
        .property(INIT_PROP, MutabilityClass::InitOnly)
        .property(FULL_PROP, MutabilityClass::PublicSet)
}

/// Descriptor of [`DEFAULT_ONLY`].
///
/// # Errors
///
/// Propagates descriptor validation failures.
pub fn default_only() -> Result<TypeDescriptor> {
    family(DEFAULT_ONLY).parameterless_constructor().build()
}

/// Descriptor of [`PARAM_ONLY`].
///
/// # Errors
///
/// Propagates descriptor validation failures.
pub fn param_only() -> Result<TypeDescriptor> {
    family(PARAM_ONLY)
        .parameterized_constructor(PROPERTIES)
        .build()
}

/// Descriptor of [`DEFAULT_AND_PARAM`].
///
/// # Errors
///
/// Propagates descriptor validation failures.
pub fn default_and_param() -> Result<TypeDescriptor> {
    family(DEFAULT_AND_PARAM)
        .parameterless_constructor()
        .parameterized_constructor(PROPERTIES)
        .build()
}

/// Registry holding all three variants.
///
/// # Errors
///
/// Propagates descriptor validation and registration failures.
pub fn registry() -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    registry.register(default_only()?)?;
    registry.register(param_only()?)?;
    registry.register(default_and_param()?)?;
    Ok(registry)
}
