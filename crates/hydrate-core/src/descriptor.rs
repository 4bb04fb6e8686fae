//! Static construction metadata for a materializable type.
//!
//! A [`TypeDescriptor`] lists the properties of a type, each tagged with a
//! [`MutabilityClass`], and the constructors the type exposes. Descriptors
//! are built once through [`TypeDescriptorBuilder`] and are immutable
//! afterwards, so they can be shared across threads behind an `Arc`.

use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// When and whether a property may be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MutabilityClass {
    /// No setter. The value can only come from a constructor parameter.
    ReadOnly,
    /// Setter reachable only by trusted code.
    RestrictedSet,
    /// Settable once, as part of construction.
    InitOnly,
    /// Freely settable.
    PublicSet,
}

impl MutabilityClass {
    /// All mutability classes, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::ReadOnly,
        Self::RestrictedSet,
        Self::InitOnly,
        Self::PublicSet,
    ];

    /// Whether the property has a setter at all.
    #[must_use]
    pub const fn is_settable(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }

    /// Whether a consumer without trusted access can reach the setter.
    #[must_use]
    pub const fn is_publicly_settable(self) -> bool {
        matches!(self, Self::InitOnly | Self::PublicSet)
    }

    /// Kebab-case name, as used in configuration and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::RestrictedSet => "restricted-set",
            Self::InitOnly => "init-only",
            Self::PublicSet => "public-set",
        }
    }
}

impl fmt::Display for MutabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutabilityClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown mutability class: {s}"))
    }
}

/// A named property and its mutability contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    name: String,
    mutability: MutabilityClass,
}

impl PropertyDescriptor {
    /// Create a property descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, mutability: MutabilityClass) -> Self {
        Self {
            name: name.into(),
            mutability,
        }
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mutability class of the property.
    #[must_use]
    pub const fn mutability(&self) -> MutabilityClass {
        self.mutability
    }
}

/// Shape of a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConstructorKind {
    /// Takes no arguments.
    Parameterless,
    /// Takes one argument per listed property.
    Parameterized,
}

impl fmt::Display for ConstructorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameterless => f.write_str("parameterless"),
            Self::Parameterized => f.write_str("parameterized"),
        }
    }
}

/// A constructor exposed by a type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructorDescriptor {
    id: usize,
    parameters: Vec<String>,
}

impl ConstructorDescriptor {
    /// Identifier, unique within the owning type.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Parameter names, in call order. Each names a property of the owning type.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Whether this constructor takes `property` as a parameter.
    #[must_use]
    pub fn binds(&self, property: &str) -> bool {
        self.parameters.iter().any(|p| p == property)
    }

    /// Shape of this constructor.
    #[must_use]
    pub fn kind(&self) -> ConstructorKind {
        if self.parameters.is_empty() {
            ConstructorKind::Parameterless
        } else {
            ConstructorKind::Parameterized
        }
    }
}

/// Immutable construction metadata for one type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    properties: Vec<PropertyDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
    /// Map from property name to its index in `properties`.
    property_index: HashMap<String, usize>,
}

impl TypeDescriptor {
    /// Start describing a type.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name)
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Look up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.property_index
            .get(name)
            .map(|&idx| &self.properties[idx])
    }

    /// Constructors in declaration order.
    #[must_use]
    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    /// The parameterless constructor, if the type has one.
    #[must_use]
    pub fn parameterless_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructor_of_kind(ConstructorKind::Parameterless)
    }

    /// The parameterized constructor, if the type has one.
    #[must_use]
    pub fn parameterized_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructor_of_kind(ConstructorKind::Parameterized)
    }

    /// Whether the type exposes a parameterless constructor.
    #[must_use]
    pub fn has_parameterless_constructor(&self) -> bool {
        self.parameterless_constructor().is_some()
    }

    /// Whether the type exposes a parameterized constructor.
    #[must_use]
    pub fn has_parameterized_constructor(&self) -> bool {
        self.parameterized_constructor().is_some()
    }

    fn constructor_of_kind(&self, kind: ConstructorKind) -> Option<&ConstructorDescriptor> {
        self.constructors.iter().find(|c| c.kind() == kind)
    }
}

/// Builder for [`TypeDescriptor`].
///
/// Validation happens in [`build`](Self::build), so declarations can be made
/// in any order.
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    name: String,
    properties: Vec<PropertyDescriptor>,
    constructors: Vec<Vec<String>>,
}

impl TypeDescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Declare a property.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, mutability: MutabilityClass) -> Self {
        self.properties.push(PropertyDescriptor::new(name, mutability));
        self
    }

    /// Declare a constructor taking no arguments.
    #[must_use]
    pub fn parameterless_constructor(mut self) -> Self {
        self.constructors.push(Vec::new());
        self
    }

    /// Declare a constructor taking the named properties, in order.
    ///
    /// An empty parameter list declares a parameterless constructor.
    #[must_use]
    pub fn parameterized_constructor<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructors
            .push(parameters.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the declarations and freeze them into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProperty`] if a property name repeats,
    /// [`Error::DuplicateParameter`] or [`Error::UnknownParameter`] if a
    /// constructor parameter list is malformed, and
    /// [`Error::DuplicateConstructor`] if two constructors share a kind.
    pub fn build(self) -> Result<TypeDescriptor> {
        let mut property_index = HashMap::with_capacity(self.properties.len());
        for (idx, property) in self.properties.iter().enumerate() {
            if property_index
                .insert(property.name().to_string(), idx)
                .is_some()
            {
                return Err(Error::DuplicateProperty {
                    type_name: self.name,
                    property: property.name().to_string(),
                });
            }
        }

        let mut constructors: Vec<ConstructorDescriptor> =
            Vec::with_capacity(self.constructors.len());
        for (id, parameters) in self.constructors.into_iter().enumerate() {
            let mut seen = HashSet::new();
            for parameter in &parameters {
                if !property_index.contains_key(parameter) {
                    return Err(Error::UnknownParameter {
                        type_name: self.name,
                        parameter: parameter.clone(),
                    });
                }
                if !seen.insert(parameter.as_str()) {
                    return Err(Error::DuplicateParameter {
                        type_name: self.name,
                        parameter: parameter.clone(),
                    });
                }
            }

            let constructor = ConstructorDescriptor { id, parameters };
            if constructors.iter().any(|c| c.kind() == constructor.kind()) {
                return Err(Error::DuplicateConstructor {
                    type_name: self.name,
                    kind: constructor.kind(),
                });
            }
            constructors.push(constructor);
        }

        Ok(TypeDescriptor {
            name: self.name,
            properties: self.properties,
            constructors,
            property_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> TypeDescriptorBuilder {
        TypeDescriptor::builder("Widget")
            .property("Id", MutabilityClass::ReadOnly)
            .property("Label", MutabilityClass::PublicSet)
    }

    #[test]
    fn test_build_with_both_constructors() {
        let descriptor = widget()
            .parameterless_constructor()
            .parameterized_constructor(["Id", "Label"])
            .build()
            .unwrap();

        assert_eq!(descriptor.name(), "Widget");
        assert_eq!(descriptor.properties().len(), 2);
        assert!(descriptor.has_parameterless_constructor());
        assert!(descriptor.has_parameterized_constructor());

        let full = descriptor.parameterized_constructor().unwrap();
        assert_eq!(full.id(), 1);
        assert_eq!(full.parameters(), ["Id", "Label"]);
        assert!(full.binds("Label"));
        assert!(!descriptor.parameterless_constructor().unwrap().binds("Label"));
    }

    #[test]
    fn test_build_without_constructors() {
        let descriptor = widget().build().unwrap();
        assert!(!descriptor.has_parameterless_constructor());
        assert!(!descriptor.has_parameterized_constructor());
    }

    #[test]
    fn test_property_lookup() {
        let descriptor = widget().build().unwrap();
        let id = descriptor.property("Id").unwrap();
        assert_eq!(id.mutability(), MutabilityClass::ReadOnly);
        assert!(descriptor.property("Missing").is_none());
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let err = widget()
            .property("Label", MutabilityClass::InitOnly)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateProperty {
                type_name: "Widget".to_string(),
                property: "Label".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let err = widget()
            .parameterized_constructor(["Id", "Colour"])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownParameter { parameter, .. } if parameter == "Colour"));
    }

    #[test]
    fn test_repeated_parameter_rejected() {
        let err = widget()
            .parameterized_constructor(["Id", "Id"])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter { .. }));
    }

    #[test]
    fn test_second_constructor_of_same_kind_rejected() {
        let err = widget()
            .parameterless_constructor()
            .parameterized_constructor(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateConstructor {
                kind: ConstructorKind::Parameterless,
                ..
            }
        ));
    }

    #[test]
    fn test_mutability_settability() {
        assert!(!MutabilityClass::ReadOnly.is_settable());
        assert!(MutabilityClass::RestrictedSet.is_settable());
        assert!(!MutabilityClass::RestrictedSet.is_publicly_settable());
        assert!(MutabilityClass::InitOnly.is_publicly_settable());
        assert!(MutabilityClass::PublicSet.is_publicly_settable());
    }

    #[test]
    fn test_mutability_parse() {
        assert_eq!(
            "init-only".parse::<MutabilityClass>().unwrap(),
            MutabilityClass::InitOnly
        );
        assert_eq!(
            "Public-Set".parse::<MutabilityClass>().unwrap(),
            MutabilityClass::PublicSet
        );
        assert!("writable".parse::<MutabilityClass>().is_err());
    }
}
