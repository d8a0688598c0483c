// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Service-definition model.
//!
//! Read-only metadata about a service: its methods with declared parameter
//! and return descriptors, and the ordered field list of every complex type.

use crate::descriptor::{parse_descriptor, strip_unbounded_suffix};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One declared field of a complex type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexTypeField {
    pub name: String,
    /// Declared type descriptor, e.g. `int`, `Item`, `Item[]`.
    #[serde(rename = "type")]
    pub type_descriptor: String,
    #[serde(default)]
    pub nillable: bool,
}

impl ComplexTypeField {
    pub fn new(name: impl Into<String>, type_descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_descriptor: type_descriptor.into(),
            nillable: false,
        }
    }

    /// Mark the field as accepting null.
    pub fn nillable(mut self) -> Self {
        self.nillable = true;
        self
    }
}

/// Named complex type with its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexTypeDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<ComplexTypeField>,
}

impl ComplexTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: ComplexTypeField) -> Self {
        self.fields.push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_descriptor: String,
}

/// A service operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    /// Declared return descriptor; `void` (the default) declares no result.
    #[serde(default = "void_type", rename = "returns")]
    pub return_type: String,
}

fn void_type() -> String {
    "void".to_string()
}

impl MethodDefinition {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: return_type.into(),
        }
    }

    pub fn parameter(mut self, name: impl Into<String>, type_descriptor: impl Into<String>) -> Self {
        self.parameters.push(ParameterDefinition {
            name: name.into(),
            type_descriptor: type_descriptor.into(),
        });
        self
    }

    pub fn returns_void(&self) -> bool {
        is_void(&self.return_type)
    }
}

pub(crate) fn is_void(descriptor: &str) -> bool {
    matches!(descriptor.trim(), "" | "void")
}

/// Lookup of complex-type field lists by type name.
pub trait ComplexTypeIndex {
    /// Ordered fields of `type_name`, `None` when it is not a complex type.
    fn fields(&self, type_name: &str) -> Option<&[ComplexTypeField]>;

    fn is_complex_type(&self, type_name: &str) -> bool {
        self.fields(type_name).is_some()
    }
}

/// Complete service definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
    #[serde(default)]
    pub complex_types: Vec<ComplexTypeDefinition>,
}

impl ServiceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    pub fn complex_type(mut self, complex_type: ComplexTypeDefinition) -> Self {
        self.complex_types.push(complex_type);
        self
    }

    pub fn find_method(&self, name: &str) -> Option<&MethodDefinition> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn find_complex_type(&self, name: &str) -> Option<&ComplexTypeDefinition> {
        self.complex_types.iter().find(|t| t.name == name)
    }

    /// Hash-indexed copy of the complex types, for hot binding paths.
    pub fn complex_type_registry(&self) -> ComplexTypeRegistry {
        let mut registry = ComplexTypeRegistry::new();
        for complex_type in &self.complex_types {
            registry.register(complex_type.clone());
        }
        registry
    }

    /// Structural checks run by the loaders.
    ///
    /// Rejects empty or duplicate names and any declared descriptor with
    /// invalid array bounds.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Definition("service name is empty".into()));
        }

        let mut type_names = HashSet::new();
        for complex_type in &self.complex_types {
            if complex_type.name.trim().is_empty() {
                return Err(Error::Definition("complex type with empty name".into()));
            }
            if !type_names.insert(complex_type.name.as_str()) {
                return Err(Error::Definition(format!(
                    "duplicate complex type '{}'",
                    complex_type.name
                )));
            }
            let mut field_names = HashSet::new();
            for field in &complex_type.fields {
                if field.name.trim().is_empty() {
                    return Err(Error::Definition(format!(
                        "complex type '{}' has a field with an empty name",
                        complex_type.name
                    )));
                }
                if !field_names.insert(field.name.as_str()) {
                    return Err(Error::Definition(format!(
                        "duplicate field '{}.{}'",
                        complex_type.name, field.name
                    )));
                }
                parse_descriptor(&field.type_descriptor)?;
            }
        }

        let mut method_names = HashSet::new();
        for method in &self.methods {
            if !method_names.insert(method.name.as_str()) {
                return Err(Error::Definition(format!(
                    "duplicate method '{}'",
                    method.name
                )));
            }
            parse_descriptor(&method.return_type)?;
            for parameter in &method.parameters {
                parse_descriptor(&parameter.type_descriptor)?;
            }
        }

        for complex_type in &self.complex_types {
            for field in &complex_type.fields {
                let (element, _) = strip_unbounded_suffix(&field.type_descriptor);
                if element == complex_type.name {
                    log::debug!(
                        "[ServiceDefinition] {}.{} is self-referential; schema output is not cycle-checked",
                        complex_type.name,
                        field.name
                    );
                }
            }
        }

        Ok(())
    }
}

impl ComplexTypeIndex for ServiceDefinition {
    fn fields(&self, type_name: &str) -> Option<&[ComplexTypeField]> {
        self.find_complex_type(type_name).map(|t| t.fields.as_slice())
    }
}

/// [`HashMap`]-backed [`ComplexTypeIndex`].
#[derive(Debug, Default, Clone)]
pub struct ComplexTypeRegistry {
    types: HashMap<String, ComplexTypeDefinition>,
}

impl ComplexTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a complex type, replacing any previous one of the same name.
    pub fn register(&mut self, complex_type: ComplexTypeDefinition) {
        self.types.insert(complex_type.name.clone(), complex_type);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl ComplexTypeIndex for ComplexTypeRegistry {
    fn fields(&self, type_name: &str) -> Option<&[ComplexTypeField]> {
        self.types.get(type_name).map(|t| t.fields.as_slice())
    }
}
