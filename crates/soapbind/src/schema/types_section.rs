// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! WSDL `types` section driver.
//!
//! Walks a [`ServiceDefinition`] and fills a schema with one sequence type
//! per declared complex type plus every array shape used by a field, a
//! parameter or a return type.

use super::array::ArrayTypeEmitter;
use super::context::{SchemaBuilder, SchemaContext};
use super::xsd::{XsdComplexType, XsdElement};
use crate::config::{SchemaConfig, DEFAULT_TARGET_NAMESPACE};
use crate::error::Result;
use crate::model::{is_void, ComplexTypeDefinition, ServiceDefinition};

/// Populates a schema from service definitions.
pub struct TypesSectionBuilder<'a, S: SchemaBuilder + ?Sized> {
    schema: &'a S,
    arrays: ArrayTypeEmitter<'a, S>,
}

impl<'a, S: SchemaBuilder + ?Sized> TypesSectionBuilder<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        Self {
            schema,
            arrays: ArrayTypeEmitter::new(schema),
        }
    }

    /// Qualified type for any descriptor; `None` for `void`.
    pub fn resolve_type(&self, descriptor: &str) -> Result<Option<String>> {
        if is_void(descriptor) {
            return Ok(None);
        }
        match self.arrays.resolve_array_complex_type(descriptor)? {
            Some(array) => Ok(Some(array)),
            None => Ok(Some(self.schema.registered_xsd_type(descriptor.trim()))),
        }
    }

    /// Register every type reachable from `definition`.
    ///
    /// Complex types are emitted in declaration order, then method
    /// signatures. The first invalid descriptor aborts the build.
    pub fn add_definition(&self, definition: &ServiceDefinition) -> Result<()> {
        log::debug!(
            "[TypesSectionBuilder] building types for service '{}'",
            definition.name
        );
        for complex_type in &definition.complex_types {
            self.add_complex_type(complex_type)?;
        }
        for method in &definition.methods {
            for parameter in &method.parameters {
                self.resolve_type(&parameter.type_descriptor)?;
            }
            self.resolve_type(&method.return_type)?;
        }
        Ok(())
    }

    /// Emit the sequence type of one complex type.
    pub fn add_complex_type(&self, complex_type: &ComplexTypeDefinition) -> Result<String> {
        let mut fragment = XsdComplexType::new(complex_type.name.clone());
        for field in &complex_type.fields {
            let type_ref = self
                .resolve_type(&field.type_descriptor)?
                .unwrap_or_else(|| self.schema.config().xsd("anyType"));
            fragment = fragment
                .element(XsdElement::new(&field.name, type_ref).nillable(field.nillable));
        }
        self.schema.append_complex_type(fragment);
        Ok(self.schema.config().qualify(&complex_type.name))
    }
}

/// Build a fresh schema for `definition`.
///
/// The definition's own namespace replaces the target namespace unless
/// `config` already names a non-default one.
pub fn build_schema(
    definition: &ServiceDefinition,
    mut config: SchemaConfig,
) -> Result<SchemaContext> {
    if let Some(namespace) = &definition.namespace {
        if config.target_namespace == DEFAULT_TARGET_NAMESPACE {
            config.target_namespace = namespace.clone();
        }
    }
    let schema = SchemaContext::new(config);
    TypesSectionBuilder::new(&schema).add_definition(definition)?;
    Ok(schema)
}
