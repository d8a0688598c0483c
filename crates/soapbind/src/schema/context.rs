// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-builder context: type registry plus the generated fragments.
//!
//! One [`SchemaContext`] lives for one schema-build session. It can be
//! shared between threads; each registration is a single check-then-insert
//! under the write lock, so concurrent requests for the same shape emit
//! exactly one fragment.

use super::xsd::{escape_attr, XsdComplexType};
use crate::config::{SchemaConfig, XSD_NAMESPACE};
use crate::descriptor::translate_type;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

/// Operations the array emitter needs from a schema document.
pub trait SchemaBuilder {
    /// Settings used for prefixes and element names.
    fn config(&self) -> &SchemaConfig;

    /// Remember that `key` (a descriptor) resolves to `canonical_name`.
    fn add_type(&self, key: &str, canonical_name: &str);

    /// Previously recorded mapping for `key`.
    fn get_type(&self, key: &str) -> Option<String>;

    /// Qualified XSD name for a singular (non-array) type.
    fn registered_xsd_type(&self, singular: &str) -> String;

    /// Append a fragment unless one with the same name already exists.
    ///
    /// Returns `true` when the fragment was added. The existence check and
    /// the insert happen atomically.
    fn append_complex_type(&self, fragment: XsdComplexType) -> bool;

    /// Append `fragment` and map `key` to `canonical_name` in one step.
    ///
    /// Readers see either neither or both, so a mapping never names a
    /// fragment that is missing from the schema. Returns `true` when the
    /// fragment was added.
    fn register_complex_type(
        &self,
        key: &str,
        canonical_name: &str,
        fragment: XsdComplexType,
    ) -> bool;
}

/// Built-in scalar translations.
fn builtin_xsd_local(name: &str) -> Option<&'static str> {
    let local = match name {
        "string" | "str" => "string",
        "int" | "integer" => "int",
        "long" => "long",
        "short" => "short",
        "byte" => "byte",
        "float" => "float",
        "double" => "double",
        "decimal" => "decimal",
        "bool" | "boolean" => "boolean",
        "dateTime" | "datetime" => "dateTime",
        "date" => "date",
        "time" => "time",
        "base64Binary" | "bytes" => "base64Binary",
        "mixed" | "any" => "anyType",
        _ => return None,
    };
    Some(local)
}

#[derive(Debug, Default)]
struct SchemaState {
    /// descriptor -> qualified canonical name
    types: HashMap<String, String>,
    names: HashSet<String>,
    /// Registration order is emission order.
    fragments: Vec<XsdComplexType>,
}

impl SchemaState {
    fn append(&mut self, fragment: XsdComplexType) -> bool {
        if !self.names.insert(fragment.name.clone()) {
            return false;
        }
        log::debug!("[SchemaContext] registered complexType {}", fragment.name);
        self.fragments.push(fragment);
        true
    }
}

/// In-memory schema document.
#[derive(Debug)]
pub struct SchemaContext {
    config: SchemaConfig,
    state: RwLock<SchemaState>,
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new(SchemaConfig::default())
    }
}

impl SchemaContext {
    pub fn new(config: SchemaConfig) -> Self {
        Self {
            config,
            state: RwLock::new(SchemaState::default()),
        }
    }

    /// Drop every registration, keeping the configuration.
    ///
    /// Call between independent schema builds that reuse one context.
    pub fn reset(&self) {
        let mut state = self.state.write();
        log::debug!(
            "[SchemaContext] reset ({} fragments discarded)",
            state.fragments.len()
        );
        *state = SchemaState::default();
    }

    /// Snapshot of the registered fragments, in registration order.
    pub fn fragments(&self) -> Vec<XsdComplexType> {
        self.state.read().fragments.clone()
    }

    /// Fragment registered under an unqualified name.
    pub fn fragment(&self, name: &str) -> Option<XsdComplexType> {
        self.state
            .read()
            .fragments
            .iter()
            .find(|f| f.name == name)
            .cloned()
    }

    pub fn contains_complex_type(&self, name: &str) -> bool {
        self.state.read().names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.state.read().fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().fragments.is_empty()
    }

    /// Render an `xsd:schema` element for a WSDL `types` section.
    pub fn to_schema_xml(&self) -> String {
        let state = self.state.read();
        let p = &self.config.xsd_prefix;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<{p}:schema xmlns:{p}=\"{}\" xmlns:{t}=\"{ns}\" targetNamespace=\"{ns}\">",
            XSD_NAMESPACE,
            t = self.config.tns_prefix,
            ns = escape_attr(&self.config.target_namespace),
        );
        for fragment in &state.fragments {
            fragment.write_xml(&mut out, p, 2);
        }
        let _ = writeln!(out, "</{p}:schema>");
        out
    }
}

impl SchemaBuilder for SchemaContext {
    fn config(&self) -> &SchemaConfig {
        &self.config
    }

    fn add_type(&self, key: &str, canonical_name: &str) {
        self.state
            .write()
            .types
            .entry(key.to_string())
            .or_insert_with(|| canonical_name.to_string());
    }

    fn get_type(&self, key: &str) -> Option<String> {
        self.state.read().types.get(key).cloned()
    }

    fn registered_xsd_type(&self, singular: &str) -> String {
        if let Some(mapped) = self.config.type_map.get(singular) {
            return mapped.clone();
        }
        match builtin_xsd_local(singular) {
            Some(local) => self.config.xsd(local),
            None => self.config.qualify(&translate_type(singular)),
        }
    }

    fn append_complex_type(&self, fragment: XsdComplexType) -> bool {
        self.state.write().append(fragment)
    }

    fn register_complex_type(
        &self,
        key: &str,
        canonical_name: &str,
        fragment: XsdComplexType,
    ) -> bool {
        let mut state = self.state.write();
        let added = state.append(fragment);
        state
            .types
            .entry(key.to_string())
            .or_insert_with(|| canonical_name.to_string());
        added
    }
}
