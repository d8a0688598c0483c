// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML service-definition loader.
//!
//! # Example YAML
//!
//! ```yaml
//! name: Catalog
//! namespace: "urn:catalog"
//! complex_types:
//!   - name: Item
//!     fields:
//!       - { name: id, type: int }
//!       - { name: label, type: string, nillable: true }
//! methods:
//!   - name: listItems
//!     parameters:
//!       - { name: filter, type: string }
//!     returns: "Item[]"
//! ```

use crate::error::Result;
use crate::model::ServiceDefinition;
use std::fs;
use std::path::Path;

pub struct YamlLoader;

impl YamlLoader {
    /// Load and validate a definition file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ServiceDefinition> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse and validate YAML content.
    pub fn parse_yaml(content: &str) -> Result<ServiceDefinition> {
        let definition: ServiceDefinition = serde_yaml::from_str(content)?;
        definition.validate()?;
        log::debug!(
            "[YamlLoader] loaded service '{}' ({} methods, {} complex types)",
            definition.name,
            definition.methods.len(),
            definition.complex_types.len()
        );
        Ok(definition)
    }
}
