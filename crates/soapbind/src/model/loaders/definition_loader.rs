// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unified definition loader with format auto-detection.

use crate::error::{Error, Result};
use crate::model::ServiceDefinition;
use std::path::Path;

use super::xml::XmlLoader;
use super::yaml::YamlLoader;

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Xml,
    Yaml,
}

impl DefinitionFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("xml") => Some(DefinitionFormat::Xml),
            Some("yaml") | Some("yml") => Some(DefinitionFormat::Yaml),
            _ => None,
        }
    }

    /// Detect format from file content.
    pub fn from_content(content: &str) -> Option<Self> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('<') {
            Some(DefinitionFormat::Xml)
        } else if trimmed.starts_with("name:")
            || trimmed.starts_with("---")
            || trimmed.contains("\nname:")
        {
            Some(DefinitionFormat::Yaml)
        } else {
            None
        }
    }
}

/// Loads a [`ServiceDefinition`] from either format.
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Load from a file: extension first, content sniffing as fallback.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ServiceDefinition> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let format = DefinitionFormat::from_extension(path)
            .or_else(|| DefinitionFormat::from_content(&content))
            .ok_or_else(|| {
                Error::Definition(format!(
                    "unable to detect definition format for '{}'; use .xml, .yaml or .yml",
                    path.display()
                ))
            })?;

        Self::load_from_str(&content, format)
    }

    pub fn load_from_str(content: &str, format: DefinitionFormat) -> Result<ServiceDefinition> {
        match format {
            DefinitionFormat::Xml => XmlLoader::parse_xml(content),
            DefinitionFormat::Yaml => YamlLoader::parse_yaml(content),
        }
    }

    pub fn load_from_str_auto(content: &str) -> Result<ServiceDefinition> {
        let format = DefinitionFormat::from_content(content).ok_or_else(|| {
            Error::Definition("unable to detect definition format from content".into())
        })?;
        Self::load_from_str(content, format)
    }
}
