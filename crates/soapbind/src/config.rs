// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema generation settings.
//!
//! Defaults reproduce the conventional WSDL layout (`tns:` for generated
//! types, `xsd:` for XML Schema built-ins, `item` as array element name).
//! A YAML file can override any subset:
//!
//! ```yaml
//! target_namespace: "urn:catalog"
//! tns_prefix: tns
//! type_map:
//!   money: "xsd:decimal"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default target namespace when none is configured.
pub const DEFAULT_TARGET_NAMESPACE: &str = "urn:soapbind";

/// Prefix of generated (target namespace) types.
pub const DEFAULT_TNS_PREFIX: &str = "tns";

/// Prefix bound to `http://www.w3.org/2001/XMLSchema`.
pub const DEFAULT_XSD_PREFIX: &str = "xsd";

/// Element name used inside every generated array sequence.
pub const DEFAULT_ITEM_ELEMENT: &str = "item";

/// XML Schema namespace URI.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Schema generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub target_namespace: String,
    pub tns_prefix: String,
    pub xsd_prefix: String,
    pub item_element: String,
    /// Extra scalar translations, consulted before the built-in table.
    /// Values are written verbatim as `type=` attributes.
    pub type_map: BTreeMap<String, String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            target_namespace: DEFAULT_TARGET_NAMESPACE.to_string(),
            tns_prefix: DEFAULT_TNS_PREFIX.to_string(),
            xsd_prefix: DEFAULT_XSD_PREFIX.to_string(),
            item_element: DEFAULT_ITEM_ELEMENT.to_string(),
            type_map: BTreeMap::new(),
        }
    }
}

impl SchemaConfig {
    /// Configuration for a given target namespace, other settings default.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            target_namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// `tns:<local>`.
    pub fn qualify(&self, local: &str) -> String {
        format!("{}:{}", self.tns_prefix, local)
    }

    /// `xsd:<local>`.
    pub fn xsd(&self, local: &str) -> String {
        format!("{}:{}", self.xsd_prefix, local)
    }

    /// Remove the target namespace prefix from a qualified name, if present.
    pub fn local_name<'a>(&self, qualified: &'a str) -> &'a str {
        qualified
            .strip_prefix(self.tns_prefix.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(qualified)
    }

    #[cfg(feature = "definition-loaders")]
    pub fn from_yaml(content: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a YAML file.
    #[cfg(feature = "definition-loaders")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
