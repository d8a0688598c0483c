// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Service-definition loaders for YAML and XML documents.
//!
//! # Example
//!
//! ```rust,ignore
//! use soapbind::model::loaders::DefinitionLoader;
//!
//! // Auto-detect format from the extension, then from the content
//! let definition = DefinitionLoader::load("catalog.yaml")?;
//! ```

#[cfg(feature = "definition-loaders")]
mod definition_loader;

#[cfg(feature = "definition-loaders")]
pub mod xml;

#[cfg(feature = "definition-loaders")]
pub mod yaml;

#[cfg(feature = "definition-loaders")]
pub use definition_loader::{DefinitionFormat, DefinitionLoader};

#[cfg(feature = "definition-loaders")]
pub use xml::XmlLoader;

#[cfg(feature = "definition-loaders")]
pub use yaml::YamlLoader;
