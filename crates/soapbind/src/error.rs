// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Schema generation, binding and definition-loading failures.
///
/// Every variant aborts the operation that raised it: a failed schema build
/// yields no schema, a failed bind yields no response. Malformed descriptor
/// text is not an error at all (the descriptor is read as a plain type).
#[derive(Debug, Error)]
pub enum Error {
    /// Well-formed array suffix with impossible bounds (`[0]`, `[5,2]`).
    #[error("invalid type descriptor '{descriptor}': {reason}")]
    InvalidDescriptor { descriptor: String, reason: String },

    /// Runtime value is not the declared complex type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// An array of complex types was declared but the value is not a sequence.
    #[error("type mismatch: expected sequence of {type_name}, got {actual}")]
    NotASequence { type_name: String, actual: String },

    /// A non-nillable field is null after binding.
    #[error("required field {type_name}.{field} is null")]
    RequiredFieldNull { type_name: String, field: String },

    /// Service definition is structurally invalid.
    #[error("invalid service definition: {0}")]
    Definition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "definition-loaders")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[cfg(feature = "definition-loaders")]
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
}
