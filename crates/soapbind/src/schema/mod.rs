// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XSD schema generation.
//!
//! - [`SchemaContext`]: per-build registry of generated types and fragments
//! - [`ArrayTypeEmitter`]: `ArrayOf…` / `Array.N.Of…` types for array descriptors
//! - [`TypesSectionBuilder`]: runs the emitter over a whole service definition
//! - [`build_schema`]: one-shot schema for a service definition
//!
//! # Example
//!
//! ```rust
//! use soapbind::schema::{ArrayTypeEmitter, SchemaContext};
//!
//! let schema = SchemaContext::default();
//! let emitter = ArrayTypeEmitter::new(&schema);
//!
//! let name = emitter.resolve_array_complex_type("int[][2,5]").unwrap();
//! assert_eq!(name.as_deref(), Some("tns:ArrayOfArray.2.5.OfInt"));
//! assert_eq!(schema.len(), 2);
//!
//! // not an array
//! assert_eq!(emitter.resolve_array_complex_type("int").unwrap(), None);
//! ```

mod array;
mod context;
mod types_section;
mod xsd;

pub use array::{canonical_names, ArrayTypeEmitter};
pub use context::{SchemaBuilder, SchemaContext};
pub use types_section::{build_schema, TypesSectionBuilder};
pub use xsd::{XsdComplexType, XsdElement};
