// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # soapbind - SOAP/WSDL type plumbing
//!
//! Two halves of a SOAP service's type handling:
//!
//! - **Schema side**: turns array type descriptors such as `Item[]`,
//!   `int[3]` or `string[][2,5]` into named XSD complex types
//!   (`ArrayOfItem`, `Array.3.OfInt`, `ArrayOfArray.2.5.OfString`) for the
//!   WSDL `types` section.
//! - **Response side**: walks a decoded response against the method's
//!   declared return type, checking runtime classes and required fields
//!   while keeping shared and cyclic object graphs intact.
//!
//! ## Quick Start
//!
//! ```rust
//! use soapbind::model::{ComplexTypeDefinition, ComplexTypeField, MethodDefinition, ServiceDefinition};
//! use soapbind::schema::build_schema;
//! use soapbind::SchemaConfig;
//!
//! let service = ServiceDefinition::new("Catalog")
//!     .complex_type(ComplexTypeDefinition::new("Item").field(ComplexTypeField::new("id", "int")))
//!     .method(MethodDefinition::new("listItems", "Item[]"));
//!
//! let schema = build_schema(&service, SchemaConfig::default()).unwrap();
//! assert!(schema.contains_complex_type("ArrayOfItem"));
//! println!("{}", schema.to_schema_xml());
//! ```
//!
//! ## Descriptor Suffixes
//!
//! | Descriptor   | Generated type           | minOccurs | maxOccurs   |
//! |--------------|--------------------------|-----------|-------------|
//! | `T[]`        | `ArrayOfT`               | 0         | `unbounded` |
//! | `T[3]`       | `Array.3.OfT`            | 3         | 3           |
//! | `T[2,5]`     | `Array.2.5.OfT`          | 2         | 5           |
//! | `T[2,]`      | `Array.2.unbounded.OfT`  | 2         | `unbounded` |
//!
//! ## Modules Overview
//!
//! - [`descriptor`] - Type descriptor parsing
//! - [`schema`] - XSD complex type generation
//! - [`binder`] - Response binding
//! - [`model`] - Service definitions and their loaders
//! - [`config`] - Schema generation settings

pub mod binder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod schema;

pub use binder::{Object, ObjectClass, ObjectRef, ResponseBinder, Value};
pub use config::SchemaConfig;
pub use error::{Error, Result};
pub use model::{ComplexTypeIndex, ServiceDefinition};
pub use schema::{ArrayTypeEmitter, SchemaContext};
