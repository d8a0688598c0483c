// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Response binding
//!
//! Walks a decoded response against the declared return type of a service
//! method, checking that every complex-type instance has the declared
//! runtime class and that non-nillable fields are set.
//!
//! # Features
//!
//! - **Value**: Dynamically-typed response tree
//! - **ObjectClass / ObjectRef**: Runtime classes and shared instances
//! - **AccessorPlan**: Per-class field access (public, accessor, forced)
//! - **ResponseBinder**: Identity-preserving recursive binder
//!
//! # Example
//!
//! ```rust
//! use soapbind::binder::{Object, ObjectClass, ResponseBinder, Value};
//! use soapbind::model::{ComplexTypeDefinition, ComplexTypeField, ComplexTypeRegistry};
//!
//! let mut registry = ComplexTypeRegistry::new();
//! registry.register(ComplexTypeDefinition::new("Item").field(ComplexTypeField::new("id", "int")));
//!
//! let item_class = ObjectClass::builder("Item").public_field("id").build();
//! let items = Value::from(vec![
//!     Object::new(&item_class).with("id", 1).into_ref(),
//!     Object::new(&item_class).with("id", 2).into_ref(),
//! ]);
//!
//! let binder = ResponseBinder::new();
//! let bound = binder.process_message("Item[]", items, &registry).unwrap();
//! let ids: Vec<_> = bound
//!     .as_sequence()
//!     .unwrap()
//!     .iter()
//!     .map(|v| v.as_object().unwrap().field("id"))
//!     .collect();
//! assert_eq!(ids, vec![Value::Int(1), Value::Int(2)]);
//! ```

mod accessor;
mod object;
mod ref_table;
mod response_binder;
mod value;

pub use accessor::{AccessorPlan, FieldAccessor, ReadAccess, WriteAccess};
pub use object::{
    Getter, Method, Object, ObjectClass, ObjectClassBuilder, ObjectRef, Setter, Visibility,
};
pub use ref_table::MessageRefTable;
pub use response_binder::ResponseBinder;
pub use value::Value;
