// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Service-definition registry.
//!
//! Methods, parameters and complex types as supplied by the service
//! author. The schema driver and the response binder only read it.

mod definition;
pub mod loaders;

pub use definition::{
    ComplexTypeDefinition, ComplexTypeField, ComplexTypeIndex, ComplexTypeRegistry,
    MethodDefinition, ParameterDefinition, ServiceDefinition,
};
pub(crate) use definition::is_void;
