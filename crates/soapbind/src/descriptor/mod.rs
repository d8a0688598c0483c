// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptor strings.
//!
//! A descriptor is a singular type name followed by zero or more bracketed
//! occurrence suffixes:
//!
//! | Suffix  | minOccurs | maxOccurs   |
//! |---------|-----------|-------------|
//! | `[]`    | 0         | `unbounded` |
//! | `[N]`   | N         | N           |
//! | `[N,]`  | N         | `unbounded` |
//! | `[N,M]` | N         | M           |
//!
//! The first bracket is the outermost array, the last bracket wraps the
//! singular type directly. Both the schema emitter and the response binder
//! read descriptors through this module.

mod occurs;
mod parser;

pub use occurs::{MaxOccurs, Occurs};
pub use parser::{
    capitalize, parse_descriptor, strip_unbounded_suffix, translate_type, NestingLevel,
    ParsedDescriptor,
};
