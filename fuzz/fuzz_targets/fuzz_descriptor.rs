// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for descriptor parsing and array type emission
//!
//! Arbitrary descriptor text must never panic. When emission succeeds the
//! returned name must be registered, and a failed emission must leave the
//! schema empty.

#![no_main]

use libfuzzer_sys::fuzz_target;
use soapbind::descriptor::parse_descriptor;
use soapbind::schema::{ArrayTypeEmitter, SchemaContext};

fuzz_target!(|data: &[u8]| {
    let Ok(descriptor) = std::str::from_utf8(data) else {
        return;
    };

    let parsed = parse_descriptor(descriptor);

    let schema = SchemaContext::default();
    let emitter = ArrayTypeEmitter::new(&schema);
    match emitter.resolve_array_complex_type(descriptor) {
        Ok(Some(name)) => {
            let depth = parsed.ok().flatten().map_or(0, |p| p.depth());
            assert!(depth > 0);
            assert!(schema.len() <= depth);
            let local = name.trim_start_matches("tns:");
            assert!(schema.contains_complex_type(local));

            // Idempotent on a second pass.
            let before = schema.len();
            let again = emitter.resolve_array_complex_type(descriptor);
            assert_eq!(again.ok().flatten().as_deref(), Some(name.as_str()));
            assert_eq!(schema.len(), before);
        }
        Ok(None) => assert!(schema.is_empty()),
        Err(_) => assert!(schema.is_empty()),
    }
});
