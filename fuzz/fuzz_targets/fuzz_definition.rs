// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use soapbind::model::loaders::DefinitionLoader;
use soapbind::schema::build_schema;
use soapbind::SchemaConfig;

fuzz_target!(|data: &[u8]| {
    // Definitions are text-based (XML or YAML)
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(service) = DefinitionLoader::load_from_str_auto(text) {
            // A validated definition must always render
            if let Ok(schema) = build_schema(&service, SchemaConfig::default()) {
                let _ = schema.to_schema_xml();
            }
        }
    }
});
