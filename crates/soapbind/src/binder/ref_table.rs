// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Identity table for one binding call.

use super::object::ObjectRef;
use std::collections::HashMap;

/// Object identity -> bound result.
///
/// Entries hold a strong handle, so no address recorded here can be
/// reused by another allocation while the table is alive.
#[derive(Debug, Default)]
pub struct MessageRefTable {
    entries: HashMap<usize, ObjectRef>,
}

impl MessageRefTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, instance: &ObjectRef) -> Option<&ObjectRef> {
        self.entries.get(&instance.identity())
    }

    /// Record `bound` for `instance`. Returns `false` if already present.
    pub fn insert(&mut self, instance: &ObjectRef, bound: ObjectRef) -> bool {
        match self.entries.entry(instance.identity()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(bound);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
