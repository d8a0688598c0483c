// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-class property access plans.
//!
//! Reading a declared field tries, in order: a public property, a getter
//! (`get<Name>` or `is<Name>`, case-insensitive), then a forced read of a
//! private property. Writing tries a public property, a setter
//! (`set<Name>`), then a forced write. The choice depends only on the
//! class layout, so it is resolved once per class and reused.

use super::object::{Getter, Method, Object, ObjectClass, Setter, Visibility};
use super::value::Value;
use crate::descriptor::capitalize;
use crate::model::ComplexTypeField;
use std::sync::Arc;

/// Suffix used to build conventional accessor names (`id` -> `Id`).
pub(crate) fn accessor_suffix(property: &str) -> String {
    capitalize(property)
}

/// How a field is read.
#[derive(Clone)]
pub enum ReadAccess {
    Direct,
    Getter(Getter),
    /// Private property read bypassing visibility.
    Forced,
    /// Neither property nor getter exists; reads as null.
    Missing,
}

/// How a field is written back.
#[derive(Clone)]
pub enum WriteAccess {
    Direct,
    Setter(Setter),
    Forced,
    Missing,
}

impl ReadAccess {
    fn label(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Getter(_) => "getter",
            Self::Forced => "forced",
            Self::Missing => "missing",
        }
    }
}

impl WriteAccess {
    fn label(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Setter(_) => "setter",
            Self::Forced => "forced",
            Self::Missing => "missing",
        }
    }
}

impl std::fmt::Debug for ReadAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Debug for WriteAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved read/write strategy for one declared field.
#[derive(Debug, Clone)]
pub struct FieldAccessor {
    field: ComplexTypeField,
    read: ReadAccess,
    write: WriteAccess,
}

impl FieldAccessor {
    fn resolve(class: &ObjectClass, field: &ComplexTypeField) -> Self {
        let suffix = accessor_suffix(&field.name);
        let visibility = class.visibility(&field.name);

        let getter = [format!("get{}", suffix), format!("is{}", suffix)]
            .iter()
            .find_map(|name| match class.find_method(name) {
                Some(Method::Getter(g)) => Some(Arc::clone(g)),
                _ => None,
            });
        let read = match (visibility, getter) {
            (Some(Visibility::Public), _) => ReadAccess::Direct,
            (_, Some(g)) => ReadAccess::Getter(g),
            (Some(Visibility::Private), None) => ReadAccess::Forced,
            (None, None) => ReadAccess::Missing,
        };

        let setter = match class.find_method(&format!("set{}", suffix)) {
            Some(Method::Setter(s)) => Some(Arc::clone(s)),
            _ => None,
        };
        let write = match (visibility, setter) {
            (Some(Visibility::Public), _) => WriteAccess::Direct,
            (_, Some(s)) => WriteAccess::Setter(s),
            (Some(Visibility::Private), None) => WriteAccess::Forced,
            (None, None) => WriteAccess::Missing,
        };

        Self {
            field: field.clone(),
            read,
            write,
        }
    }

    pub fn field(&self) -> &ComplexTypeField {
        &self.field
    }

    pub fn read_access(&self) -> &ReadAccess {
        &self.read
    }

    pub fn write_access(&self) -> &WriteAccess {
        &self.write
    }

    pub fn read(&self, object: &Object) -> Value {
        match &self.read {
            ReadAccess::Direct | ReadAccess::Forced => object
                .slot(&self.field.name)
                .cloned()
                .unwrap_or(Value::Null),
            ReadAccess::Getter(getter) => getter(object),
            ReadAccess::Missing => Value::Null,
        }
    }

    pub fn write(&self, object: &mut Object, value: Value) {
        match &self.write {
            WriteAccess::Direct | WriteAccess::Forced => {
                object.set_slot(self.field.name.clone(), value)
            }
            WriteAccess::Setter(setter) => setter(object, value),
            WriteAccess::Missing => log::trace!(
                "[AccessorPlan] {}.{} has no writable property, bound value dropped",
                object.class_name(),
                self.field.name
            ),
        }
    }
}

/// Field accessors of one runtime class, in declared field order.
#[derive(Debug)]
pub struct AccessorPlan {
    class: Arc<ObjectClass>,
    accessors: Vec<FieldAccessor>,
}

impl AccessorPlan {
    pub fn build(class: &Arc<ObjectClass>, fields: &[ComplexTypeField]) -> Self {
        let accessors: Vec<_> = fields
            .iter()
            .map(|field| FieldAccessor::resolve(class, field))
            .collect();
        log::debug!(
            "[AccessorPlan] built plan for {}: {}",
            class.name(),
            accessors
                .iter()
                .map(|a| format!("{}={:?}/{:?}", a.field.name, a.read, a.write))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self {
            class: Arc::clone(class),
            accessors,
        }
    }

    /// True when the plan was built for this exact class and field list.
    pub fn matches(&self, class: &Arc<ObjectClass>, fields: &[ComplexTypeField]) -> bool {
        Arc::ptr_eq(&self.class, class)
            && self.accessors.len() == fields.len()
            && self.accessors.iter().zip(fields).all(|(a, f)| &a.field == f)
    }

    pub fn accessors(&self) -> &[FieldAccessor] {
        &self.accessors
    }
}
