// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime objects: class layouts, instances and shared handles.
//!
//! An [`ObjectClass`] is the runtime representation of a complex type. It
//! declares which properties are publicly accessible, which are private,
//! and which accessor methods exist. Instances live behind an
//! [`ObjectRef`], a shared handle whose address is the object identity.

use super::value::Value;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Accessor method reading a property.
pub type Getter = Arc<dyn Fn(&Object) -> Value + Send + Sync>;
/// Accessor method writing a property.
pub type Setter = Arc<dyn Fn(&mut Object, Value) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

/// A named accessor method.
#[derive(Clone)]
pub enum Method {
    Getter(Getter),
    Setter(Setter),
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Getter(_) => f.write_str("Getter"),
            Self::Setter(_) => f.write_str("Setter"),
        }
    }
}

/// Layout shared by every instance of a runtime class.
#[derive(Debug)]
pub struct ObjectClass {
    name: String,
    properties: Vec<(String, Visibility)>,
    methods: Vec<(String, Method)>,
}

impl ObjectClass {
    pub fn builder(name: impl Into<String>) -> ObjectClassBuilder {
        ObjectClassBuilder {
            class: ObjectClass {
                name: name.into(),
                properties: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, Visibility)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Visibility of a property, `None` when undeclared.
    pub fn visibility(&self, property: &str) -> Option<Visibility> {
        self.properties
            .iter()
            .find(|(n, _)| n == property)
            .map(|(_, v)| *v)
    }

    /// Method lookup ignoring ASCII case (`getid` finds `getId`).
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, m)| m)
    }
}

/// Fluent builder for [`ObjectClass`].
pub struct ObjectClassBuilder {
    class: ObjectClass,
}

impl ObjectClassBuilder {
    /// Property readable and writable directly.
    pub fn public_field(mut self, name: impl Into<String>) -> Self {
        self.class.properties.push((name.into(), Visibility::Public));
        self
    }

    /// Property only reachable through accessors or forced access.
    pub fn private_field(mut self, name: impl Into<String>) -> Self {
        self.class.properties.push((name.into(), Visibility::Private));
        self
    }

    pub fn getter<F>(mut self, name: impl Into<String>, getter: F) -> Self
    where
        F: Fn(&Object) -> Value + Send + Sync + 'static,
    {
        self.class
            .methods
            .push((name.into(), Method::Getter(Arc::new(getter))));
        self
    }

    pub fn setter<F>(mut self, name: impl Into<String>, setter: F) -> Self
    where
        F: Fn(&mut Object, Value) + Send + Sync + 'static,
    {
        self.class
            .methods
            .push((name.into(), Method::Setter(Arc::new(setter))));
        self
    }

    /// Conventional `get<Name>` / `set<Name>` pair over a private property.
    pub fn private_property(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let suffix = super::accessor::accessor_suffix(&name);
        let read_key = name.clone();
        let write_key = name.clone();
        self.private_field(name)
            .getter(format!("get{}", suffix), move |obj| {
                obj.slot(&read_key).cloned().unwrap_or(Value::Null)
            })
            .setter(format!("set{}", suffix), move |obj, value| {
                obj.set_slot(write_key.clone(), value)
            })
    }

    pub fn build(self) -> Arc<ObjectClass> {
        Arc::new(self.class)
    }
}

/// One object instance: its class plus the current property values.
#[derive(Debug)]
pub struct Object {
    class: Arc<ObjectClass>,
    slots: HashMap<String, Value>,
}

impl Object {
    /// New instance with every declared property set to [`Value::Null`].
    pub fn new(class: &Arc<ObjectClass>) -> Self {
        let slots = class
            .properties()
            .map(|(name, _)| (name.to_string(), Value::Null))
            .collect();
        Self {
            class: Arc::clone(class),
            slots,
        }
    }

    pub fn class(&self) -> &Arc<ObjectClass> {
        &self.class
    }

    pub fn class_name(&self) -> &str {
        self.class.name()
    }

    /// Raw property storage, ignoring visibility.
    pub fn slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// Raw property write, ignoring visibility.
    pub fn set_slot(&mut self, name: impl Into<String>, value: Value) {
        self.slots.insert(name.into(), value);
    }

    /// Builder-style [`Object::set_slot`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_slot(name, value.into());
        self
    }

    /// Wrap into a shared handle.
    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }
}

/// Shared handle to an [`Object`]; clones alias the same instance.
#[derive(Clone)]
pub struct ObjectRef(Arc<RwLock<Object>>);

impl ObjectRef {
    pub fn new(object: Object) -> Self {
        Self(Arc::new(RwLock::new(object)))
    }

    /// Address-based identity, stable while any clone is alive.
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Object> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Object> {
        self.0.write()
    }

    pub fn class_name(&self) -> String {
        self.read().class_name().to_string()
    }

    /// Raw property read, cloned out of the lock.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.read().slot(name).cloned()
    }

    /// Like [`ObjectRef::get`], with absent properties read as null.
    pub fn field(&self, name: &str) -> Value {
        self.get(name).unwrap_or(Value::Null)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    // Only the class and address: printing slots would recurse on cycles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({}@{:#x})", self.class_name(), self.identity())
    }
}
