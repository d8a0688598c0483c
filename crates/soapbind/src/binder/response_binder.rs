// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive response binding.

use super::accessor::AccessorPlan;
use super::object::ObjectClass;
use super::ref_table::MessageRefTable;
use super::value::Value;
use crate::descriptor::strip_unbounded_suffix;
use crate::error::{Error, Result};
use crate::model::{ComplexTypeField, ComplexTypeIndex, ServiceDefinition};
use dashmap::DashMap;
use std::sync::Arc;

/// Binds raw response values against declared complex types.
///
/// The binder itself only caches accessor plans and can be shared across
/// threads. Every [`ResponseBinder::process_message`] call gets a fresh
/// identity table, so shared and cyclic object graphs are bound once per
/// call and keep their aliasing.
#[derive(Debug, Default)]
pub struct ResponseBinder {
    plans: DashMap<String, Arc<AccessorPlan>>,
}

impl ResponseBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` against `declared_return_type`.
    ///
    /// Scalars and types unknown to `index` come back unchanged. Complex
    /// types are checked field by field and mutated in place.
    pub fn process_message<I>(
        &self,
        declared_return_type: &str,
        value: Value,
        index: &I,
    ) -> Result<Value>
    where
        I: ComplexTypeIndex + ?Sized,
    {
        let mut session = BindSession {
            binder: self,
            index,
            refs: MessageRefTable::new(),
        };
        let bound = session.bind_typed(declared_return_type, value)?;
        log::debug!(
            "[ResponseBinder] bound '{}' ({} distinct objects)",
            declared_return_type,
            session.refs.len()
        );
        Ok(bound)
    }

    /// Bind the response of `method` declared in `definition`.
    pub fn process_method(
        &self,
        definition: &ServiceDefinition,
        method: &str,
        value: Value,
    ) -> Result<Value> {
        let method = definition.find_method(method).ok_or_else(|| {
            Error::Definition(format!(
                "service '{}' has no method '{}'",
                definition.name, method
            ))
        })?;
        self.process_message(&method.return_type, value, definition)
    }

    /// Number of cached accessor plans.
    pub fn cached_plans(&self) -> usize {
        self.plans.len()
    }

    fn plan_for(&self, class: &Arc<ObjectClass>, fields: &[ComplexTypeField]) -> Arc<AccessorPlan> {
        if let Some(plan) = self.plans.get(class.name()) {
            if plan.matches(class, fields) {
                return Arc::clone(plan.value());
            }
        }
        let plan = Arc::new(AccessorPlan::build(class, fields));
        self.plans.insert(class.name().to_string(), Arc::clone(&plan));
        plan
    }
}

/// State of one `process_message` call.
struct BindSession<'a, I: ?Sized> {
    binder: &'a ResponseBinder,
    index: &'a I,
    refs: MessageRefTable,
}

impl<I: ComplexTypeIndex + ?Sized> BindSession<'_, I> {
    fn bind_typed(&mut self, descriptor: &str, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        let (element, is_array) = strip_unbounded_suffix(descriptor);
        let element = element.trim();
        if !self.index.is_complex_type(element) {
            return Ok(value);
        }

        if !is_array {
            return self.bind_complex_type(element, value);
        }
        match value {
            Value::Sequence(items) => items
                .into_iter()
                .map(|item| self.bind_complex_type(element, item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence),
            other => Err(Error::NotASequence {
                type_name: element.to_string(),
                actual: other.type_label(),
            }),
        }
    }

    fn bind_complex_type(&mut self, type_name: &str, value: Value) -> Result<Value> {
        let instance = match value {
            Value::Object(instance) => instance,
            other => {
                return Err(Error::TypeMismatch {
                    expected: type_name.to_string(),
                    actual: other.type_label(),
                })
            }
        };

        if let Some(bound) = self.refs.get(&instance) {
            log::trace!("[ResponseBinder] {:?} already bound, reusing", instance);
            return Ok(Value::Object(bound.clone()));
        }
        self.refs.insert(&instance, instance.clone());

        let class = Arc::clone(instance.read().class());
        if class.name() != type_name {
            return Err(Error::TypeMismatch {
                expected: type_name.to_string(),
                actual: class.name().to_string(),
            });
        }

        let index = self.index;
        let Some(fields) = index.fields(type_name) else {
            return Ok(Value::Object(instance));
        };
        let plan = self.binder.plan_for(&class, fields);

        // No guard is held across recursion: cycles re-enter this instance.
        for accessor in plan.accessors() {
            let field = accessor.field();
            let current = accessor.read(&instance.read());
            if current.is_null() {
                if !field.nillable {
                    return Err(Error::RequiredFieldNull {
                        type_name: type_name.to_string(),
                        field: field.name.clone(),
                    });
                }
                continue;
            }
            let bound = self.bind_typed(&field.type_descriptor, current)?;
            accessor.write(&mut instance.write(), bound);
        }

        Ok(Value::Object(instance))
    }
}

