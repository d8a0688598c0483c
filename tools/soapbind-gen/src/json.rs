// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON form of response values.
//!
//! Objects carry their runtime class in `"$class"`. Keys starting with `_`
//! are private properties. An object may declare `"$id"` and be referenced
//! elsewhere with `{"$ref": "<id>"}`, which is how shared and cyclic graphs
//! are written. A `$ref` may come before or after the object it names.
//!
//! ```json
//! {"$class": "Order", "$id": "o1", "first": {"$class": "Item", "id": 1, "_label": "x"}}
//! ```

use anyhow::{anyhow, bail, Result};
use serde_json::{Map, Number, Value as Json};
use soapbind::binder::{Object, ObjectClass, ObjectRef, Value, Visibility};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

const CLASS_KEY: &str = "$class";
const ID_KEY: &str = "$id";
const REF_KEY: &str = "$ref";

type Layout = Vec<(String, Visibility)>;

/// JSON -> [`Value`].
#[derive(Default)]
pub struct JsonDecoder {
    classes: HashMap<(String, Layout), Arc<ObjectClass>>,
    ids: HashMap<String, ObjectRef>,
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one document.
    ///
    /// Every `$id` in the document is declared before any value is built,
    /// so a `$ref` may appear anywhere relative to its target.
    pub fn decode(&mut self, json: &Json) -> Result<Value> {
        self.ids.clear();
        self.declare_ids(json)?;
        self.decode_value(json)
    }

    fn declare_ids(&mut self, json: &Json) -> Result<()> {
        match json {
            Json::Array(items) => {
                for item in items {
                    self.declare_ids(item)?;
                }
            }
            Json::Object(map) if !map.contains_key(REF_KEY) => {
                if let Some(id) = map.get(ID_KEY) {
                    let id = id
                        .as_str()
                        .ok_or_else(|| anyhow!("\"{}\" must be a string", ID_KEY))?;
                    let (class_name, layout) = layout_of(map)?;
                    let instance = Object::new(&self.class_for(class_name, layout)).into_ref();
                    if self.ids.insert(id.to_string(), instance).is_some() {
                        bail!("duplicate \"{}\" '{}'", ID_KEY, id);
                    }
                }
                for (key, value) in map {
                    if !key.starts_with('$') {
                        self.declare_ids(value)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn decode_value(&mut self, json: &Json) -> Result<Value> {
        Ok(match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::Sequence(
                items
                    .iter()
                    .map(|item| self.decode_value(item))
                    .collect::<Result<_>>()?,
            ),
            Json::Object(map) => Value::Object(self.decode_object(map)?),
        })
    }

    fn decode_object(&mut self, map: &Map<String, Json>) -> Result<ObjectRef> {
        if let Some(reference) = map.get(REF_KEY) {
            let id = reference
                .as_str()
                .ok_or_else(|| anyhow!("\"{}\" must be a string", REF_KEY))?;
            return self
                .ids
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow!("\"{}\" to unknown id '{}'", REF_KEY, id));
        }

        let instance = match map.get(ID_KEY).and_then(Json::as_str) {
            Some(id) => self
                .ids
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow!("\"{}\" '{}' was not declared", ID_KEY, id))?,
            None => {
                let (class_name, layout) = layout_of(map)?;
                Object::new(&self.class_for(class_name, layout)).into_ref()
            }
        };

        for (key, json) in map.iter().filter(|(key, _)| !key.starts_with('$')) {
            let name = key.strip_prefix('_').unwrap_or(key.as_str());
            let value = self.decode_value(json)?;
            instance.write().set_slot(name, value);
        }
        Ok(instance)
    }

    fn class_for(&mut self, name: &str, layout: Layout) -> Arc<ObjectClass> {
        let key = (name.to_string(), layout);
        if let Some(class) = self.classes.get(&key) {
            return Arc::clone(class);
        }
        let class = key
            .1
            .iter()
            .fold(ObjectClass::builder(name), |builder, (property, visibility)| {
                match visibility {
                    Visibility::Public => builder.public_field(property.as_str()),
                    Visibility::Private => builder.private_field(property.as_str()),
                }
            })
            .build();
        self.classes.insert(key, Arc::clone(&class));
        class
    }
}

/// Runtime class name and property layout of an object literal.
fn layout_of(map: &Map<String, Json>) -> Result<(&str, Layout)> {
    let class_name = map
        .get(CLASS_KEY)
        .and_then(Json::as_str)
        .ok_or_else(|| anyhow!("object without a string \"{}\" key", CLASS_KEY))?;
    let layout = map
        .keys()
        .filter(|key| !key.starts_with('$'))
        .map(|key| match key.strip_prefix('_') {
            Some(private) => (private.to_string(), Visibility::Private),
            None => (key.clone(), Visibility::Public),
        })
        .collect();
    Ok((class_name, layout))
}

/// [`Value`] -> JSON. Objects reached more than once get an `$id`.
#[derive(Default)]
pub struct JsonEncoder {
    shared: HashSet<usize>,
    ids: HashMap<usize, String>,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(&mut self, value: &Value) -> Json {
        let mut seen = HashSet::new();
        self.shared.clear();
        self.ids.clear();
        collect_shared(value, &mut seen, &mut self.shared);
        self.encode_value(value)
    }

    fn encode_value(&mut self, value: &Value) -> Json {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s.clone()),
            Value::Sequence(items) => {
                Json::Array(items.iter().map(|item| self.encode_value(item)).collect())
            }
            Value::Object(instance) => self.encode_object(instance),
        }
    }

    fn encode_object(&mut self, instance: &ObjectRef) -> Json {
        let identity = instance.identity();
        let mut map = Map::new();
        if let Some(id) = self.ids.get(&identity) {
            map.insert(REF_KEY.to_string(), Json::String(id.clone()));
            return Json::Object(map);
        }

        // Copied out so no lock is held while children are encoded.
        let (class_name, properties) = {
            let object = instance.read();
            let properties: Vec<_> = object
                .class()
                .properties()
                .map(|(name, visibility)| {
                    let key = match visibility {
                        Visibility::Public => name.to_string(),
                        Visibility::Private => format!("_{}", name),
                    };
                    (key, object.slot(name).cloned().unwrap_or(Value::Null))
                })
                .collect();
            (object.class_name().to_string(), properties)
        };

        map.insert(CLASS_KEY.to_string(), Json::String(class_name));
        if self.shared.contains(&identity) {
            let id = format!("o{}", self.ids.len() + 1);
            map.insert(ID_KEY.to_string(), Json::String(id.clone()));
            self.ids.insert(identity, id);
        }
        for (key, value) in properties {
            let json = self.encode_value(&value);
            map.insert(key, json);
        }
        Json::Object(map)
    }
}

fn collect_shared(value: &Value, seen: &mut HashSet<usize>, shared: &mut HashSet<usize>) {
    match value {
        Value::Sequence(items) => {
            for item in items {
                collect_shared(item, seen, shared);
            }
        }
        Value::Object(instance) => {
            if !seen.insert(instance.identity()) {
                shared.insert(instance.identity());
                return;
            }
            let children: Vec<Value> = {
                let object = instance.read();
                object
                    .class()
                    .properties()
                    .filter_map(|(name, _)| object.slot(name).cloned())
                    .collect()
            };
            for child in &children {
                collect_shared(child, seen, shared);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_scalars_and_objects() {
        let json = json!({"$class": "Item", "id": 3, "_label": "x", "price": 1.5});
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let item = value.as_object().expect("object");

        assert_eq!(item.class_name(), "Item");
        assert_eq!(item.field("id"), Value::Int(3));
        assert_eq!(item.field("label"), Value::from("x"));
        assert_eq!(item.field("price"), Value::Float(1.5));
        assert_eq!(
            item.read().class().visibility("label"),
            Some(Visibility::Private)
        );
    }

    #[test]
    fn test_decode_refs_share_identity() {
        let json = json!([
            {"$class": "Item", "$id": "a", "id": 1},
            {"$ref": "a"}
        ]);
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let items = value.as_sequence().expect("sequence");
        assert_eq!(items[0], items[1]);
    }

    #[test]
    fn test_decode_ref_before_its_target() {
        // "a" sorts before "b", so the reference is reached first
        let json = json!({
            "$class": "Pair",
            "a": {"$ref": "x"},
            "b": {"$class": "Item", "$id": "x", "id": 1, "child": {"$ref": "x"}}
        });
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let pair = value.as_object().expect("object");
        let a = pair.field("a");
        let b = pair.field("b");
        assert_eq!(a, b);
        let item = b.as_object().expect("item");
        assert_eq!(item.field("id"), Value::Int(1));
        assert!(item.field("child").as_object().expect("child").ptr_eq(item));
    }

    #[test]
    fn test_decode_cycle() {
        let json = json!({"$class": "Node", "$id": "n", "next": {"$ref": "n"}});
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let node = value.as_object().expect("object");
        assert!(node.field("next").as_object().expect("next").ptr_eq(node));
    }

    #[test]
    fn test_decode_errors() {
        let mut decoder = JsonDecoder::new();
        assert!(decoder.decode(&json!({"id": 1})).is_err());
        assert!(decoder.decode(&json!({"$ref": "missing"})).is_err());
        assert!(decoder
            .decode(&json!([
                {"$class": "A", "$id": "x"},
                {"$class": "A", "$id": "x"}
            ]))
            .is_err());
    }

    #[test]
    fn test_same_layout_reuses_class() {
        let json = json!([{"$class": "Item", "id": 1}, {"$class": "Item", "id": 2}]);
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let items = value.as_sequence().expect("sequence");
        let first = items[0].as_object().expect("object").read().class().clone();
        let second = items[1].as_object().expect("object").read().class().clone();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_encode_marks_shared_objects() {
        let json = json!({
            "$class": "Order",
            "first": {"$class": "Item", "$id": "shared", "id": 1},
            "second": {"$ref": "shared"},
            "note": {"$class": "Item", "id": 2}
        });
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let encoded = JsonEncoder::new().encode(&value);

        assert_eq!(encoded["first"]["$id"], json!("o1"));
        assert_eq!(encoded["second"], json!({"$ref": "o1"}));
        assert!(encoded["note"].get("$id").is_none());
        assert!(encoded.get("$id").is_none());
    }

    #[test]
    fn test_encode_cycle_terminates() {
        let json = json!({"$class": "Node", "$id": "n", "_next": {"$ref": "n"}});
        let value = JsonDecoder::new().decode(&json).expect("decode");
        let encoded = JsonEncoder::new().encode(&value);
        assert_eq!(encoded["$id"], json!("o1"));
        assert_eq!(encoded["_next"], json!({"$ref": "o1"}));
    }
}
