// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Response binding against loaded service definitions.

use soapbind::binder::{Object, ObjectClass, ObjectRef, ResponseBinder, Value};
use soapbind::model::loaders::YamlLoader;
use soapbind::{Error, ServiceDefinition};
use std::sync::Arc;

const CATALOG: &str = r#"
name: Catalog
complex_types:
  - name: Item
    fields:
      - { name: id, type: int }
      - { name: label, type: string, nillable: true }
  - name: Category
    fields:
      - { name: name, type: string }
      - { name: parent, type: Category, nillable: true }
      - { name: items, type: "Item[]" }
      - { name: featured, type: Item, nillable: true }
methods:
  - name: getItem
    returns: Item
  - name: listItems
    returns: "Item[]"
  - name: getCategory
    returns: Category
  - name: countItems
    returns: int
  - name: topItems
    returns: "Item[3]"
"#;

struct Classes {
    item: Arc<ObjectClass>,
    category: Arc<ObjectClass>,
}

fn setup() -> (ServiceDefinition, Classes) {
    let service = YamlLoader::parse_yaml(CATALOG).expect("catalog");
    let classes = Classes {
        item: ObjectClass::builder("Item")
            .public_field("id")
            .private_property("label")
            .build(),
        category: ObjectClass::builder("Category")
            .public_field("name")
            .private_property("parent")
            .public_field("items")
            .private_field("featured")
            .build(),
    };
    (service, classes)
}

fn item(classes: &Classes, id: i64) -> ObjectRef {
    Object::new(&classes.item).with("id", id).into_ref()
}

#[test]
fn test_list_items_keeps_ids() {
    let (service, classes) = setup();
    let binder = ResponseBinder::new();

    let response = Value::from(vec![item(&classes, 1), item(&classes, 2)]);
    let bound = binder
        .process_method(&service, "listItems", response)
        .expect("bind");

    let ids: Vec<_> = bound
        .as_sequence()
        .expect("sequence")
        .iter()
        .map(|v| v.as_object().expect("object").field("id"))
        .collect();
    assert_eq!(ids, vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_scalar_method_untouched() {
    let (service, _) = setup();
    let bound = ResponseBinder::new()
        .process_method(&service, "countItems", Value::Int(12))
        .expect("bind");
    assert_eq!(bound, Value::Int(12));
}

#[test]
fn test_category_tree_with_back_references() {
    let (service, classes) = setup();

    let shared = item(&classes, 7);
    let root = Object::new(&classes.category)
        .with("name", "root")
        .with("items", vec![shared.clone()])
        .into_ref();
    let child = Object::new(&classes.category)
        .with("name", "child")
        .with("parent", root.clone())
        .with("items", vec![shared.clone(), item(&classes, 8)])
        .with("featured", shared.clone())
        .into_ref();

    let bound = ResponseBinder::new()
        .process_method(&service, "getCategory", Value::Object(child.clone()))
        .expect("bind");
    let bound = bound.as_object().expect("object");

    assert!(bound.ptr_eq(&child));
    assert!(bound.field("parent").as_object().expect("parent").ptr_eq(&root));
    let featured = bound.field("featured");
    let items = bound.field("items");
    let items = items.as_sequence().expect("items");
    assert_eq!(items[0], featured);
    assert!(featured.as_object().expect("featured").ptr_eq(&shared));
}

#[test]
fn test_missing_required_field_in_deep_item() {
    let (service, classes) = setup();

    let broken = Object::new(&classes.item).with("label", "no id").into_ref();
    let category = Object::new(&classes.category)
        .with("name", "c")
        .with("items", vec![item(&classes, 1), broken])
        .into_ref();

    let err = ResponseBinder::new()
        .process_method(&service, "getCategory", Value::Object(category))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::RequiredFieldNull { ref type_name, ref field } if type_name == "Item" && field == "id"
    ));
}

#[test]
fn test_required_array_field_null() {
    let (service, classes) = setup();
    let category = Object::new(&classes.category).with("name", "c").into_ref();

    let err = ResponseBinder::new()
        .process_method(&service, "getCategory", Value::Object(category))
        .unwrap_err();
    assert_eq!(err.to_string(), "required field Category.items is null");
}

#[test]
fn test_wrong_class_in_list() {
    let (service, classes) = setup();
    let response = Value::from(vec![
        Value::Object(item(&classes, 1)),
        Value::Object(Object::new(&classes.category).with("name", "x").into_ref()),
    ]);

    let err = ResponseBinder::new()
        .process_method(&service, "listItems", response)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: expected Item, got Category"
    );
}

#[test]
fn test_bounded_return_is_not_inspected() {
    let (service, classes) = setup();
    let response = Value::from(vec![Object::new(&classes.item).into_ref()]);
    let bound = ResponseBinder::new()
        .process_method(&service, "topItems", response.clone())
        .expect("bind");
    assert_eq!(bound, response);
}

#[test]
fn test_one_binder_many_messages() {
    let (service, classes) = setup();
    let binder = ResponseBinder::new();

    // The identity table is per call: a second message reuses objects freely.
    let shared = item(&classes, 3);
    for _ in 0..3 {
        binder
            .process_method(&service, "getItem", Value::Object(shared.clone()))
            .expect("bind");
    }
    let category = Object::new(&classes.category)
        .with("name", "c")
        .with("items", vec![shared.clone()])
        .into_ref();
    binder
        .process_method(&service, "getCategory", Value::Object(category))
        .expect("bind");

    assert_eq!(binder.cached_plans(), 2);
}
