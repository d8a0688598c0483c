// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Definition files on disk, in both formats.

use soapbind::model::loaders::{DefinitionFormat, DefinitionLoader};
use soapbind::schema::build_schema;
use soapbind::{Error, SchemaConfig};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const YAML: &str = r#"
name: Catalog
namespace: "urn:catalog"
complex_types:
  - name: Item
    fields:
      - { name: id, type: int }
      - { name: tags, type: "string[]", nillable: true }
methods:
  - name: listItems
    parameters:
      - { name: page, type: int }
    returns: "Item[]"
  - name: ping
"#;

const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<service name="Catalog" namespace="urn:catalog">
  <complexType name="Item">
    <field name="id" type="int"/>
    <field name="tags" type="string[]" nillable="true"/>
  </complexType>
  <method name="listItems" returns="Item[]">
    <param name="page" type="int"/>
  </method>
  <method name="ping"/>
</service>"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create");
    file.write_all(content.as_bytes()).expect("write");
    path
}

#[test]
fn test_both_formats_load_the_same_definition() {
    let dir = TempDir::new().expect("tempdir");
    let yaml = DefinitionLoader::load(write(&dir, "catalog.yaml", YAML)).expect("yaml");
    let xml = DefinitionLoader::load(write(&dir, "catalog.xml", XML)).expect("xml");
    assert_eq!(yaml, xml);
    assert!(yaml.find_method("ping").expect("ping").returns_void());
}

#[test]
fn test_loaded_definition_builds_schema() {
    let dir = TempDir::new().expect("tempdir");
    let service = DefinitionLoader::load(write(&dir, "catalog.yml", YAML)).expect("load");
    let schema = build_schema(&service, SchemaConfig::default()).expect("build");

    assert_eq!(schema.len(), 3);
    assert!(schema.contains_complex_type("ArrayOfString"));
    assert!(schema.contains_complex_type("Item"));
    assert!(schema.contains_complex_type("ArrayOfItem"));
    assert!(schema.to_schema_xml().contains("targetNamespace=\"urn:catalog\""));
}

#[test]
fn test_content_sniffing_without_extension() {
    let dir = TempDir::new().expect("tempdir");
    let xml = DefinitionLoader::load(write(&dir, "catalog.def", XML)).expect("xml");
    let yaml = DefinitionLoader::load(write(&dir, "other.def", YAML)).expect("yaml");
    assert_eq!(xml.name, "Catalog");
    assert_eq!(yaml.name, "Catalog");

    assert_eq!(DefinitionFormat::from_extension(Path::new("x.def")), None);
}

#[test]
fn test_invalid_bounds_rejected_at_load() {
    let dir = TempDir::new().expect("tempdir");
    let broken = XML.replace("string[]", "string[4,2]");
    let err = DefinitionLoader::load(write(&dir, "broken.xml", &broken)).unwrap_err();
    assert!(matches!(err, Error::InvalidDescriptor { .. }));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    let err = DefinitionLoader::load(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_unknown_format() {
    let dir = TempDir::new().expect("tempdir");
    let err = DefinitionLoader::load(write(&dir, "notes.txt", "just text")).unwrap_err();
    assert!(matches!(err, Error::Definition(_)));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "schema.yaml", "tns_prefix: svc\nitem_element: row\n");
    let config = SchemaConfig::load(path).expect("config");
    assert_eq!(config.tns_prefix, "svc");
    assert_eq!(config.item_element, "row");
    assert_eq!(config.xsd_prefix, "xsd");
}
