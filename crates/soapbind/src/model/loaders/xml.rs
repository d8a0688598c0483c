// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XML service-definition loader.
//!
//! ```xml
//! <service name="Catalog" namespace="urn:catalog">
//!   <complexType name="Item">
//!     <field name="id" type="int"/>
//!     <field name="label" type="string" nillable="true"/>
//!   </complexType>
//!   <method name="listItems" returns="Item[]">
//!     <param name="filter" type="string"/>
//!   </method>
//! </service>
//! ```

use crate::error::{Error, Result};
use crate::model::{
    ComplexTypeDefinition, ComplexTypeField, MethodDefinition, ParameterDefinition,
    ServiceDefinition,
};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

pub struct XmlLoader;

impl XmlLoader {
    /// Load and validate a definition file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ServiceDefinition> {
        let content = fs::read_to_string(path)?;
        Self::parse_xml(&content)
    }

    /// Parse and validate XML content.
    ///
    /// The `<service>` element may be the root or nested anywhere below it.
    pub fn parse_xml(content: &str) -> Result<ServiceDefinition> {
        let doc = Document::parse(content)?;

        let service = doc
            .root_element()
            .descendants()
            .find(|n| n.has_tag_name("service"))
            .ok_or_else(|| Error::Definition("no <service> element found".into()))?;

        let mut definition = ServiceDefinition::new(required_attr(&service, "name")?);
        definition.namespace = service.attribute("namespace").map(str::to_string);

        for node in service.children().filter(Node::is_element) {
            match node.tag_name().name() {
                "complexType" => definition.complex_types.push(Self::complex_type(&node)?),
                "method" => definition.methods.push(Self::method(&node)?),
                other => log::debug!("[XmlLoader] ignoring <{}> in <service>", other),
            }
        }

        definition.validate()?;
        log::debug!(
            "[XmlLoader] loaded service '{}' ({} methods, {} complex types)",
            definition.name,
            definition.methods.len(),
            definition.complex_types.len()
        );
        Ok(definition)
    }

    fn complex_type(node: &Node) -> Result<ComplexTypeDefinition> {
        let mut complex_type = ComplexTypeDefinition::new(required_attr(node, "name")?);
        for field in node.children().filter(|n| n.has_tag_name("field")) {
            complex_type.fields.push(ComplexTypeField {
                name: required_attr(&field, "name")?,
                type_descriptor: required_attr(&field, "type")?,
                nillable: parse_bool(field.attribute("nillable")),
            });
        }
        Ok(complex_type)
    }

    fn method(node: &Node) -> Result<MethodDefinition> {
        let returns = node.attribute("returns").unwrap_or("void");
        let mut method = MethodDefinition::new(required_attr(node, "name")?, returns);
        for param in node.children().filter(|n| n.has_tag_name("param")) {
            method.parameters.push(ParameterDefinition {
                name: required_attr(&param, "name")?,
                type_descriptor: required_attr(&param, "type")?,
            });
        }
        Ok(method)
    }
}

fn required_attr(node: &Node, name: &str) -> Result<String> {
    node.attribute(name).map(str::to_string).ok_or_else(|| {
        Error::Definition(format!(
            "<{}> is missing the '{}' attribute",
            node.tag_name().name(),
            name
        ))
    })
}

fn parse_bool(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("true") | Some("1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComplexTypeIndex;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<service name="Catalog" namespace="urn:catalog">
  <complexType name="Item">
    <field name="id" type="int"/>
    <field name="label" type="string" nillable="true"/>
  </complexType>
  <method name="listItems" returns="Item[]">
    <param name="filter" type="string"/>
  </method>
  <method name="ping"/>
</service>"#;

    #[test]
    fn test_parse_catalog() {
        let def = XmlLoader::parse_xml(CATALOG).expect("parse");
        assert_eq!(def.name, "Catalog");
        assert_eq!(def.namespace.as_deref(), Some("urn:catalog"));
        let fields = def.fields("Item").expect("fields");
        assert_eq!(fields.len(), 2);
        assert!(fields[1].nillable);

        let list = def.find_method("listItems").expect("method");
        assert_eq!(list.return_type, "Item[]");
        assert_eq!(list.parameters.len(), 1);
        assert!(def.find_method("ping").expect("ping").returns_void());
    }

    #[test]
    fn test_nested_service_element() {
        let xml = r#"<definitions><service name="S"><method name="m" returns="int"/></service></definitions>"#;
        let def = XmlLoader::parse_xml(xml).expect("parse");
        assert_eq!(def.methods.len(), 1);
    }

    #[test]
    fn test_missing_attribute() {
        let xml = r#"<service name="S"><complexType name="A"><field name="x"/></complexType></service>"#;
        let err = XmlLoader::parse_xml(xml).unwrap_err();
        assert!(matches!(err, Error::Definition(msg) if msg.contains("'type'")));
    }

    #[test]
    fn test_no_service_element() {
        assert!(matches!(
            XmlLoader::parse_xml("<root/>"),
            Err(Error::Definition(_))
        ));
        assert!(matches!(XmlLoader::parse_xml("<unclosed"), Err(Error::Xml(_))));
    }
}
