// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XSD `complexType` fragments and their XML rendering.

use crate::descriptor::Occurs;
use std::borrow::Cow;
use std::fmt::Write;

/// One `xsd:element` inside a `xsd:sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsdElement {
    pub name: String,
    /// Qualified type reference (`xsd:int`, `tns:Item`).
    pub type_ref: String,
    pub occurs: Option<Occurs>,
    pub nillable: bool,
}

impl XsdElement {
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            occurs: None,
            nillable: false,
        }
    }

    pub fn with_occurs(mut self, occurs: Occurs) -> Self {
        self.occurs = Some(occurs);
        self
    }

    pub fn nillable(mut self, nillable: bool) -> Self {
        self.nillable = nillable;
        self
    }
}

/// A named `xsd:complexType` holding one `xsd:sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsdComplexType {
    /// Unqualified type name (the `name=` attribute).
    pub name: String,
    pub sequence: Vec<XsdElement>,
}

impl XsdComplexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: Vec::new(),
        }
    }

    /// Array wrapper: a single `item` element repeated per `occurs`.
    pub fn array(
        name: impl Into<String>,
        item_element: &str,
        child_type: impl Into<String>,
        occurs: Occurs,
    ) -> Self {
        Self {
            name: name.into(),
            sequence: vec![XsdElement::new(item_element, child_type).with_occurs(occurs)],
        }
    }

    pub fn element(mut self, element: XsdElement) -> Self {
        self.sequence.push(element);
        self
    }

    /// Item element of an array wrapper, if this is one.
    pub fn array_item(&self) -> Option<&XsdElement> {
        match self.sequence.as_slice() {
            [item] if item.occurs.is_some() => Some(item),
            _ => None,
        }
    }

    /// Append the XML for this type, indented by `indent` spaces.
    pub fn write_xml(&self, out: &mut String, xsd_prefix: &str, indent: usize) {
        let pad = " ".repeat(indent);
        let _ = writeln!(
            out,
            "{pad}<{p}:complexType name=\"{}\">",
            escape_attr(&self.name),
            p = xsd_prefix
        );
        let _ = writeln!(out, "{pad}  <{p}:sequence>", p = xsd_prefix);
        for element in &self.sequence {
            let _ = write!(
                out,
                "{pad}    <{p}:element name=\"{}\" type=\"{}\"",
                escape_attr(&element.name),
                escape_attr(&element.type_ref),
                p = xsd_prefix
            );
            if let Some(occurs) = element.occurs {
                let _ = write!(
                    out,
                    " minOccurs=\"{}\" maxOccurs=\"{}\"",
                    occurs.min(),
                    occurs.max()
                );
            }
            if element.nillable {
                out.push_str(" nillable=\"true\"");
            }
            out.push_str("/>\n");
        }
        let _ = writeln!(out, "{pad}  </{p}:sequence>", p = xsd_prefix);
        let _ = writeln!(out, "{pad}</{p}:complexType>", p = xsd_prefix);
    }

    /// Standalone XML for this type.
    pub fn to_xml(&self, xsd_prefix: &str) -> String {
        let mut out = String::new();
        self.write_xml(&mut out, xsd_prefix, 0);
        out
    }
}

/// Escape the five XML special characters for attribute values.
pub(crate) fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
