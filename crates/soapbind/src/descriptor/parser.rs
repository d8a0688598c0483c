// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Regex-based parser for bracketed array descriptors.
//!
//! Grammar (one trailing run of suffixes, first bracket = outermost level):
//!
//! ```text
//! descriptor := singular suffix*
//! suffix     := "[" "]" | "[" N "]" | "[" N "," "]" | "[" N "," M "]"
//! ```

use super::occurs::{MaxOccurs, Occurs};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

static DESCRIPTOR_RE: OnceLock<Regex> = OnceLock::new();
static SUFFIX_RE: OnceLock<Regex> = OnceLock::new();
static BOUNDS_RE: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)] // literal patterns, validated by the unit tests below
fn descriptor_re() -> &'static Regex {
    DESCRIPTOR_RE.get_or_init(|| {
        Regex::new(r"^(?P<singular>[^\[\]]+?)\s*(?P<suffixes>(?:\[[^\[\]]*\])+)\s*$")
            .expect("descriptor pattern")
    })
}

#[allow(clippy::expect_used)]
fn suffix_re() -> &'static Regex {
    SUFFIX_RE.get_or_init(|| Regex::new(r"\[([^\[\]]*)\]").expect("suffix pattern"))
}

#[allow(clippy::expect_used)]
fn bounds_re() -> &'static Regex {
    BOUNDS_RE.get_or_init(|| {
        Regex::new(r"^\s*(?:(?P<min>\d+)\s*(?P<range>,\s*(?P<max>\d*)\s*)?)?$")
            .expect("bounds pattern")
    })
}

/// One array wrapper level of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingLevel {
    raw: String,
    occurs: Occurs,
}

impl NestingLevel {
    /// Bracket text as written, e.g. `[2,5]`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn occurs(&self) -> Occurs {
        self.occurs
    }
}

/// A descriptor split into its singular type and nesting levels.
///
/// `levels()[0]` is the outermost wrapper (first bracket read left to
/// right); the last level wraps the singular type directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDescriptor {
    singular: String,
    levels: Vec<NestingLevel>,
}

impl ParsedDescriptor {
    /// Unbracketed type name.
    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn levels(&self) -> &[NestingLevel] {
        &self.levels
    }

    /// Number of array levels (always >= 1).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Descriptor text of the sub-shape rooted at `level`.
    ///
    /// For `T[][2,3]`, level 0 is `T[][2,3]` and level 1 is `T[2,3]`, so a
    /// nested level shares its registry key with the standalone descriptor
    /// of the same shape.
    pub fn level_descriptor(&self, level: usize) -> String {
        let mut out = self.singular.clone();
        for nesting in self.levels.iter().skip(level) {
            out.push_str(&nesting.raw);
        }
        out
    }
}

/// Parse an array descriptor.
///
/// - `Ok(None)`: no bracket suffix, or bracket text that is not an occurs
///   expression. Callers treat the descriptor as a plain type.
/// - `Err(InvalidDescriptor)`: well-formed brackets carrying impossible
///   bounds (`[0]`, `[5,2]`, overflowing numbers).
pub fn parse_descriptor(descriptor: &str) -> Result<Option<ParsedDescriptor>> {
    let Some(caps) = descriptor_re().captures(descriptor) else {
        return Ok(None);
    };

    let singular = caps["singular"].trim();
    if singular.is_empty() {
        return Ok(None);
    }

    let mut levels = Vec::new();
    for suffix in suffix_re().captures_iter(&caps["suffixes"]) {
        let Some(occurs) = parse_bounds(descriptor, &suffix[1])? else {
            log::trace!(
                "[DescriptorParser] '{}' has non-occurs bracket text, treating as plain type",
                descriptor
            );
            return Ok(None);
        };
        levels.push(NestingLevel {
            raw: suffix[0].to_string(),
            occurs,
        });
    }

    Ok(Some(ParsedDescriptor {
        singular: singular.to_string(),
        levels,
    }))
}

fn parse_bounds(descriptor: &str, text: &str) -> Result<Option<Occurs>> {
    let Some(caps) = bounds_re().captures(text) else {
        return Ok(None);
    };

    let Some(min_text) = caps.name("min") else {
        return Ok(Some(Occurs::UNBOUNDED_LIST));
    };
    let min = parse_bound(descriptor, min_text.as_str())?;

    let occurs = match (caps.name("range"), caps.name("max")) {
        (None, _) => Occurs::exactly(min),
        (Some(_), Some(max)) if !max.as_str().is_empty() => {
            Occurs::new(min, MaxOccurs::Bounded(parse_bound(descriptor, max.as_str())?))
        }
        (Some(_), _) => Occurs::new(min, MaxOccurs::Unbounded),
    };

    occurs.map(Some).map_err(|reason| invalid(descriptor, reason))
}

fn parse_bound(descriptor: &str, digits: &str) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|_| invalid(descriptor, format!("bound {} out of range", digits)))
}

fn invalid(descriptor: &str, reason: String) -> Error {
    Error::InvalidDescriptor {
        descriptor: descriptor.to_string(),
        reason,
    }
}

/// Strip one trailing `[]` (the unbounded shorthand only).
///
/// Returns the element type and whether a suffix was removed. Bounded
/// suffixes such as `[3]` are left in place.
pub fn strip_unbounded_suffix(descriptor: &str) -> (&str, bool) {
    match descriptor.trim_end().strip_suffix("[]") {
        Some(inner) => (inner.trim_end(), true),
        None => (descriptor, false),
    }
}

/// Map namespace separators (`\`, `::`) to `.` for use inside XSD names.
pub fn translate_type(name: &str) -> String {
    let trimmed = name.trim_start_matches('\\').trim_start_matches("::");
    trimmed.replace("::", ".").replace('\\', ".")
}

/// Upper-case the first character, as used for `ArrayOf<Type>` names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
