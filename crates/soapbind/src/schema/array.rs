// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Nested-array complex type generation.
//!
//! ## Naming
//!
//! Level `L` of a descriptor with levels `0..n` is named by concatenating
//! the wrapper prefixes of levels `L..n` and appending the capitalized
//! singular type:
//!
//! ```text
//! T[][2,3]   level 0 -> tns:ArrayOfArray.2.3.OfT   item: tns:Array.2.3.OfT  (0..unbounded)
//!            level 1 -> tns:Array.2.3.OfT          item: xsd/tns T          (2..3)
//! ```
//!
//! Levels are registered innermost first so a wrapper never references a
//! type that is not yet in the schema.

use super::context::SchemaBuilder;
use super::xsd::XsdComplexType;
use crate::descriptor::{capitalize, parse_descriptor, translate_type, ParsedDescriptor};
use crate::error::Result;

/// Emits `ArrayOf…` / `Array.N.Of…` complex types into a schema.
pub struct ArrayTypeEmitter<'a, S: SchemaBuilder + ?Sized> {
    schema: &'a S,
}

impl<'a, S: SchemaBuilder + ?Sized> ArrayTypeEmitter<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        Self { schema }
    }

    /// Resolve the qualified type name for an array descriptor.
    ///
    /// Returns `Ok(None)` when `descriptor` carries no (well-formed) array
    /// suffix; the caller then falls back to a scalar or complex type.
    /// Invalid bounds fail before anything is registered.
    pub fn resolve_array_complex_type(&self, descriptor: &str) -> Result<Option<String>> {
        if let Some(cached) = self.schema.get_type(descriptor) {
            log::trace!("[ArrayTypeEmitter] cache hit {} -> {}", descriptor, cached);
            return Ok(Some(cached));
        }

        let Some(parsed) = parse_descriptor(descriptor)? else {
            return Ok(None);
        };

        let names = canonical_names(&parsed, self.schema);
        for level in (0..parsed.depth()).rev() {
            self.register_level(&parsed, level, &names);
        }

        let outermost = names[0].clone();
        self.schema.add_type(descriptor, &outermost);
        Ok(Some(outermost))
    }

    fn register_level(&self, parsed: &ParsedDescriptor, level: usize, names: &[String]) {
        let config = self.schema.config();
        let name = &names[level];
        let child = match names.get(level + 1) {
            Some(inner) => inner.clone(),
            None => self.schema.registered_xsd_type(parsed.singular()),
        };

        let fragment = XsdComplexType::array(
            config.local_name(name),
            &config.item_element,
            child,
            parsed.levels()[level].occurs(),
        );
        if !self
            .schema
            .register_complex_type(&parsed.level_descriptor(level), name, fragment)
        {
            log::trace!("[ArrayTypeEmitter] {} already registered, skipped", name);
        }
    }
}

/// Qualified canonical name of every level, index-aligned with
/// `parsed.levels()`.
pub fn canonical_names<S: SchemaBuilder + ?Sized>(
    parsed: &ParsedDescriptor,
    schema: &S,
) -> Vec<String> {
    let base = capitalize(&translate_type(parsed.singular()));
    let config = schema.config();

    let mut names = Vec::with_capacity(parsed.depth());
    let mut suffix = base;
    for nesting in parsed.levels().iter().rev() {
        suffix = format!("{}{}", nesting.occurs().wrapper_prefix(), suffix);
        names.push(config.qualify(&suffix));
    }
    names.reverse();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{MaxOccurs, Occurs};
    use crate::error::Error;
    use crate::schema::SchemaContext;
    use parking_lot::Mutex;

    fn resolve(ctx: &SchemaContext, descriptor: &str) -> Option<String> {
        ArrayTypeEmitter::new(ctx)
            .resolve_array_complex_type(descriptor)
            .expect("resolve")
    }

    /// Schema that records every moment a mapping names an absent fragment.
    #[derive(Default)]
    struct WatchedSchema {
        inner: SchemaContext,
        dangling: Mutex<Vec<String>>,
    }

    impl WatchedSchema {
        fn check(&self, key: &str) {
            if let Some(name) = self.inner.get_type(key) {
                let local = self.inner.config().local_name(&name);
                if !self.inner.contains_complex_type(local) {
                    self.dangling.lock().push(format!("{} -> {}", key, name));
                }
            }
        }
    }

    impl SchemaBuilder for WatchedSchema {
        fn config(&self) -> &crate::config::SchemaConfig {
            self.inner.config()
        }

        fn add_type(&self, key: &str, canonical_name: &str) {
            self.inner.add_type(key, canonical_name);
            self.check(key);
        }

        fn get_type(&self, key: &str) -> Option<String> {
            self.check(key);
            self.inner.get_type(key)
        }

        fn registered_xsd_type(&self, singular: &str) -> String {
            self.inner.registered_xsd_type(singular)
        }

        fn append_complex_type(&self, fragment: XsdComplexType) -> bool {
            self.inner.append_complex_type(fragment)
        }

        fn register_complex_type(
            &self,
            key: &str,
            canonical_name: &str,
            fragment: XsdComplexType,
        ) -> bool {
            self.check(key);
            let added = self.inner.register_complex_type(key, canonical_name, fragment);
            self.check(key);
            added
        }
    }

    #[test]
    fn test_single_level_names_and_occurs() {
        let cases = [
            ("T[]", "ArrayOfT", 0, MaxOccurs::Unbounded),
            ("T[3]", "Array.3.OfT", 3, MaxOccurs::Bounded(3)),
            ("T[2,5]", "Array.2.5.OfT", 2, MaxOccurs::Bounded(5)),
            ("T[2,]", "Array.2.unbounded.OfT", 2, MaxOccurs::Unbounded),
        ];
        for (descriptor, local, min, max) in cases {
            let ctx = SchemaContext::default();
            assert_eq!(resolve(&ctx, descriptor), Some(format!("tns:{}", local)));

            let fragment = ctx.fragment(local).expect("fragment registered");
            let item = fragment.array_item().expect("array item");
            assert_eq!(item.name, "item");
            assert_eq!(item.type_ref, "tns:T");
            assert_eq!(item.occurs, Some(Occurs::new(min, max).unwrap()));
        }
    }

    #[test]
    fn test_scalar_items_use_xsd_types() {
        let ctx = SchemaContext::default();
        assert_eq!(resolve(&ctx, "int[]").as_deref(), Some("tns:ArrayOfInt"));
        let item = ctx.fragment("ArrayOfInt").unwrap().sequence[0].clone();
        assert_eq!(item.type_ref, "xsd:int");
    }

    #[test]
    fn test_nested_levels_reference_inner_names() {
        let ctx = SchemaContext::default();
        assert_eq!(
            resolve(&ctx, "T[][2,3]").as_deref(),
            Some("tns:ArrayOfArray.2.3.OfT")
        );
        assert_eq!(ctx.len(), 2);

        let outer = ctx.fragment("ArrayOfArray.2.3.OfT").unwrap();
        assert_eq!(outer.sequence[0].type_ref, "tns:Array.2.3.OfT");
        assert_eq!(outer.sequence[0].occurs, Some(Occurs::UNBOUNDED_LIST));

        let inner = ctx.fragment("Array.2.3.OfT").unwrap();
        assert_eq!(inner.sequence[0].type_ref, "tns:T");

        // innermost first
        let order: Vec<_> = ctx.fragments().into_iter().map(|f| f.name).collect();
        assert_eq!(order, vec!["Array.2.3.OfT", "ArrayOfArray.2.3.OfT"]);
    }

    #[test]
    fn test_three_levels() {
        let ctx = SchemaContext::default();
        assert_eq!(
            resolve(&ctx, "Foo[][2,5][]").as_deref(),
            Some("tns:ArrayOfArray.2.5.OfArrayOfFoo")
        );
        assert!(ctx.contains_complex_type("ArrayOfFoo"));
        assert!(ctx.contains_complex_type("Array.2.5.OfArrayOfFoo"));
        assert!(ctx.contains_complex_type("ArrayOfArray.2.5.OfArrayOfFoo"));
    }

    #[test]
    fn test_repeat_request_registers_once() {
        let ctx = SchemaContext::default();
        let first = resolve(&ctx, "T[2,5]");
        let second = resolve(&ctx, "T[2,5]");
        assert_eq!(first, second);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_shared_inner_shape_is_reused() {
        let ctx = SchemaContext::default();
        resolve(&ctx, "T[]");
        resolve(&ctx, "T[][]");
        resolve(&ctx, "T[0,]");
        // ArrayOfT, ArrayOfArrayOfT
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get_type("T[0,]").as_deref(), Some("tns:ArrayOfT"));
    }

    #[test]
    fn test_invalid_bounds_register_nothing() {
        let ctx = SchemaContext::default();
        let emitter = ArrayTypeEmitter::new(&ctx);
        for descriptor in ["T[5,2]", "T[0]", "T[][0]"] {
            let err = emitter.resolve_array_complex_type(descriptor).unwrap_err();
            assert!(matches!(err, Error::InvalidDescriptor { .. }));
        }
        assert!(ctx.is_empty());
        assert!(ctx.get_type("T[]").is_none());
    }

    #[test]
    fn test_non_array_returns_none() {
        let ctx = SchemaContext::default();
        assert_eq!(resolve(&ctx, "int"), None);
        assert_eq!(resolve(&ctx, "T[abc]"), None);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_mapping_never_names_missing_fragment() {
        let schema = WatchedSchema::default();
        let emitter = ArrayTypeEmitter::new(&schema);
        for descriptor in ["T[]", "T[][2,3]", "int[3][]", "T[][]", "T[]"] {
            emitter
                .resolve_array_complex_type(descriptor)
                .expect("resolve");
        }
        assert!(
            schema.dangling.lock().is_empty(),
            "dangling mappings: {:?}",
            schema.dangling.lock()
        );
        assert_eq!(
            schema.inner.get_type("T[2,3]").as_deref(),
            Some("tns:Array.2.3.OfT")
        );
    }

    #[test]
    fn test_concurrent_readers_see_complete_types() {
        use std::sync::Arc;

        let ctx = Arc::new(SchemaContext::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ctx = Arc::clone(&ctx);
                std::thread::spawn(move || {
                    let name = ArrayTypeEmitter::new(ctx.as_ref())
                        .resolve_array_complex_type("T[][2,3]")
                        .expect("resolve")
                        .expect("array");
                    let local = ctx.config().local_name(&name).to_string();
                    ctx.contains_complex_type(&local)
                        && ctx.contains_complex_type("Array.2.3.OfT")
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().expect("thread"));
        }
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_namespaced_singular() {
        let ctx = SchemaContext::default();
        assert_eq!(
            resolve(&ctx, "\\App\\Model\\item[]").as_deref(),
            Some("tns:ArrayOfApp.Model.item")
        );
        let item = &ctx.fragment("ArrayOfApp.Model.item").unwrap().sequence[0];
        assert_eq!(item.type_ref, "tns:App.Model.item");
    }
}
