//! Schema traversal for visitor-style generators
//!
//! A generator implements [`SchemaVisitor`] and lets [`SchemaWalker`] call it
//! back for every enum, class and class slot. The walker runs in phases so
//! that every enum has been seen before any class, and every class before
//! any of the class slots.

use super::traits::GeneratorResult;
use crate::schema_view::SchemaView;
use linkml_core::prelude::*;
use tracing::debug;

/// Callbacks invoked by [`SchemaWalker`]
///
/// Every method has a no-op default so a visitor only overrides what it
/// needs.
pub trait SchemaVisitor {
    /// Called once before anything else
    ///
    /// # Errors
    /// Implementation defined; aborts the walk.
    fn visit_schema(&mut self, _schema: &SchemaDefinition) -> GeneratorResult<()> {
        Ok(())
    }

    /// Called once per enum, in declaration order
    ///
    /// # Errors
    /// Implementation defined; aborts the walk.
    fn visit_enum(&mut self, _enum_def: &EnumDefinition) -> GeneratorResult<()> {
        Ok(())
    }

    /// Called once per class with its induced slot names.
    ///
    /// Returning `false` skips the class slots of this class.
    ///
    /// # Errors
    /// Implementation defined; aborts the walk.
    fn visit_class(
        &mut self,
        _class: &ClassDefinition,
        _slot_names: &[String],
    ) -> GeneratorResult<bool> {
        Ok(true)
    }

    /// Called once per (class, induced slot) pair
    ///
    /// # Errors
    /// Implementation defined; aborts the walk.
    fn visit_class_slot(
        &mut self,
        _class: &ClassDefinition,
        _aliased_slot_name: &str,
        _slot: &SlotDefinition,
    ) -> GeneratorResult<()> {
        Ok(())
    }

    /// Called once after everything else
    ///
    /// # Errors
    /// Implementation defined.
    fn end_schema(&mut self, _schema: &SchemaDefinition) -> GeneratorResult<()> {
        Ok(())
    }
}

/// Drives a [`SchemaVisitor`] over a schema
#[derive(Debug, Clone, Default)]
pub struct SchemaWalker {
    skip_abstract: bool,
}

impl SchemaWalker {
    /// Create a walker that visits every class
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether abstract and mixin classes are left out
    #[must_use]
    pub fn skip_abstract_classes(mut self, skip: bool) -> Self {
        self.skip_abstract = skip;
        self
    }

    /// Whether `class` takes part in the walk
    #[must_use]
    pub fn includes(&self, class: &ClassDefinition) -> bool {
        !(self.skip_abstract && class.is_abstract_or_mixin())
    }

    /// Walk `schema`, calling `visitor` back.
    ///
    /// # Errors
    /// Propagates the first error returned by a callback.
    pub fn walk<V>(&self, schema: &SchemaDefinition, visitor: &mut V) -> GeneratorResult<()>
    where
        V: SchemaVisitor + ?Sized,
    {
        let view = SchemaView::new(schema);
        visitor.visit_schema(schema)?;

        for enum_def in schema.enums.values() {
            visitor.visit_enum(enum_def)?;
        }

        let mut descend = Vec::new();
        for class in schema.classes.values() {
            if !self.includes(class) {
                debug!("Skipping abstract or mixin class '{}'", class.name);
                continue;
            }
            let slot_names = view.induced_slot_names(&class.name);
            if visitor.visit_class(class, &slot_names)? {
                descend.push(class);
            }
        }

        for class in descend {
            for slot in view.class_induced_slots(&class.name) {
                visitor.visit_class_slot(class, slot.aliased_name(), &slot)?;
            }
        }

        visitor.end_schema(schema)
    }
}
