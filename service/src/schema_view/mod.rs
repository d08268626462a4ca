//! `SchemaView` - read-only helpers for class and slot introspection
//!
//! Resolves the slots a class ends up with once `is_a` ancestors, mixins,
//! `slot_usage` refinements and inline attributes are taken into account.

use indexmap::IndexSet;
use linkml_core::types::{ClassDefinition, SchemaDefinition, SlotDefinition};
use std::collections::HashSet;

/// Borrowed view over a schema
#[derive(Debug, Clone, Copy)]
pub struct SchemaView<'a> {
    schema: &'a SchemaDefinition,
}

impl<'a> SchemaView<'a> {
    /// Create a view over `schema`
    #[must_use]
    pub fn new(schema: &'a SchemaDefinition) -> Self {
        Self { schema }
    }

    /// Look up a class by name
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&'a ClassDefinition> {
        self.schema.classes.get(name)
    }

    /// Ancestors of `class_name` in resolution order, farthest first.
    ///
    /// Each parent's own ancestors precede it; the `is_a` parent precedes
    /// mixins. The class itself is not included. Cycles are cut.
    #[must_use]
    pub fn class_ancestors(&self, class_name: &str) -> Vec<&'a ClassDefinition> {
        let mut visited = HashSet::new();
        visited.insert(class_name.to_string());
        let mut ancestors = Vec::new();
        if let Some(class) = self.get_class(class_name) {
            self.collect_ancestors(class, &mut visited, &mut ancestors);
        }
        ancestors
    }

    fn collect_ancestors(
        &self,
        class: &'a ClassDefinition,
        visited: &mut HashSet<String>,
        out: &mut Vec<&'a ClassDefinition>,
    ) {
        let parents = class.is_a.iter().chain(class.mixins.iter());
        for parent_name in parents {
            if !visited.insert(parent_name.clone()) {
                continue;
            }
            if let Some(parent) = self.get_class(parent_name) {
                self.collect_ancestors(parent, visited, out);
                out.push(parent);
            } else {
                tracing::debug!(
                    "Class '{}' references unknown parent '{parent_name}'",
                    class.name
                );
            }
        }
    }

    /// Names of every slot a class carries, inherited ones first
    #[must_use]
    pub fn induced_slot_names(&self, class_name: &str) -> Vec<String> {
        let mut names = IndexSet::new();
        let chain = self
            .class_ancestors(class_name)
            .into_iter()
            .chain(self.get_class(class_name));
        for class in chain {
            names.extend(class.slots.iter().cloned());
            names.extend(class.attributes.keys().cloned());
        }
        names.into_iter().collect()
    }

    /// Resolve a slot as seen from `class_name`.
    ///
    /// Starts from the schema-level slot (or an inline attribute found on
    /// the class chain, nearest first) and layers every `slot_usage` entry
    /// of the chain over it, the class's own usage last. Falls back to the
    /// schema's `default_range` when no range is set.
    #[must_use]
    pub fn induced_slot(&self, class_name: &str, slot_name: &str) -> SlotDefinition {
        let chain: Vec<&ClassDefinition> = self
            .class_ancestors(class_name)
            .into_iter()
            .chain(self.get_class(class_name))
            .collect();

        let mut slot = chain
            .iter()
            .rev()
            .find_map(|class| class.attributes.get(slot_name))
            .or_else(|| self.schema.slots.get(slot_name))
            .cloned()
            .unwrap_or_default();
        if slot.name.is_empty() {
            slot.name = slot_name.to_string();
        }

        for class in &chain {
            if let Some(usage) = class.slot_usage.get(slot_name) {
                apply_slot_usage(&mut slot, usage);
            }
        }

        if slot.range.is_none() {
            slot.range.clone_from(&self.schema.default_range);
        }
        slot
    }

    /// Fully resolved slots of a class, in induced order
    #[must_use]
    pub fn class_induced_slots(&self, class_name: &str) -> Vec<SlotDefinition> {
        self.induced_slot_names(class_name)
            .iter()
            .map(|slot_name| self.induced_slot(class_name, slot_name))
            .collect()
    }
}

/// Layer the fields set in `usage` over `slot`
fn apply_slot_usage(slot: &mut SlotDefinition, usage: &SlotDefinition) {
    fn layer<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
        if source.is_some() {
            target.clone_from(source);
        }
    }

    layer(&mut slot.description, &usage.description);
    layer(&mut slot.range, &usage.range);
    layer(&mut slot.required, &usage.required);
    layer(&mut slot.multivalued, &usage.multivalued);
    layer(&mut slot.identifier, &usage.identifier);
    layer(&mut slot.alias, &usage.alias);
    layer(&mut slot.pattern, &usage.pattern);
    layer(&mut slot.domain, &usage.domain);
    layer(&mut slot.slot_uri, &usage.slot_uri);
}
