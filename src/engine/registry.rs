use std::collections::BTreeMap;

use crate::render::backend::Handle;

/// A live, identity-carrying object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Rendered instance.
    pub handle: Handle,
    /// How long this instance takes to morph into its match on the next slide.
    pub transition_ms: u64,
}

/// Object id to rendered instance, for the slide currently on screen.
///
/// Rebuilt on every slide render and cleared by non-animated jumps, so a match can only ever span
/// one slide boundary.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl ObjectRegistry {
    /// Store or overwrite the entry for `id`.
    pub fn put(&mut self, id: impl Into<String>, handle: Handle, transition_ms: u64) {
        self.entries.insert(
            id.into(),
            RegistryEntry {
                handle,
                transition_ms,
            },
        );
    }

    /// Entry for `id`.
    pub fn get(&self, id: &str) -> Option<RegistryEntry> {
        self.entries.get(id).copied()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RegistryEntry)> {
        self.entries.iter().map(|(id, e)| (id.as_str(), *e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/registry.rs"]
mod tests;
