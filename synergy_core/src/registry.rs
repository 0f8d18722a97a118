//! SynergyRegistry - Ordered, append-only store of synergy definitions

use crate::catalog::ItemCatalog;
use crate::synergy::{normalize_name, NameKey, StringTable, SynergyDefinition, SynergySpec};
use crate::types::SynergyIndex;
use std::collections::HashMap;

/// Adapter that forwards registered synergies into a host's own tables
pub trait SynergyPublisher {
    fn publish(&mut self, index: SynergyIndex, definition: &SynergyDefinition);
}

/// Synergy registry
///
/// Indices are positions in registration order and are never reused or
/// reordered until the registry is re-initialized. Registering a name key
/// that already exists keeps both entries; key lookups and display names
/// then refer to the most recent one.
#[derive(Debug, Clone, Default)]
pub struct SynergyRegistry {
    definitions: Vec<SynergyDefinition>,
    by_key: HashMap<NameKey, SynergyIndex>,
    strings: StringTable,
}

impl SynergyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SynergyRegistry {
            definitions: Vec::new(),
            by_key: HashMap::new(),
            strings: StringTable::new(),
        }
    }

    /// Reset to an empty registry; safe to call any number of times
    pub fn initialize(&mut self) {
        if !self.definitions.is_empty() {
            log::info!(
                "Re-initializing synergy registry, discarding {} definitions",
                self.definitions.len()
            );
        }
        self.definitions.clear();
        self.by_key.clear();
        self.strings.clear();
    }

    /// Release every definition at the end of a content session
    pub fn unload(&mut self) {
        log::info!("Unloading {} synergies", self.definitions.len());
        self.definitions = Vec::new();
        self.by_key = HashMap::new();
        self.strings.clear();
    }

    /// Register a synergy and return its stable index
    ///
    /// Item references the catalog cannot resolve to a tool or auxiliary
    /// item are dropped; registration itself never fails.
    pub fn register(&mut self, catalog: &dyn ItemCatalog, spec: SynergySpec) -> SynergyIndex {
        let definition = SynergyDefinition::build(spec, catalog);
        let index = SynergyIndex(self.definitions.len());
        let key = definition.name_key().clone();

        if let Some(previous) = self.by_key.insert(key.clone(), index) {
            log::warn!(
                "Synergy key {} registered again at {} (previously {})",
                key,
                index,
                previous
            );
        }
        if !definition.can_ever_be_satisfied() {
            log::warn!(
                "Synergy '{}' can never be satisfied (quota {}, {} qualifying items)",
                definition.name(),
                definition.quota(),
                definition.pools().len()
            );
        }

        self.strings.set(key, definition.name());
        self.definitions.push(definition);
        index
    }

    /// Register a synergy and hand it to a host adapter
    pub fn register_and_publish(
        &mut self,
        catalog: &dyn ItemCatalog,
        spec: SynergySpec,
        publisher: &mut dyn SynergyPublisher,
    ) -> SynergyIndex {
        let index = self.register(catalog, spec);
        if let Some(definition) = self.get(index) {
            publisher.publish(index, definition);
        }
        index
    }

    /// Find a synergy by display name or name key
    pub fn lookup_index_by_name_key(&self, name: &str) -> Option<SynergyIndex> {
        self.by_key.get(&normalize_name(name)).copied()
    }

    /// Every index registered under the same key, in registration order
    pub fn indices_for(&self, name: &str) -> Vec<SynergyIndex> {
        let key = normalize_name(name);
        self.iter()
            .filter(|(_, def)| *def.name_key() == key)
            .map(|(index, _)| index)
            .collect()
    }

    /// Return the name key if a synergy with that key exists, otherwise
    /// the input unchanged
    pub fn resolve_name(&self, raw: &str) -> String {
        let key = normalize_name(raw);
        if self.by_key.contains_key(&key) {
            key.as_str().to_string()
        } else {
            raw.to_string()
        }
    }

    /// Display name stored for a synergy
    pub fn display_name(&self, name: &str) -> Option<&str> {
        self.strings.get(&normalize_name(name))
    }

    /// Get a definition by index
    pub fn get(&self, index: SynergyIndex) -> Option<&SynergyDefinition> {
        self.definitions.get(index.0)
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over definitions in index order
    pub fn iter(&self) -> impl Iterator<Item = (SynergyIndex, &SynergyDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (SynergyIndex(i), def))
    }
}
