//! ItemCatalog - Resolution and classification of item references

use crate::types::{ItemCategory, ItemId, ItemRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only view of the host's item database
pub trait ItemCatalog {
    /// Category of an item id (`Unknown` for ids the catalog lacks)
    fn category(&self, id: ItemId) -> ItemCategory;

    /// Resolve a string id such as `"magic_lamp"` to a numeric id
    fn resolve(&self, console_id: &str) -> Option<ItemId>;

    /// Resolve any item reference to a numeric id and category
    ///
    /// Returns `None` when the reference is unresolvable or the item is
    /// neither a tool nor an auxiliary item.
    fn classify(&self, item: &ItemRef) -> Option<(ItemId, ItemCategory)> {
        let id = match item {
            ItemRef::Id(id) => *id,
            ItemRef::Console(name) => self.resolve(name)?,
        };
        let category = self.category(id);
        category.is_known().then_some((id, category))
    }
}

/// One catalog entry as written in a content pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub id: ItemId,
    /// String id used by content (e.g. `"magic_lamp"`)
    pub console_id: String,
    pub category: ItemCategory,
}

/// In-memory catalog keyed by numeric and string id
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    by_id: HashMap<ItemId, ItemEntry>,
    by_console_id: HashMap<String, ItemId>,
}

impl ItemTable {
    pub fn new() -> Self {
        ItemTable::default()
    }

    /// Add an item; a later entry with the same ids replaces the earlier one
    pub fn insert(&mut self, entry: ItemEntry) {
        self.by_console_id.insert(entry.console_id.clone(), entry.id);
        self.by_id.insert(entry.id, entry);
    }

    /// Builder-style insert
    pub fn with_item(mut self, id: u32, console_id: &str, category: ItemCategory) -> Self {
        self.insert(ItemEntry {
            id: ItemId(id),
            console_id: console_id.to_string(),
            category,
        });
        self
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemEntry> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl ItemCatalog for ItemTable {
    fn category(&self, id: ItemId) -> ItemCategory {
        self.by_id
            .get(&id)
            .map(|e| e.category)
            .unwrap_or(ItemCategory::Unknown)
    }

    fn resolve(&self, console_id: &str) -> Option<ItemId> {
        self.by_console_id.get(console_id).copied()
    }
}
