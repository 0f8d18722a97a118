//! Core identifier types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of an item in the host's item catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a participant (player) whose inventory is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl From<u32> for ParticipantId {
    fn from(id: u32) -> Self {
        ParticipantId(id)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Stable position of a definition inside a [`crate::SynergyRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynergyIndex(pub usize);

impl fmt::Display for SynergyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item category as reported by the item catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Wieldable tool or weapon (subject to the equip gate)
    Tool,
    /// Passive or active trinket that is never wielded
    Auxiliary,
    /// Anything the catalog does not recognize
    Unknown,
}

impl ItemCategory {
    /// Whether items of this category can take part in a synergy
    pub fn is_known(&self) -> bool {
        !matches!(self, ItemCategory::Unknown)
    }
}

/// Reference to an item as written by content authors
///
/// Content may name items either by numeric id or by the catalog's
/// string id (e.g. `"magic_lamp"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    Id(ItemId),
    Console(String),
}

impl From<ItemId> for ItemRef {
    fn from(id: ItemId) -> Self {
        ItemRef::Id(id)
    }
}

impl From<u32> for ItemRef {
    fn from(id: u32) -> Self {
        ItemRef::Id(ItemId(id))
    }
}

impl From<&str> for ItemRef {
    fn from(s: &str) -> Self {
        ItemRef::Console(s.to_string())
    }
}

impl From<String> for ItemRef {
    fn from(s: String) -> Self {
        ItemRef::Console(s)
    }
}
