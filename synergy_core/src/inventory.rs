//! InventorySnapshot - What each participant owns and wields

use crate::types::{ItemId, ParticipantId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Read-only view of participant inventories
///
/// Must not change during a single evaluation.
pub trait InventorySnapshot {
    /// Whether the participant possesses the item
    fn owns(&self, participant: ParticipantId, item: ItemId) -> bool;

    /// Whether the item is the participant's currently wielded tool
    fn is_equipped(&self, participant: ParticipantId, item: ItemId) -> bool;

    /// Whether the participant holds a wildcard substitution token
    fn owns_wildcard_token(&self, participant: ParticipantId) -> bool;
}

/// Inventory of one participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInventory {
    pub owned: BTreeSet<ItemId>,
    pub equipped: BTreeSet<ItemId>,
    pub wildcard_tokens: u32,
}

impl ParticipantInventory {
    pub fn new() -> Self {
        ParticipantInventory::default()
    }

    /// Pick up an item
    pub fn add(&mut self, item: ItemId) {
        self.owned.insert(item);
    }

    /// Drop an item (also unequips it)
    pub fn remove(&mut self, item: ItemId) {
        self.owned.remove(&item);
        self.equipped.remove(&item);
    }

    /// Wield an owned item. Returns false if the item is not owned.
    pub fn equip(&mut self, item: ItemId) -> bool {
        if !self.owned.contains(&item) {
            return false;
        }
        self.equipped.insert(item);
        true
    }

    pub fn unequip(&mut self, item: ItemId) {
        self.equipped.remove(&item);
    }

    /// Wield exactly one item, unequipping everything else
    pub fn wield_only(&mut self, item: ItemId) -> bool {
        if !self.owned.contains(&item) {
            return false;
        }
        self.equipped.clear();
        self.equipped.insert(item);
        true
    }
}

/// In-memory inventories for every participant
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    inventories: HashMap<ParticipantId, ParticipantInventory>,
}

impl InventoryTable {
    pub fn new() -> Self {
        InventoryTable::default()
    }

    /// Mutable inventory for a participant, created on first access
    pub fn entry(&mut self, participant: ParticipantId) -> &mut ParticipantInventory {
        self.inventories.entry(participant).or_default()
    }

    pub fn get(&self, participant: ParticipantId) -> Option<&ParticipantInventory> {
        self.inventories.get(&participant)
    }

    pub fn remove(&mut self, participant: ParticipantId) -> Option<ParticipantInventory> {
        self.inventories.remove(&participant)
    }
}

impl InventorySnapshot for InventoryTable {
    fn owns(&self, participant: ParticipantId, item: ItemId) -> bool {
        self.get(participant)
            .map(|inv| inv.owned.contains(&item))
            .unwrap_or(false)
    }

    fn is_equipped(&self, participant: ParticipantId, item: ItemId) -> bool {
        self.get(participant)
            .map(|inv| inv.equipped.contains(&item))
            .unwrap_or(false)
    }

    fn owns_wildcard_token(&self, participant: ParticipantId) -> bool {
        self.get(participant)
            .map(|inv| inv.wildcard_tokens > 0)
            .unwrap_or(false)
    }
}
