//! synergy_core - Synergy requirement matching and activation tracking
//!
//! This library provides:
//! - SynergyRegistry: Append-only store of synergy definitions with stable indices
//! - evaluate / explain: Matching a definition against a participant's inventory
//! - ActiveSynergyIndex / SynergyTracker: Cached activity with on/off transitions
//! - SynergyQueries: Name-based activity checks and counts
//! - ContentPack: TOML content loading (items + synergies)

pub mod active;
pub mod catalog;
pub mod config;
pub mod evaluator;
pub mod inventory;
pub mod participant;
pub mod prelude;
pub mod registry;
pub mod stat;
pub mod synergy;
pub mod types;

// Re-export core types for convenience
pub use active::{
    ActiveSynergyIndex, SynergyQueries, SynergyTracker, SynergyTransition, TransitionKind,
    TransitionListener,
};
pub use catalog::{ItemCatalog, ItemEntry, ItemTable};
pub use config::{load_content, parse_content, ConfigError, ContentPack};
pub use evaluator::{evaluate, explain, Activation, MatchReport, Substitution, Unmet};
pub use inventory::{InventorySnapshot, InventoryTable, ParticipantInventory};
pub use participant::{ParticipantDirectory, Roster, RosterEntry};
pub use registry::{SynergyPublisher, SynergyRegistry};
pub use stat::{ModifyMethod, StatKind, StatModifier, StatTotals, StatValue};
pub use synergy::{normalize_name, ItemPools, NameKey, SynergyDefinition, SynergySpec};
pub use types::{ItemCategory, ItemId, ItemRef, ParticipantId, SynergyIndex};
