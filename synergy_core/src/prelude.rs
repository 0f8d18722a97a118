//! Prelude module for convenient imports
//!
//! ```rust
//! use synergy_core::prelude::*;
//! ```

// Core types
pub use crate::synergy::{normalize_name, SynergyDefinition, SynergySpec};
pub use crate::types::{ItemCategory, ItemId, ItemRef, ParticipantId, SynergyIndex};

// Registry and evaluation
pub use crate::evaluator::{evaluate, Activation};
pub use crate::registry::SynergyRegistry;

// Collaborators
pub use crate::catalog::{ItemCatalog, ItemTable};
pub use crate::inventory::{InventorySnapshot, InventoryTable};
pub use crate::participant::{ParticipantDirectory, Roster};

// Activity tracking
pub use crate::active::{SynergyQueries, SynergyTracker, TransitionListener};

// Effects
pub use crate::stat::{StatKind, StatModifier, StatTotals};
