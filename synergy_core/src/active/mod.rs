//! Active synergy tracking and queries

mod query;
mod tracker;

pub use query::SynergyQueries;
pub use tracker::{SynergyTracker, TransitionListener};

use crate::evaluator::evaluate;
use crate::inventory::InventorySnapshot;
use crate::registry::SynergyRegistry;
use crate::synergy::normalize_name;
use crate::types::{ParticipantId, SynergyIndex};
use serde::Serialize;
use std::collections::BTreeSet;

/// Direction of an activation change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Activated,
    Deactivated,
}

/// A synergy switching on or off for a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SynergyTransition {
    pub participant: ParticipantId,
    pub index: SynergyIndex,
    pub kind: TransitionKind,
}

/// Registry indices currently active for one participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSynergyIndex {
    participant: ParticipantId,
    active: BTreeSet<SynergyIndex>,
}

impl ActiveSynergyIndex {
    pub fn new(participant: ParticipantId) -> Self {
        ActiveSynergyIndex {
            participant,
            active: BTreeSet::new(),
        }
    }

    pub fn participant(&self) -> ParticipantId {
        self.participant
    }

    /// Re-evaluate the candidate entries and report what changed
    ///
    /// Candidates that are not in the registry are ignored. Transitions
    /// come out deactivations first, each group in index order.
    pub fn refresh(
        &mut self,
        registry: &SynergyRegistry,
        snapshot: &dyn InventorySnapshot,
        candidates: &[SynergyIndex],
    ) -> Vec<SynergyTransition> {
        let now: BTreeSet<SynergyIndex> = candidates
            .iter()
            .copied()
            .filter(|index| {
                registry
                    .get(*index)
                    .map(|def| evaluate(def, snapshot, self.participant).is_active())
                    .unwrap_or(false)
            })
            .collect();

        let deactivated = self.active.difference(&now).map(|index| SynergyTransition {
            participant: self.participant,
            index: *index,
            kind: TransitionKind::Deactivated,
        });
        let activated = now.difference(&self.active).map(|index| SynergyTransition {
            participant: self.participant,
            index: *index,
            kind: TransitionKind::Activated,
        });
        let transitions = deactivated.chain(activated).collect();

        self.active = now;
        transitions
    }

    pub fn contains(&self, index: SynergyIndex) -> bool {
        self.active.contains(&index)
    }

    /// Active entries whose key matches the given name or key
    pub fn count_matching(&self, registry: &SynergyRegistry, name: &str) -> usize {
        let key = normalize_name(name);
        self.active
            .iter()
            .filter_map(|index| registry.get(*index))
            .filter(|def| *def.name_key() == key)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = SynergyIndex> + '_ {
        self.active.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Forget every active entry without emitting transitions
    pub fn clear(&mut self) {
        self.active.clear();
    }
}
