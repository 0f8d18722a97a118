//! SynergyTracker - Per-participant activity caches with edge-triggered hooks

use crate::active::{ActiveSynergyIndex, SynergyTransition, TransitionKind};
use crate::inventory::InventorySnapshot;
use crate::participant::ParticipantDirectory;
use crate::registry::SynergyRegistry;
use crate::stat::StatTotals;
use crate::types::ParticipantId;
use std::collections::HashMap;

/// Receives synergies switching on and off
///
/// Effect processors (companions, transforms, ...) hook in here instead of
/// polling activity every frame.
pub trait TransitionListener {
    fn on_transition(&mut self, registry: &SynergyRegistry, transition: &SynergyTransition);
}

impl TransitionListener for Vec<SynergyTransition> {
    fn on_transition(&mut self, _registry: &SynergyRegistry, transition: &SynergyTransition) {
        self.push(*transition);
    }
}

/// Keeps an [`ActiveSynergyIndex`] for every participant it has seen
#[derive(Debug, Clone, Default)]
pub struct SynergyTracker {
    indices: HashMap<ParticipantId, ActiveSynergyIndex>,
}

impl SynergyTracker {
    pub fn new() -> Self {
        SynergyTracker::default()
    }

    /// Re-evaluate one participant after their inventory changed
    pub fn on_inventory_changed(
        &mut self,
        registry: &SynergyRegistry,
        snapshot: &dyn InventorySnapshot,
        directory: &dyn ParticipantDirectory,
        participant: ParticipantId,
        listener: &mut dyn TransitionListener,
    ) -> usize {
        let transitions = self
            .indices
            .entry(participant)
            .or_insert_with(|| ActiveSynergyIndex::new(participant))
            .refresh(registry, snapshot, directory.candidate_indices(participant));

        for transition in &transitions {
            log::debug!(
                "{} {} '{}'",
                transition.participant,
                match transition.kind {
                    TransitionKind::Activated => "activated",
                    TransitionKind::Deactivated => "lost",
                },
                registry
                    .get(transition.index)
                    .map(|def| def.name())
                    .unwrap_or("?")
            );
            listener.on_transition(registry, transition);
        }
        transitions.len()
    }

    /// Re-evaluate every non-spectator participant
    ///
    /// Spectators lose their cached entries without emitting transitions.
    pub fn refresh_all(
        &mut self,
        registry: &SynergyRegistry,
        snapshot: &dyn InventorySnapshot,
        directory: &dyn ParticipantDirectory,
        listener: &mut dyn TransitionListener,
    ) -> usize {
        let mut transitions = 0;
        for (participant, is_spectator) in directory.participants() {
            if is_spectator {
                self.forget(participant);
            } else {
                transitions +=
                    self.on_inventory_changed(registry, snapshot, directory, participant, listener);
            }
        }
        transitions
    }

    pub fn index(&self, participant: ParticipantId) -> Option<&ActiveSynergyIndex> {
        self.indices.get(&participant)
    }

    /// Cached activity check (no re-evaluation)
    pub fn is_active(&self, registry: &SynergyRegistry, participant: ParticipantId, name: &str) -> bool {
        self.count_active_for(registry, participant, name) > 0
    }

    /// Cached count for one participant
    pub fn count_active_for(
        &self,
        registry: &SynergyRegistry,
        participant: ParticipantId,
        name: &str,
    ) -> usize {
        self.index(participant)
            .map(|index| index.count_matching(registry, name))
            .unwrap_or(0)
    }

    /// Stat modifiers of every cached active synergy of a participant
    pub fn stat_totals(&self, registry: &SynergyRegistry, participant: ParticipantId) -> StatTotals {
        match self.index(participant) {
            Some(index) => StatTotals::collect(index.iter().filter_map(|i| registry.get(i))),
            None => StatTotals::new(),
        }
    }

    /// Drop the cache of a participant that left
    pub fn forget(&mut self, participant: ParticipantId) -> Option<ActiveSynergyIndex> {
        self.indices.remove(&participant)
    }

    /// Drop every cache, e.g. after the registry was re-initialized
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
