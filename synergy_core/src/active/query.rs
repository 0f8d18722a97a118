//! SynergyQueries - Name-based activity checks over a participant directory

use crate::evaluator::evaluate;
use crate::inventory::InventorySnapshot;
use crate::participant::ParticipantDirectory;
use crate::registry::SynergyRegistry;
use crate::synergy::{normalize_name, NameKey, SynergyDefinition};
use crate::types::ParticipantId;

/// Borrowed view over everything a name query needs
///
/// Each query normalizes the caller's string once, then evaluates only the
/// candidate entries the directory lists for a participant.
#[derive(Clone, Copy)]
pub struct SynergyQueries<'a> {
    registry: &'a SynergyRegistry,
    snapshot: &'a dyn InventorySnapshot,
    directory: &'a dyn ParticipantDirectory,
}

impl<'a> SynergyQueries<'a> {
    pub fn new(
        registry: &'a SynergyRegistry,
        snapshot: &'a dyn InventorySnapshot,
        directory: &'a dyn ParticipantDirectory,
    ) -> Self {
        SynergyQueries {
            registry,
            snapshot,
            directory,
        }
    }

    /// Whether the participant has an active synergy with this name
    pub fn is_active(&self, participant: ParticipantId, name: &str) -> bool {
        let key = normalize_name(name);
        let found = self.matching_active(participant, &key).next().is_some();
        found
    }

    /// Number of the participant's active synergies with this name
    pub fn count_active_for(&self, participant: ParticipantId, name: &str) -> usize {
        let key = normalize_name(name);
        self.matching_active(participant, &key).count()
    }

    /// Number of active synergies with this name across all non-spectators
    pub fn count_active(&self, name: &str) -> usize {
        let key = normalize_name(name);
        self.directory
            .participants()
            .into_iter()
            .filter(|(_, is_spectator)| !is_spectator)
            .map(|(participant, _)| self.matching_active(participant, &key).count())
            .sum()
    }

    /// `Some(count)` if anyone has the synergy active, `None` otherwise
    pub fn anyone_has_active(&self, name: &str) -> Option<usize> {
        match self.count_active(name) {
            0 => None,
            count => Some(count),
        }
    }

    /// Candidate definitions with this key that currently evaluate active
    fn matching_active<'k>(
        &self,
        participant: ParticipantId,
        key: &'k NameKey,
    ) -> impl Iterator<Item = &'a SynergyDefinition> + 'k
    where
        'a: 'k,
    {
        let registry = self.registry;
        let snapshot = self.snapshot;
        self.directory
            .candidate_indices(participant)
            .iter()
            .filter_map(move |index| registry.get(*index))
            .filter(move |def| def.name_key() == key)
            .filter(move |def| evaluate(def, snapshot, participant).is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemTable;
    use crate::inventory::InventoryTable;
    use crate::participant::Roster;
    use crate::synergy::SynergySpec;
    use crate::types::{ItemCategory, ItemId, SynergyIndex};

    fn fixture() -> (SynergyRegistry, InventoryTable, Roster) {
        let catalog = ItemTable::new()
            .with_item(1, "tool_a", ItemCategory::Tool)
            .with_item(2, "aux_a", ItemCategory::Auxiliary);
        let mut registry = SynergyRegistry::new();
        let a = registry.register(&catalog, SynergySpec::new("Lamp Light", [1u32, 2]));
        let b = registry.register(&catalog, SynergySpec::new("Lamp Light", [1u32]).with_quota(1));

        let mut inventory = InventoryTable::new();
        let mut roster = Roster::new();
        for (raw, spectator) in [(0, false), (1, false), (2, true)] {
            let p = ParticipantId(raw);
            roster.join(p, spectator);
            roster.set_candidates(p, vec![a, b]);
            inventory.entry(p).add(ItemId(1));
            inventory.entry(p).add(ItemId(2));
        }
        (registry, inventory, roster)
    }

    #[test]
    fn test_is_active_accepts_name_or_key() {
        let (registry, inventory, roster) = fixture();
        let queries = SynergyQueries::new(&registry, &inventory, &roster);
        assert!(queries.is_active(ParticipantId(0), "Lamp Light"));
        assert!(queries.is_active(ParticipantId(0), "#LAMP_LIGHT"));
        assert!(!queries.is_active(ParticipantId(0), "Unknown Synergy"));
    }

    #[test]
    fn test_count_active_for_counts_duplicates() {
        let (registry, inventory, roster) = fixture();
        let queries = SynergyQueries::new(&registry, &inventory, &roster);
        assert_eq!(queries.count_active_for(ParticipantId(0), "lamp light"), 2);
    }

    #[test]
    fn test_count_active_skips_spectators() {
        let (registry, inventory, roster) = fixture();
        let queries = SynergyQueries::new(&registry, &inventory, &roster);
        assert_eq!(queries.count_active("Lamp Light"), 4);
        assert_eq!(queries.anyone_has_active("Lamp Light"), Some(4));
        assert_eq!(queries.anyone_has_active("Nope"), None);
    }

    #[test]
    fn test_only_candidates_are_considered() {
        let (registry, inventory, mut roster) = fixture();
        roster.set_candidates(ParticipantId(1), vec![SynergyIndex(1)]);
        let queries = SynergyQueries::new(&registry, &inventory, &roster);
        assert_eq!(queries.count_active_for(ParticipantId(1), "Lamp Light"), 1);
        assert_eq!(queries.count_active("Lamp Light"), 3);
    }
}
