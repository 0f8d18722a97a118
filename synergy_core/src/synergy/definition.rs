//! SynergyDefinition - Immutable, catalog-resolved synergy requirements

use crate::catalog::ItemCatalog;
use crate::stat::StatModifier;
use crate::synergy::constants::WILDCARD_MIN_QUOTA;
use crate::synergy::{normalize_name, NameKey, SynergySpec};
use crate::types::{ItemCategory, ItemId, ItemRef};
use std::collections::BTreeSet;

/// The four item pools of a synergy, split by requirement and category
///
/// Pools are pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPools {
    pub mandatory_tools: BTreeSet<ItemId>,
    pub mandatory_aux: BTreeSet<ItemId>,
    pub optional_tools: BTreeSet<ItemId>,
    pub optional_aux: BTreeSet<ItemId>,
}

impl ItemPools {
    /// Every mandatory id, tools first
    pub fn mandatory(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.mandatory_tools
            .iter()
            .chain(self.mandatory_aux.iter())
            .copied()
    }

    /// Every id in any pool with its category
    pub fn all(&self) -> impl Iterator<Item = (ItemId, ItemCategory)> + '_ {
        let tools = self
            .mandatory_tools
            .iter()
            .chain(self.optional_tools.iter())
            .map(|id| (*id, ItemCategory::Tool));
        let aux = self
            .mandatory_aux
            .iter()
            .chain(self.optional_aux.iter())
            .map(|id| (*id, ItemCategory::Auxiliary));
        tools.chain(aux)
    }

    /// Number of distinct ids across all pools
    pub fn len(&self) -> usize {
        self.mandatory_tools.len()
            + self.mandatory_aux.len()
            + self.optional_tools.len()
            + self.optional_aux.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Category of an id if it belongs to any pool
    pub fn category_of(&self, id: ItemId) -> Option<ItemCategory> {
        if self.mandatory_tools.contains(&id) || self.optional_tools.contains(&id) {
            Some(ItemCategory::Tool)
        } else if self.mandatory_aux.contains(&id) || self.optional_aux.contains(&id) {
            Some(ItemCategory::Auxiliary)
        } else {
            None
        }
    }

    fn insert_mandatory(&mut self, id: ItemId, category: ItemCategory) {
        match category {
            ItemCategory::Tool => {
                self.mandatory_tools.insert(id);
            }
            ItemCategory::Auxiliary => {
                self.mandatory_aux.insert(id);
            }
            ItemCategory::Unknown => {}
        }
    }

    fn insert_optional(&mut self, id: ItemId, category: ItemCategory) {
        // Mandatory membership takes precedence
        if self.mandatory_tools.contains(&id) || self.mandatory_aux.contains(&id) {
            return;
        }
        match category {
            ItemCategory::Tool => {
                self.optional_tools.insert(id);
            }
            ItemCategory::Auxiliary => {
                self.optional_aux.insert(id);
            }
            ItemCategory::Unknown => {}
        }
    }
}

/// A registered synergy
///
/// Built only by the registry, which resolves every item reference once
/// against the catalog. Shared out by reference afterwards and never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyDefinition {
    name: String,
    name_key: NameKey,
    pools: ItemPools,
    quota: i32,
    active_when_tools_unequipped: bool,
    allow_wildcard_substitution: bool,
    require_one_from_each_category: bool,
    suppress_presentation_effect: bool,
    effects: Vec<StatModifier>,
    auxiliary_tags: Vec<String>,
}

impl SynergyDefinition {
    /// Resolve a spec against the catalog, dropping unknown items
    pub(crate) fn build(spec: SynergySpec, catalog: &dyn ItemCatalog) -> Self {
        let mut pools = ItemPools::default();

        for item in &spec.mandatory {
            match catalog.classify(item) {
                Some((id, category)) => pools.insert_mandatory(id, category),
                None => log_dropped(&spec.name, item),
            }
        }
        for item in &spec.optional {
            match catalog.classify(item) {
                Some((id, category)) => pools.insert_optional(id, category),
                None => log_dropped(&spec.name, item),
            }
        }

        SynergyDefinition {
            name_key: normalize_name(&spec.name),
            name: spec.name,
            pools,
            quota: spec.quota,
            active_when_tools_unequipped: spec.active_when_tools_unequipped,
            allow_wildcard_substitution: spec.allow_wildcard,
            require_one_from_each_category: spec.require_one_from_each_category,
            suppress_presentation_effect: spec.suppress_presentation,
            effects: spec.effects,
            auxiliary_tags: spec.auxiliary_tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_key(&self) -> &NameKey {
        &self.name_key
    }

    pub fn pools(&self) -> &ItemPools {
        &self.pools
    }

    pub fn quota(&self) -> i32 {
        self.quota
    }

    pub fn active_when_tools_unequipped(&self) -> bool {
        self.active_when_tools_unequipped
    }

    pub fn allow_wildcard_substitution(&self) -> bool {
        self.allow_wildcard_substitution
    }

    pub fn require_one_from_each_category(&self) -> bool {
        self.require_one_from_each_category
    }

    pub fn suppress_presentation_effect(&self) -> bool {
        self.suppress_presentation_effect
    }

    pub fn effects(&self) -> &[StatModifier] {
        &self.effects
    }

    pub fn auxiliary_tags(&self) -> &[String] {
        &self.auxiliary_tags
    }

    /// Whether a wildcard token may ever stand in for an item here
    pub fn wildcard_slot_available(&self) -> bool {
        self.allow_wildcard_substitution && self.quota >= WILDCARD_MIN_QUOTA
    }

    /// Whether some inventory could satisfy the quota at all
    pub fn can_ever_be_satisfied(&self) -> bool {
        if self.quota <= 0 {
            return false;
        }
        let slots = self.pools.len() + usize::from(self.wildcard_slot_available());
        self.quota as usize <= slots
    }
}

fn log_dropped(synergy: &str, item: &ItemRef) {
    log::debug!(
        "Synergy '{}': dropping unrecognized item {:?}",
        synergy,
        item
    );
}
