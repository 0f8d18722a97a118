//! StatTotals - Collects the modifiers of every active synergy

use crate::stat::{StatKind, StatModifier, StatValue};
use crate::synergy::SynergyDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-stat accumulation of synergy effects for one participant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatTotals {
    stats: BTreeMap<StatKind, StatValue>,
}

impl StatTotals {
    pub fn new() -> Self {
        StatTotals::default()
    }

    /// Accumulate the effects of the given definitions, in iteration order
    pub fn collect<'a, I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = &'a SynergyDefinition>,
    {
        let mut totals = StatTotals::new();
        for definition in definitions {
            for modifier in definition.effects() {
                totals.apply(modifier);
            }
        }
        totals
    }

    /// Fold one modifier into the matching stat
    pub fn apply(&mut self, modifier: &StatModifier) {
        self.stats.entry(modifier.stat()).or_default().apply(modifier);
    }

    /// Accumulated modifiers for a stat, if any synergy touched it
    pub fn get(&self, stat: StatKind) -> Option<&StatValue> {
        self.stats.get(&stat)
    }

    /// Final value of a stat given its base value
    pub fn compute(&self, stat: StatKind, base: f64) -> f64 {
        self.get(stat).map(|v| v.compute(base)).unwrap_or(base)
    }

    /// Iterate over every modified stat
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, &StatValue)> {
        self.stats.iter().map(|(k, v)| (*k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
