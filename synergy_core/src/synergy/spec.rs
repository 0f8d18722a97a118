//! SynergySpec - Registration input for a synergy

use crate::stat::StatModifier;
use crate::synergy::constants::DEFAULT_QUOTA;
use crate::types::ItemRef;
use serde::{Deserialize, Serialize};

/// Everything content supplies when registering a synergy
///
/// Item references are unresolved here; the registry classifies them
/// against the item catalog. Builder methods and TOML share the same
/// defaults: no optional items, active while tools are unequipped,
/// wildcard substitution allowed, quota of 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergySpec {
    /// Display name
    pub name: String,
    /// Items that are always required
    #[serde(default)]
    pub mandatory: Vec<ItemRef>,
    /// Filler items counted toward the quota
    #[serde(default)]
    pub optional: Vec<ItemRef>,
    /// If false, owned tool items must also be wielded
    #[serde(default = "default_true")]
    pub active_when_tools_unequipped: bool,
    /// Stat changes applied while active
    #[serde(default)]
    pub effects: Vec<StatModifier>,
    /// Whether a wildcard token may fill one slot (only when quota > 2)
    #[serde(default = "default_true")]
    pub allow_wildcard: bool,
    /// Number of distinct items required
    #[serde(default = "default_quota")]
    pub quota: i32,
    /// Passed through to presentation; ignored by matching
    #[serde(default)]
    pub suppress_presentation: bool,
    /// Require at least one tool and one auxiliary item
    #[serde(default)]
    pub require_one_from_each_category: bool,
    /// Opaque tags for cross-referencing base-content bonuses
    #[serde(default)]
    pub auxiliary_tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_quota() -> i32 {
    DEFAULT_QUOTA
}

impl SynergySpec {
    /// Create a spec with the given mandatory items and default settings
    pub fn new<I, R>(name: &str, mandatory: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ItemRef>,
    {
        SynergySpec {
            name: name.to_string(),
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: Vec::new(),
            active_when_tools_unequipped: true,
            effects: Vec::new(),
            allow_wildcard: true,
            quota: DEFAULT_QUOTA,
            suppress_presentation: false,
            require_one_from_each_category: false,
            auxiliary_tags: Vec::new(),
        }
    }

    /// Set the filler items
    pub fn with_optional<I, R>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ItemRef>,
    {
        self.optional = optional.into_iter().map(Into::into).collect();
        self
    }

    pub fn active_when_tools_unequipped(mut self, active: bool) -> Self {
        self.active_when_tools_unequipped = active;
        self
    }

    /// Add a stat modifier
    pub fn with_effect(mut self, modifier: StatModifier) -> Self {
        self.effects.push(modifier);
        self
    }

    pub fn allow_wildcard(mut self, allow: bool) -> Self {
        self.allow_wildcard = allow;
        self
    }

    pub fn with_quota(mut self, quota: i32) -> Self {
        self.quota = quota;
        self
    }

    pub fn suppress_presentation(mut self, suppress: bool) -> Self {
        self.suppress_presentation = suppress;
        self
    }

    pub fn require_one_from_each_category(mut self, require: bool) -> Self {
        self.require_one_from_each_category = require;
        self
    }

    pub fn with_auxiliary_tag(mut self, tag: &str) -> Self {
        self.auxiliary_tags.push(tag.to_string());
        self
    }
}
