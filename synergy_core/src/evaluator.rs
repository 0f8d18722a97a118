//! ActivationEvaluator - Matches a synergy's requirements against an inventory
//!
//! Evaluation runs in order and stops at the first failed check:
//! 1. Quota must be positive
//! 2. Every mandatory item owned (one may be forgiven by a wildcard token)
//! 3. Distinct owned pool items (+1 for a granted substitution) reach the quota
//! 4. Optional distribution check: at least one tool and one auxiliary item,
//!    counting a mandatory item the wildcard stands in for
//! 5. Optional equip gate: every matched tool wielded

use crate::inventory::InventorySnapshot;
use crate::synergy::SynergyDefinition;
use crate::types::{ItemCategory, ItemId, ParticipantId};
use serde::Serialize;

/// Ternary activation state of a synergy for one participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Requirements not met
    Inactive,
    /// Requirements met, but the equip gate holds the synergy back
    SatisfiedInactive,
    /// Requirements met and effects apply
    Active,
}

impl Activation {
    pub fn is_satisfied(&self) -> bool {
        !matches!(self, Activation::Inactive)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Activation::Active)
    }
}

/// Where the single allowed wildcard substitution was spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Substitution {
    /// Stands in for a missing mandatory item
    MandatoryItem(ItemId),
    /// Fills an otherwise empty quota slot
    FillerSlot,
}

/// First requirement that failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unmet {
    /// Quota of zero or less is invalid content
    InvalidQuota(i32),
    /// Mandatory items not owned and not forgiven
    MissingMandatory(Vec<ItemId>),
    /// Not enough distinct qualifying items
    QuotaShort { counted: usize, required: i32 },
    /// Distribution check failed for this category
    MissingCategory(ItemCategory),
    /// Owned tools that must be wielded but are not
    ToolsNotEquipped(Vec<ItemId>),
}

/// Full outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub activation: Activation,
    /// Owned tool items drawn from the synergy's pools
    pub matched_tools: Vec<ItemId>,
    /// Owned auxiliary items drawn from the synergy's pools
    pub matched_aux: Vec<ItemId>,
    pub substitution: Option<Substitution>,
    /// Items credited toward the quota
    pub counted: usize,
    pub unmet: Option<Unmet>,
}

impl MatchReport {
    fn fail(mut self, unmet: Unmet) -> Self {
        self.activation = Activation::Inactive;
        self.unmet = Some(unmet);
        self
    }
}

/// Evaluate a synergy for one participant
pub fn evaluate(
    definition: &SynergyDefinition,
    snapshot: &dyn InventorySnapshot,
    participant: ParticipantId,
) -> Activation {
    explain(definition, snapshot, participant).activation
}

/// Evaluate a synergy and report which requirement decided the outcome
pub fn explain(
    definition: &SynergyDefinition,
    snapshot: &dyn InventorySnapshot,
    participant: ParticipantId,
) -> MatchReport {
    let pools = definition.pools();
    let owns = |id: &&ItemId| snapshot.owns(participant, **id);

    let mut report = MatchReport {
        activation: Activation::Inactive,
        matched_tools: pools
            .mandatory_tools
            .iter()
            .chain(pools.optional_tools.iter())
            .filter(owns)
            .copied()
            .collect(),
        matched_aux: pools
            .mandatory_aux
            .iter()
            .chain(pools.optional_aux.iter())
            .filter(owns)
            .copied()
            .collect(),
        substitution: None,
        counted: 0,
        unmet: None,
    };

    let quota = definition.quota();
    if quota <= 0 {
        return report.fail(Unmet::InvalidQuota(quota));
    }

    let wildcard_ready =
        definition.wildcard_slot_available() && snapshot.owns_wildcard_token(participant);

    let missing: Vec<ItemId> = pools
        .mandatory()
        .filter(|id| !snapshot.owns(participant, *id))
        .collect();
    if !missing.is_empty() {
        if missing.len() == 1 && wildcard_ready {
            report.substitution = Some(Substitution::MandatoryItem(missing[0]));
        } else {
            return report.fail(Unmet::MissingMandatory(missing));
        }
    }

    let owned = report.matched_tools.len() + report.matched_aux.len();
    if report.substitution.is_none() && wildcard_ready && owned < quota as usize {
        report.substitution = Some(Substitution::FillerSlot);
    }
    report.counted = owned + usize::from(report.substitution.is_some());
    if report.counted < quota as usize {
        let counted = report.counted;
        return report.fail(Unmet::QuotaShort {
            counted,
            required: quota,
        });
    }

    // A forgiven mandatory item keeps its category; a filler slot has none
    if definition.require_one_from_each_category() {
        let substituted = match report.substitution {
            Some(Substitution::MandatoryItem(id)) => pools.category_of(id),
            _ => None,
        };
        if report.matched_tools.is_empty() && substituted != Some(ItemCategory::Tool) {
            return report.fail(Unmet::MissingCategory(ItemCategory::Tool));
        }
        if report.matched_aux.is_empty() && substituted != Some(ItemCategory::Auxiliary) {
            return report.fail(Unmet::MissingCategory(ItemCategory::Auxiliary));
        }
    }

    if !definition.active_when_tools_unequipped() {
        let unequipped: Vec<ItemId> = report
            .matched_tools
            .iter()
            .filter(|id| !snapshot.is_equipped(participant, **id))
            .copied()
            .collect();
        if !unequipped.is_empty() {
            report.activation = Activation::SatisfiedInactive;
            report.unmet = Some(Unmet::ToolsNotEquipped(unequipped));
            return report;
        }
    }

    report.activation = Activation::Active;
    report
}
