//! StatValue - The two-stage modifier container (Additive → Multiplicative)

use crate::stat::{ModifyMethod, StatModifier};
use serde::{Deserialize, Serialize};

/// Accumulated synergy modifiers for a single stat
///
/// Final value is calculated as:
/// `(base + additive) × Π(multipliers)`
///
/// - `additive`: Sum of all additive magnitudes
/// - `multipliers`: Multiplicative magnitudes in registration order
///   (each multiplies the result directly, e.g. 0.5 halves it)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Sum of all additive modifiers
    pub additive: f64,
    /// Multiplicative modifiers in the order they were applied
    pub multipliers: Vec<f64>,
}

impl StatValue {
    /// Create an empty StatValue (no change to any base)
    pub fn new() -> Self {
        StatValue {
            additive: 0.0,
            multipliers: Vec::new(),
        }
    }

    /// Fold a single modifier into this value
    pub fn apply(&mut self, modifier: &StatModifier) {
        match modifier.method() {
            ModifyMethod::Additive => self.add(modifier.magnitude()),
            ModifyMethod::Multiplicative => self.multiply(modifier.magnitude()),
        }
    }

    /// Add an additive bonus
    pub fn add(&mut self, value: f64) {
        self.additive += value;
    }

    /// Add a multiplier
    pub fn multiply(&mut self, value: f64) {
        self.multipliers.push(value);
    }

    /// Calculate final value: (base + additive) × Π(multipliers)
    pub fn compute(&self, base: f64) -> f64 {
        (base + self.additive) * self.total_multiplier()
    }

    /// Get the product of all multipliers (1.0 when there are none)
    pub fn total_multiplier(&self) -> f64 {
        self.multipliers.iter().product()
    }

    /// Whether no modifier has been applied
    pub fn is_neutral(&self) -> bool {
        self.additive == 0.0 && self.multipliers.is_empty()
    }

    /// Drop every accumulated modifier
    pub fn reset(&mut self) {
        self.additive = 0.0;
        self.multipliers.clear();
    }
}
