//! Stat modifiers granted by active synergies

mod stat_value;
mod totals;

pub use stat_value::StatValue;
pub use totals::StatTotals;

use serde::{Deserialize, Serialize};

/// Player stats a synergy can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    MovementSpeed,
    RateOfFire,
    Accuracy,
    Health,
    Coolness,
    Damage,
    ProjectileSpeed,
    AdditionalGunCapacity,
    AdditionalItemCapacity,
    AmmoCapacityMultiplier,
    ReloadSpeed,
    AdditionalShotPiercing,
    KnockbackMultiplier,
    GlobalPriceMultiplier,
    Curse,
    PlayerBulletScale,
    AdditionalClipCapacityMultiplier,
    AdditionalShotBounces,
    AdditionalBlanksPerFloor,
    ShadowBulletChance,
    ThrownGunDamage,
    DodgeRollDamage,
    DamageToBosses,
    EnemyProjectileSpeedMultiplier,
    ExtremeShadowBulletChance,
    ChargeAmountMultiplier,
    RangeMultiplier,
    DodgeRollDistanceMultiplier,
    DodgeRollSpeedMultiplier,
    TarnisherClipCapacityMultiplier,
    MoneyMultiplierFromEnemies,
}

/// How a modifier combines with the stat it targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifyMethod {
    /// Summed into the stat before any multiplier
    Additive,
    /// Multiplied into the stat after all additive modifiers
    Multiplicative,
}

/// A single stat change applied while a synergy is active
///
/// Modifiers are immutable once built; definitions share them by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    stat: StatKind,
    method: ModifyMethod,
    magnitude: f64,
}

impl StatModifier {
    pub fn new(stat: StatKind, method: ModifyMethod, magnitude: f64) -> Self {
        StatModifier {
            stat,
            method,
            magnitude,
        }
    }

    /// Shorthand for an additive modifier
    pub fn additive(stat: StatKind, magnitude: f64) -> Self {
        Self::new(stat, ModifyMethod::Additive, magnitude)
    }

    /// Shorthand for a multiplicative modifier
    pub fn multiplicative(stat: StatKind, magnitude: f64) -> Self {
        Self::new(stat, ModifyMethod::Multiplicative, magnitude)
    }

    pub fn stat(&self) -> StatKind {
        self.stat
    }

    pub fn method(&self) -> ModifyMethod {
        self.method
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}
