//! StatValue - Base plus flat additions, then sequential multipliers

use serde::{Deserialize, Serialize};

/// Represents a stat built from a base, flat bonuses and multipliers
///
/// Final value is calculated as:
/// `(base + flat) × Π(1 + more)`
///
/// Multipliers are applied one at a time in insertion order, so a stat with
/// a single growth multiplier computes exactly `base × (1 + growth)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Base value (from the champion template)
    pub base: f64,
    /// Sum of all flat additions
    pub flat: f64,
    /// List of multipliers (as decimal, 0.30 = ×1.30)
    pub more: Vec<f64>,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            flat: 0.0,
            more: Vec::new(),
        }
    }

    /// Calculate final value: (base + flat) × Π(1 + more)
    pub fn compute(&self) -> f64 {
        self.more
            .iter()
            .fold(self.base + self.flat, |value, more| value * (1.0 + more))
    }

    /// Add a flat bonus
    pub fn add_flat(&mut self, value: f64) {
        self.flat += value;
    }

    /// Add a multiplier (as decimal, e.g., 0.40 for ×1.40)
    pub fn add_more(&mut self, value: f64) {
        self.more.push(value);
    }

    /// Reset to just the base value
    pub fn reset_to_base(&mut self) {
        self.flat = 0.0;
        self.more.clear();
    }
}
