//! Damage estimates - sustained DPS and burst combos

mod burst;
mod sustained;

pub use burst::{
    burst_breakdown, compute_burst_damage, BurstBreakdown, COMBO_BASIC_ATTACKS,
    ULTIMATE_UNLOCK_LEVEL,
};
pub use sustained::compute_sustained_dps;
