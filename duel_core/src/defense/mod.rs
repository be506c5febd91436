//! Defense system - Armor, Magic Resist, Effective HP

mod effective_hp;
mod mitigation;

pub use effective_hp::compute_effective_hp;
pub use mitigation::{damage_reduction, effective_armor, resist_needed_for_reduction, Mitigation};

/// Defense calculation constants
pub mod constants {
    /// Mitigation curve constant: reduction = resist / (CONSTANT + resist)
    pub const MITIGATION_CONSTANT: f64 = 100.0;
}
