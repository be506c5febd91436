//! Core enums shared across the duel engine

use serde::{Deserialize, Serialize};

/// How a hit is mitigated by the defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Reduced by armor (after armor penetration)
    Physical,
    /// Reduced by magic resist
    Magic,
    /// Never reduced
    True,
}

/// One of the two combatants in a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[serde(alias = "a")]
    SideA,
    #[serde(alias = "b")]
    SideB,
}

impl Side {
    /// The other combatant
    pub fn opponent(self) -> Side {
        match self {
            Side::SideA => Side::SideB,
            Side::SideB => Side::SideA,
        }
    }
}

/// Ability slot on a champion's kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySlot {
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    /// All slots in casting order
    pub fn all() -> &'static [AbilitySlot] {
        &[AbilitySlot::Q, AbilitySlot::W, AbilitySlot::E, AbilitySlot::R]
    }

    /// Whether this is the ultimate slot
    pub fn is_ultimate(self) -> bool {
        matches!(self, AbilitySlot::R)
    }
}

/// Stage of the game where a champion is strongest (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrongPhase {
    Early,
    Mid,
    Late,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::SideA.opponent(), Side::SideB);
        assert_eq!(Side::SideB.opponent(), Side::SideA);
    }

    #[test]
    fn test_slot_order() {
        let slots = AbilitySlot::all();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0], AbilitySlot::Q);
        assert!(slots[3].is_ultimate());
        assert!(!slots[0].is_ultimate());
    }

    #[test]
    fn test_damage_type_names() {
        let parsed: DamageType = toml::Value::String("true".into()).try_into().unwrap();
        assert_eq!(parsed, DamageType::True);
    }
}
