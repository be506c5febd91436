//! FightResult - Outcome of a simulated duel

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Who won the duel
///
/// `Draw` is part of the schema but the simulator always resolves ties to a
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    SideA,
    SideB,
    Draw,
}

impl Winner {
    /// The winning side, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Winner::SideA => Some(Side::SideA),
            Winner::SideB => Some(Side::SideB),
            Winner::Draw => None,
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::SideA => Winner::SideA,
            Side::SideB => Winner::SideB,
        }
    }
}

/// Total damage dealt by each side over the fight
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub side_a: f64,
    pub side_b: f64,
}

impl DamageBreakdown {
    /// Damage dealt by one side
    pub fn of(&self, side: Side) -> f64 {
        match side {
            Side::SideA => self.side_a,
            Side::SideB => self.side_b,
        }
    }
}

/// Result of one duel simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    pub winner: Winner,
    /// Side A's estimated win probability in percent, within [15, 85]
    pub win_rate: f64,
    /// Simulated seconds until the fight ended
    pub kill_time: f64,
    /// Winner's HP left as a percent of their max HP
    pub remaining_hp_percent: f64,
    /// Advisory notes explaining the outcome
    pub key_factors: Vec<String>,
    pub damage_breakdown: DamageBreakdown,
}

impl FightResult {
    /// Get a summary string
    pub fn summary(&self) -> String {
        let winner = match self.winner {
            Winner::SideA => "Side A wins",
            Winner::SideB => "Side B wins",
            Winner::Draw => "Draw",
        };

        let mut parts = vec![
            winner.to_string(),
            format!("{:.1}% win rate", self.win_rate),
            format!("{:.1}s", self.kill_time),
            format!("{:.0}% HP left", self.remaining_hp_percent),
        ];
        if !self.key_factors.is_empty() {
            parts.push(self.key_factors.join("; "));
        }
        parts.join(", ")
    }
}
