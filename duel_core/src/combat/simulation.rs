//! Fight simulation - a scripted burst opening followed by a sustained trade
//!
//! The duel runs as a small state machine:
//! 1. Setup derives effective stats, sustained DPS and combo damage for both sides
//! 2. Burst applies both opening combos at once and jumps the clock past the opening
//! 3. Sustained trades DPS in fixed ticks until someone drops or time runs out
//! 4. Resolved reads the outcome off the remaining HP pools

use super::factors::{key_factors, FactorInputs};
use super::odds::{estimate_win_rate, DuelRatios};
use super::result::{DamageBreakdown, FightResult, Winner};
use super::settings::CombatSettings;
use crate::champion::ChampionTemplate;
use crate::config::CombatConstants;
use crate::damage::{compute_burst_damage, compute_sustained_dps};
use crate::item::ItemModifier;
use crate::stat_block::{compute_effective_stats, EffectiveStats};
use crate::types::Side;
use tracing::{debug, trace};

/// Where a duel currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightPhase {
    Setup,
    Burst,
    Sustained,
    Resolved,
}

/// One side of the duel
#[derive(Debug, Clone)]
struct Duelist<'a> {
    champion: &'a ChampionTemplate,
    stats: EffectiveStats,
    hp: f64,
    /// Sustained DPS against the opponent
    dps: f64,
    /// Full combo damage against the opponent
    burst: f64,
    /// Combo damage after hit rate, tier, first strike and ignite
    opening_damage: f64,
}

impl<'a> Duelist<'a> {
    fn new(champion: &'a ChampionTemplate, items: &[ItemModifier], level: u32) -> Self {
        let stats = compute_effective_stats(champion, items, level);
        Duelist {
            champion,
            stats,
            hp: stats.hp,
            dps: 0.0,
            burst: 0.0,
            opening_damage: 0.0,
        }
    }

    fn max_hp(&self) -> f64 {
        self.stats.hp
    }

    fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    fn remaining_hp_percent(&self) -> f64 {
        (self.hp / self.max_hp() * 100.0).max(0.0)
    }

    /// Lifesteal healing owed for one tick, before damping
    fn tick_heal(&self, tick: f64) -> f64 {
        self.dps * (self.stats.lifesteal / 100.0) * tick
    }
}

/// A single duel between side A and side B
///
/// Nothing outlives the duel; every simulation builds a fresh one.
#[derive(Debug, Clone)]
pub struct Duel<'a> {
    settings: &'a CombatSettings,
    constants: &'a CombatConstants,
    a: Duelist<'a>,
    b: Duelist<'a>,
    clock: f64,
    phase: FightPhase,
}

impl<'a> Duel<'a> {
    pub fn new(
        champion_a: &'a ChampionTemplate,
        items_a: &[ItemModifier],
        champion_b: &'a ChampionTemplate,
        items_b: &[ItemModifier],
        settings: &'a CombatSettings,
        constants: &'a CombatConstants,
    ) -> Self {
        Duel {
            settings,
            constants,
            a: Duelist::new(champion_a, items_a, settings.level),
            b: Duelist::new(champion_b, items_b, settings.level),
            clock: 0.0,
            phase: FightPhase::Setup,
        }
    }

    pub fn phase(&self) -> FightPhase {
        self.phase
    }

    /// Simulated seconds elapsed
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Current HP of one side
    pub fn hp(&self, side: Side) -> f64 {
        self.duelist(side).hp
    }

    fn duelist(&self, side: Side) -> &Duelist<'a> {
        match side {
            Side::SideA => &self.a,
            Side::SideB => &self.b,
        }
    }

    /// Advance by one step of the current phase
    pub fn step(&mut self) {
        match self.phase {
            FightPhase::Setup => self.setup(),
            FightPhase::Burst => self.burst(),
            FightPhase::Sustained => self.sustained_tick(),
            FightPhase::Resolved => {}
        }
    }

    /// Run to completion and read off the result
    pub fn run(mut self) -> FightResult {
        while self.phase != FightPhase::Resolved {
            self.step();
        }
        self.result()
    }

    fn duelist_mut(&mut self, side: Side) -> &mut Duelist<'a> {
        match side {
            Side::SideA => &mut self.a,
            Side::SideB => &mut self.b,
        }
    }

    fn setup(&mut self) {
        let level = self.settings.level;

        for side in [Side::SideA, Side::SideB] {
            let target = self.duelist(side.opponent()).stats;
            let attacker = self.duelist(side);
            let dps = compute_sustained_dps(&attacker.stats, target.armor);
            let burst = compute_burst_damage(
                attacker.champion,
                &attacker.stats,
                level,
                target.armor,
                target.magic_resist,
            );

            let duelist = self.duelist_mut(side);
            duelist.dps = dps;
            duelist.burst = burst;
        }

        debug!(
            champion_a = %self.a.champion.id,
            champion_b = %self.b.champion.id,
            dps_a = self.a.dps,
            dps_b = self.b.dps,
            burst_a = self.a.burst,
            burst_b = self.b.burst,
            "duel set up"
        );
        self.phase = FightPhase::Burst;
    }

    fn opening_damage(&self, side: Side) -> f64 {
        let opening = &self.constants.opening;
        let hit_rate = self.settings.skill_hit_rate / 100.0;
        let tier = self.settings.operation_tier.multiplier();

        let mut damage = self.duelist(side).burst * hit_rate * tier;
        if side == self.settings.first_strike {
            damage *= opening.first_strike_multiplier;
            if self.settings.ignite {
                damage += opening.ignite_damage(self.settings.level);
            }
        }
        damage
    }

    fn burst(&mut self) {
        self.a.opening_damage = self.opening_damage(Side::SideA);
        self.b.opening_damage = self.opening_damage(Side::SideB);

        // Both combos land at the same time
        self.a.hp -= self.b.opening_damage;
        self.b.hp -= self.a.opening_damage;
        self.clock = self.constants.timeline.burst_duration;

        debug!(
            opening_a = self.a.opening_damage,
            opening_b = self.b.opening_damage,
            hp_a = self.a.hp,
            hp_b = self.b.hp,
            "burst phase done"
        );
        self.phase = FightPhase::Sustained;
    }

    fn sustained_tick(&mut self) {
        let timeline = &self.constants.timeline;
        let tick = timeline.tick;

        let both_standing = self.a.is_alive() && self.b.is_alive();
        if !both_standing || self.clock >= timeline.duration || !(tick > 0.0) {
            debug!(clock = self.clock, hp_a = self.a.hp, hp_b = self.b.hp, "duel resolved");
            self.phase = FightPhase::Resolved;
            return;
        }

        let heal_a = self.a.tick_heal(tick);
        let heal_b = self.b.tick_heal(tick);

        self.b.hp -= self.a.dps * tick;
        self.a.hp -= self.b.dps * tick;

        self.a.hp += heal_a * timeline.lifesteal_damping;
        self.b.hp += heal_b * timeline.lifesteal_damping;

        self.clock += tick;
        trace!(clock = self.clock, hp_a = self.a.hp, hp_b = self.b.hp, "tick");
    }

    /// Side still standing, or the one with more HP; exact ties go to side A
    fn winner(&self) -> Side {
        match (self.a.is_alive(), self.b.is_alive()) {
            (true, false) => Side::SideA,
            (false, true) => Side::SideB,
            _ if self.b.hp > self.a.hp => Side::SideB,
            _ => Side::SideA,
        }
    }

    fn result(&self) -> FightResult {
        let timeline = &self.constants.timeline;
        let winner = self.winner();

        let ratios = DuelRatios {
            damage: self.a.opening_damage / self.b.opening_damage,
            dps: self.a.dps / self.b.dps,
            hp: self.a.max_hp() / self.b.max_hp(),
        };
        let win_rate = estimate_win_rate(winner, &ratios, &self.constants.odds);

        let factors = key_factors(
            &FactorInputs {
                champion_a: &self.a.champion.id,
                champion_b: &self.b.champion.id,
                winner,
                damage_ratio: ratios.damage,
                lifesteal_a: self.a.stats.lifesteal,
                lifesteal_b: self.b.stats.lifesteal,
            },
            self.settings,
            &self.constants.factors,
        );

        let sustained_time = self.clock - timeline.burst_duration;
        let damage_breakdown = DamageBreakdown {
            side_a: self.a.opening_damage + self.a.dps * sustained_time,
            side_b: self.b.opening_damage + self.b.dps * sustained_time,
        };

        FightResult {
            winner: Winner::from(winner),
            win_rate,
            kill_time: self.clock.clamp(0.0, timeline.duration),
            remaining_hp_percent: self.duelist(winner).remaining_hp_percent(),
            key_factors: factors,
            damage_breakdown,
        }
    }
}

/// Simulate a duel with the default combat constants
pub fn simulate_fight(
    champion_a: &ChampionTemplate,
    items_a: &[ItemModifier],
    champion_b: &ChampionTemplate,
    items_b: &[ItemModifier],
    settings: &CombatSettings,
) -> FightResult {
    let constants = CombatConstants::default();
    simulate_fight_with(champion_a, items_a, champion_b, items_b, settings, &constants)
}

/// Simulate a duel with tuned combat constants
pub fn simulate_fight_with(
    champion_a: &ChampionTemplate,
    items_a: &[ItemModifier],
    champion_b: &ChampionTemplate,
    items_b: &[ItemModifier],
    settings: &CombatSettings,
    constants: &CombatConstants,
) -> FightResult {
    Duel::new(champion_a, items_a, champion_b, items_b, settings, constants).run()
}
