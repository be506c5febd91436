//! Champion and item catalogs

use super::ConfigError;
use crate::champion::{ChampionTemplate, CounterRelation};
use crate::item::ItemModifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Container for champion definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionsConfig {
    #[serde(rename = "champions")]
    pub champions: Vec<ChampionTemplate>,
}

/// Container for item definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsConfig {
    #[serde(rename = "items")]
    pub items: Vec<ItemModifier>,
}

/// Validated reference data the engine is fed from
#[derive(Debug, Clone)]
pub struct Catalog {
    champions: Vec<ChampionTemplate>,
    items: Vec<ItemModifier>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed entries
    pub fn new(
        champions: Vec<ChampionTemplate>,
        items: Vec<ItemModifier>,
    ) -> Result<Self, ConfigError> {
        let catalog = Catalog { champions, items };
        catalog.validate()?;
        debug!(
            champions = catalog.champions.len(),
            items = catalog.items.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load catalogs from TOML files
    pub fn load(champions_path: &Path, items_path: &Path) -> Result<Self, ConfigError> {
        let champions: ChampionsConfig = super::load_toml(champions_path)?;
        let items: ItemsConfig = super::load_toml(items_path)?;
        Self::new(champions.champions, items.items)
    }

    /// Load catalogs from TOML strings
    pub fn parse(champions_toml: &str, items_toml: &str) -> Result<Self, ConfigError> {
        let champions: ChampionsConfig = super::parse_toml(champions_toml)?;
        let items: ItemsConfig = super::parse_toml(items_toml)?;
        Self::new(champions.champions, items.items)
    }

    /// All champions in catalog order
    pub fn champions(&self) -> &[ChampionTemplate] {
        &self.champions
    }

    /// All items in catalog order
    pub fn items(&self) -> &[ItemModifier] {
        &self.items
    }

    /// Look up a champion by id
    pub fn champion(&self, id: &str) -> Result<&ChampionTemplate, ConfigError> {
        self.champions
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ConfigError::UnknownChampion(id.to_string()))
    }

    /// Look up an item by id
    pub fn item(&self, id: &str) -> Result<&ItemModifier, ConfigError> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| ConfigError::UnknownItem(id.to_string()))
    }

    /// Resolve a loadout, keeping order and duplicates
    pub fn loadout<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<ItemModifier>, ConfigError> {
        ids.iter()
            .map(|id| self.item(id.as_ref()).cloned())
            .collect()
    }

    /// Check catalog invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut champion_ids = HashSet::new();
        for champion in &self.champions {
            if !champion_ids.insert(champion.id.as_str()) {
                return Err(invalid(format!("duplicate champion id '{}'", champion.id)));
            }
            validate_champion(champion)?;
        }
        for champion in &self.champions {
            validate_relations(champion, &champion.counters, &champion_ids)?;
            validate_relations(champion, &champion.beats, &champion_ids)?;
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(invalid(format!("duplicate item id '{}'", item.id)));
            }
            if item.name.trim().is_empty() {
                return Err(invalid(format!("item '{}' has no name", item.id)));
            }
            if item.cost == 0 {
                return Err(invalid(format!("item '{}' must have a positive cost", item.id)));
            }
            validate_item_stats(item)?;
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError(message)
}

fn validate_champion(champion: &ChampionTemplate) -> Result<(), ConfigError> {
    let id = &champion.id;
    if champion.name.trim().is_empty() || champion.role.trim().is_empty() {
        return Err(invalid(format!("champion '{id}' needs a name and a role")));
    }

    let base = &champion.base_stats;
    let positive = [
        ("hp", base.hp),
        ("attack", base.attack),
        ("armor", base.armor),
        ("magic_resist", base.magic_resist),
        ("attack_speed", base.attack_speed),
        ("move_speed", base.move_speed),
    ];
    for (name, value) in positive {
        if !(value > 0.0) {
            return Err(invalid(format!("champion '{id}' base {name} must be positive")));
        }
    }

    let growth = [
        ("hp_growth", base.hp_growth),
        ("attack_growth", base.attack_growth),
        ("armor_growth", base.armor_growth),
        ("magic_resist_growth", base.magic_resist_growth),
        ("attack_speed_growth", base.attack_speed_growth),
    ];
    for (name, value) in growth {
        if !(value >= 0.0) {
            return Err(invalid(format!("champion '{id}' {name} must not be negative")));
        }
    }

    for (slot, ability) in champion.skills.iter() {
        if ability.name.trim().is_empty() || ability.description.trim().is_empty() {
            return Err(invalid(format!(
                "champion '{id}' ability {slot:?} needs a name and a description"
            )));
        }
        if ability.cooldown < 0.0 {
            return Err(invalid(format!(
                "champion '{id}' ability {slot:?} has a negative cooldown"
            )));
        }
    }

    if champion.power_spikes.is_empty() {
        return Err(invalid(format!("champion '{id}' lists no power spikes")));
    }

    Ok(())
}

fn validate_relations(
    champion: &ChampionTemplate,
    relations: &[CounterRelation],
    champion_ids: &HashSet<&str>,
) -> Result<(), ConfigError> {
    let id = &champion.id;
    let mut targets = HashSet::new();
    for relation in relations {
        let target = relation.target.as_str();
        if target == champion.id {
            return Err(invalid(format!("champion '{id}' cannot counter itself")));
        }
        if !champion_ids.contains(target) {
            return Err(invalid(format!("champion '{id}' names unknown matchup '{target}'")));
        }
        if !targets.insert(target) {
            return Err(invalid(format!("champion '{id}' lists matchup '{target}' twice")));
        }
        if relation.reasons.is_empty() || relation.reasons.iter().any(|r| r.trim().is_empty()) {
            return Err(invalid(format!("champion '{id}' matchup '{target}' needs reasons")));
        }
    }
    Ok(())
}

fn validate_item_stats(item: &ItemModifier) -> Result<(), ConfigError> {
    let entries = item.stats.entries();
    if entries.is_empty() {
        return Err(invalid(format!("item '{}' carries no stats", item.id)));
    }
    for (name, value) in entries {
        if !(value >= 0.0) {
            return Err(invalid(format!("item '{}' {name} must not be negative", item.id)));
        }
    }
    Ok(())
}

/// The built-in champion and item catalogs
pub fn default_catalog() -> Result<Catalog, ConfigError> {
    let champions = include_str!("../../config/champions.toml");
    let items = include_str!("../../config/items.toml");
    Catalog::parse(champions, items)
}
