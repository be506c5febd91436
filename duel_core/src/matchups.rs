//! Counter matchups between catalog champions
//!
//! Relations are authored on each champion in two lists: `counters` (who
//! counters it) and `beats` (who it counters). Lookups resolve the targets
//! against the catalog and order them hard, moderate, soft. Within a level
//! the catalog order is kept.

use crate::champion::{ChampionTemplate, CounterLevel, CounterRelation};
use crate::config::{Catalog, ConfigError};

/// A counter relation resolved against the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matchup<'a> {
    pub champion: &'a ChampionTemplate,
    pub level: CounterLevel,
    pub reasons: &'a [String],
}

/// Champions that counter `id`, hardest first
pub fn counters<'a>(catalog: &'a Catalog, id: &str) -> Result<Vec<Matchup<'a>>, ConfigError> {
    let champion = catalog.champion(id)?;
    Ok(resolve(catalog, &champion.counters))
}

/// Champions countered by `id`, hardest first
pub fn countered_by<'a>(catalog: &'a Catalog, id: &str) -> Result<Vec<Matchup<'a>>, ConfigError> {
    let champion = catalog.champion(id)?;
    Ok(resolve(catalog, &champion.beats))
}

fn resolve<'a>(catalog: &'a Catalog, relations: &'a [CounterRelation]) -> Vec<Matchup<'a>> {
    let mut matchups: Vec<Matchup<'a>> = catalog
        .champions()
        .iter()
        .filter_map(|other| {
            relations
                .iter()
                .find(|relation| relation.target == other.id)
                .map(|relation| Matchup {
                    champion: other,
                    level: relation.level,
                    reasons: &relation.reasons,
                })
        })
        .collect();

    // Stable, so ties keep catalog order
    matchups.sort_by_key(|m| m.level);
    matchups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::testing::bruiser;
    use crate::config::default_catalog;

    fn ids<'a>(matchups: &[Matchup<'a>]) -> Vec<&'a str> {
        matchups.iter().map(|m| m.champion.id.as_str()).collect()
    }

    fn relation(target: &str, level: CounterLevel) -> CounterRelation {
        CounterRelation {
            target: target.to_string(),
            level,
            reasons: vec![format!("{target} wins trades")],
        }
    }

    #[test]
    fn test_counters_hardest_first() {
        let catalog = default_catalog().unwrap();
        let yasuo = counters(&catalog, "yasuo").unwrap();

        assert_eq!(ids(&yasuo), vec!["fiora", "jax", "darius"]);
        let levels: Vec<_> = yasuo.iter().map(|m| m.level).collect();
        assert_eq!(
            levels,
            vec![CounterLevel::Hard, CounterLevel::Moderate, CounterLevel::Moderate]
        );
        assert_eq!(yasuo[0].reasons.len(), 3);

        // Authored darius first, but fiora is the hard counter
        assert_eq!(ids(&counters(&catalog, "jax").unwrap()), vec!["fiora", "darius"]);
    }

    #[test]
    fn test_countered_by() {
        let catalog = default_catalog().unwrap();

        let darius = countered_by(&catalog, "darius").unwrap();
        assert_eq!(ids(&darius), vec!["fiora", "yasuo"]);
        assert_eq!(darius[0].level, CounterLevel::Hard);

        let fiora = countered_by(&catalog, "fiora").unwrap();
        assert_eq!(ids(&fiora), vec!["yasuo"]);
        assert_eq!(fiora[0].level, CounterLevel::Soft);
    }

    #[test]
    fn test_champion_without_relations() {
        let catalog = default_catalog().unwrap();
        assert!(counters(&catalog, "darius").unwrap().is_empty());
        assert!(countered_by(&catalog, "zed").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_champion() {
        let catalog = default_catalog().unwrap();
        assert!(matches!(
            counters(&catalog, "teemo"),
            Err(ConfigError::UnknownChampion(id)) if id == "teemo"
        ));
        assert!(countered_by(&catalog, "teemo").is_err());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let mut target = bruiser("target");
        target.counters = vec![
            relation("c", CounterLevel::Soft),
            relation("b", CounterLevel::Moderate),
            relation("a", CounterLevel::Moderate),
            relation("d", CounterLevel::Hard),
        ];
        let champions = vec![target, bruiser("a"), bruiser("b"), bruiser("c"), bruiser("d")];
        let catalog = Catalog::new(champions, vec![]).unwrap();

        let resolved = counters(&catalog, "target").unwrap();
        assert_eq!(ids(&resolved), vec!["d", "a", "b", "c"]);
        assert_eq!(resolved[0].reasons, ["d wins trades".to_string()]);
    }
}
