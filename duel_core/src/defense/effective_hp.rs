//! Effective HP - one survivability number per stat line

/// Blend physical and magical effective HP into a single scalar
///
/// `(hp × (1 + armor/100) + hp × (1 + magic_resist/100)) / 2`
///
/// This compares builds; it is not how mixed damage is actually mitigated.
pub fn compute_effective_hp(hp: f64, armor: f64, magic_resist: f64) -> f64 {
    let physical = hp * (1.0 + armor / 100.0);
    let magical = hp * (1.0 + magic_resist / 100.0);
    (physical + magical) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_resists() {
        assert_eq!(compute_effective_hp(1000.0, 0.0, 0.0), 1000.0);
    }

    #[test]
    fn test_armor_only() {
        assert_eq!(compute_effective_hp(1000.0, 100.0, 0.0), 1500.0);
    }

    #[test]
    fn test_magic_resist_only() {
        assert_eq!(compute_effective_hp(1000.0, 0.0, 100.0), 1500.0);
    }

    #[test]
    fn test_both_resists() {
        assert_eq!(compute_effective_hp(1000.0, 100.0, 100.0), 2000.0);
    }

    #[test]
    fn test_more_hp_more_ehp() {
        let tanky = compute_effective_hp(2000.0, 50.0, 50.0);
        assert!(tanky > compute_effective_hp(1000.0, 50.0, 50.0));
    }
}
