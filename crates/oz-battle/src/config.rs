//! Battle configuration derived from the world and player stats.

use oz_core::{RibbonMode, UpgradeLevels, World};

/// Which attack pattern the sentinel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPattern {
    /// Spiral volleys plus a periodic charge-and-blast (Virellion).
    Spiral,
    /// Projectiles launched toward the player's position (everywhere else).
    Homing,
}

/// Configuration for one boss battle.
#[derive(Debug, Clone)]
pub struct BattleConfig {
    /// Effective shield level: armor integrity plus the Shield-stance bonus.
    pub shield_level: u32,
    /// Proximity damage multiplier (1.5 in Blade stance).
    pub damage_bonus: f64,
    /// The sentinel's attack pattern.
    pub pattern: AttackPattern,
    /// Whether the resonance combo meter is active for this world.
    pub resonance_enabled: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            shield_level: 1,
            damage_bonus: 1.0,
            pattern: AttackPattern::Homing,
            resonance_enabled: false,
        }
    }
}

impl BattleConfig {
    /// Build the configuration for fighting the given world's sentinel with
    /// the given player loadout.
    pub fn for_world(world: &World, upgrades: &UpgradeLevels, mode: RibbonMode) -> Self {
        let resonant = world.id == "virellion";
        let shield_bonus = if mode == RibbonMode::Shield { 2 } else { 0 };
        Self {
            shield_level: upgrades.armor_integrity + shield_bonus,
            damage_bonus: if mode == RibbonMode::Blade { 1.5 } else { 1.0 },
            pattern: if resonant {
                AttackPattern::Spiral
            } else {
                AttackPattern::Homing
            },
            resonance_enabled: resonant,
        }
    }

    /// Set the effective shield level.
    pub fn with_shield_level(mut self, level: u32) -> Self {
        self.shield_level = level;
        self
    }

    /// Set the proximity damage multiplier.
    pub fn with_damage_bonus(mut self, bonus: f64) -> Self {
        self.damage_bonus = bonus;
        self
    }

    /// Set the attack pattern.
    pub fn with_pattern(mut self, pattern: AttackPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Enable or disable the resonance meter.
    pub fn with_resonance(mut self, enabled: bool) -> Self {
        self.resonance_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oz_core::Catalog;

    #[test]
    fn virellion_fights_with_spiral_and_resonance() {
        let catalog = Catalog::standard();
        let world = catalog.world("virellion").unwrap();
        let cfg = BattleConfig::for_world(world, &UpgradeLevels::default(), RibbonMode::Analysis);
        assert_eq!(cfg.pattern, AttackPattern::Spiral);
        assert!(cfg.resonance_enabled);
    }

    #[test]
    fn other_worlds_fight_with_homing() {
        let catalog = Catalog::standard();
        let world = catalog.world("iridia").unwrap();
        let cfg = BattleConfig::for_world(world, &UpgradeLevels::default(), RibbonMode::Analysis);
        assert_eq!(cfg.pattern, AttackPattern::Homing);
        assert!(!cfg.resonance_enabled);
    }

    #[test]
    fn shield_stance_adds_two_levels() {
        let catalog = Catalog::standard();
        let world = catalog.world("iridia").unwrap();
        let upgrades = UpgradeLevels {
            armor_integrity: 3,
            ..UpgradeLevels::default()
        };
        let cfg = BattleConfig::for_world(world, &upgrades, RibbonMode::Shield);
        assert_eq!(cfg.shield_level, 5);
        assert_eq!(cfg.damage_bonus, 1.0);
    }

    #[test]
    fn blade_stance_boosts_damage() {
        let catalog = Catalog::standard();
        let world = catalog.world("iridia").unwrap();
        let cfg = BattleConfig::for_world(world, &UpgradeLevels::default(), RibbonMode::Blade);
        assert_eq!(cfg.shield_level, 1);
        assert_eq!(cfg.damage_bonus, 1.5);
    }

    #[test]
    fn builder_chain() {
        let cfg = BattleConfig::default()
            .with_shield_level(5)
            .with_damage_bonus(1.5)
            .with_pattern(AttackPattern::Spiral)
            .with_resonance(true);
        assert_eq!(cfg.shield_level, 5);
        assert_eq!(cfg.damage_bonus, 1.5);
        assert_eq!(cfg.pattern, AttackPattern::Spiral);
        assert!(cfg.resonance_enabled);
    }
}
