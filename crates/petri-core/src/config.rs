//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dish dimensions and temperature field shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Width of the dish grid
    pub width: i32,
    /// Height of the dish grid
    pub height: i32,
    /// Total span of the temperature scale, centered on zero
    pub temperature_span: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            temperature_span: 20,
        }
    }
}

/// Per-generation energy bookkeeping parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy gained per generation at a perfect temperature match
    pub base_gain: i32,
    /// Age at which senescence overrides temperature fitness
    pub max_age: u32,
    /// Energy delta applied to senescent organisms
    pub senescence_penalty: i32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            base_gain: 2,
            max_age: 50,
            senescence_penalty: -3,
        }
    }
}

/// Reproduction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitosisConfig {
    /// Minimum energy required to qualify as a mitosis source
    pub min_energy: i32,
    /// Probability that a child's ideal temperature mutates (0.0 to 1.0)
    pub mutation_chance: f64,
    /// Maximum magnitude of an ideal-temperature mutation
    pub mutation_span: i32,
}

impl Default for MitosisConfig {
    fn default() -> Self {
        Self {
            min_energy: 50,
            mutation_chance: 0.01,
            mutation_span: 10,
        }
    }
}

/// The single organism seeded at the dish center at generation zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Ideal temperature of the seed organism
    pub ideal_temp: i32,
    /// Starting energy of the seed organism
    pub energy: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            ideal_temp: -10,
            energy: 1,
        }
    }
}

/// Full simulation run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of generations to run
    pub generations: u64,
    /// Random seed for reproducibility
    pub seed: u64,
    /// World configuration
    pub world: WorldConfig,
    /// Energy configuration
    pub energy: EnergyConfig,
    /// Mitosis configuration
    pub mitosis: MitosisConfig,
    /// Seed organism configuration
    pub seed_organism: SeedConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            generations: 1_000,
            seed: 0,
            world: WorldConfig::default(),
            energy: EnergyConfig::default(),
            mitosis: MitosisConfig::default(),
            seed_organism: SeedConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable dish
    pub fn validate(&self) -> Result<()> {
        // The temperature clamp radius is half the minor dimension, so
        // anything under 2x2 would divide by zero.
        if self.world.width < 2 || self.world.height < 2 {
            return Err(Error::Validation(format!(
                "dish dimensions must be at least 2x2, got {}x{}",
                self.world.width, self.world.height
            )));
        }
        if self.world.temperature_span <= 0 {
            return Err(Error::Validation(format!(
                "temperature span must be positive, got {}",
                self.world.temperature_span
            )));
        }
        if !(0.0..=1.0).contains(&self.mitosis.mutation_chance) {
            return Err(Error::Validation(format!(
                "mutation chance must be within [0, 1], got {}",
                self.mitosis.mutation_chance
            )));
        }
        if self.mitosis.mutation_span < 0 {
            return Err(Error::Validation(format!(
                "mutation span must be non-negative, got {}",
                self.mitosis.mutation_span
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let world = WorldConfig::default();
        assert_eq!(world.width, 100);
        assert_eq!(world.height, 100);
        assert_eq!(world.temperature_span, 20);

        let energy = EnergyConfig::default();
        assert_eq!(energy.max_age, 50);
        assert_eq!(energy.senescence_penalty, -3);

        let mitosis = MitosisConfig::default();
        assert_eq!(mitosis.min_energy, 50);
        assert_eq!(mitosis.mutation_chance, 0.01);

        let config = SimConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.world.width, config.world.width);
        assert_eq!(deserialized.mitosis.min_energy, config.mitosis.min_energy);
        assert_eq!(deserialized.seed_organism.ideal_temp, -10);
    }

    #[test]
    fn test_validate_rejects_degenerate_dish() {
        let mut config = SimConfig::default();
        config.world.width = 1;
        assert!(matches!(config.validate(), Err(Error::Validation(_))));

        let mut config = SimConfig::default();
        config.world.temperature_span = 0;
        assert!(matches!(config.validate(), Err(Error::Validation(_))));

        let mut config = SimConfig::default();
        config.mitosis.mutation_chance = 1.5;
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }
}
