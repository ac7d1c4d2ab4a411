//! Energy model: temperature fitness and senescence.

use crate::organism::Organism;
use crate::temperature::TemperatureField;
use petri_core::{EnergyConfig, Position};

/// Energy delta for a living organism this generation.
///
/// Organisms past `max_age` always pay the senescence penalty, whatever the
/// temperature. Everyone else gains `base_gain` minus the distance between
/// their ideal temperature and the local ambient one; a delta that computes
/// to exactly zero is coerced to -1 so a perfectly adapted cell still burns
/// energy rather than stagnating forever.
pub fn energy_delta(
    organism: &Organism,
    field: &TemperatureField,
    pos: Position,
    config: &EnergyConfig,
) -> i32 {
    if organism.age >= config.max_age {
        return config.senescence_penalty;
    }

    let temp_diff = (organism.genome.ideal_temp - field.at(pos)).abs();
    let delta = config.base_gain - temp_diff;
    if delta == 0 {
        -1
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::WorldConfig;

    fn setup() -> (TemperatureField, EnergyConfig) {
        (
            TemperatureField::from_config(&WorldConfig::default()),
            EnergyConfig::default(),
        )
    }

    #[test]
    fn test_perfect_match_gains_base() {
        let (field, config) = setup();
        // Center temperature is -10; an ideal of -10 matches exactly.
        let organism = Organism::new(-10, 10);
        assert_eq!(
            energy_delta(&organism, &field, Position::new(50, 50), &config),
            2
        );
    }

    #[test]
    fn test_mismatch_drains_linearly() {
        let (field, config) = setup();
        let organism = Organism::new(0, 10);
        // tempDiff = |0 - (-10)| = 10, delta = 2 - 10.
        assert_eq!(
            energy_delta(&organism, &field, Position::new(50, 50), &config),
            -8
        );
    }

    #[test]
    fn test_zero_delta_is_coerced_to_minus_one() {
        let (field, config) = setup();
        // tempDiff of exactly base_gain would compute to zero.
        let organism = Organism::new(-8, 10);
        assert_eq!(
            energy_delta(&organism, &field, Position::new(50, 50), &config),
            -1
        );
    }

    #[test]
    fn test_senescence_overrides_temperature_fit() {
        let (field, config) = setup();
        let mut organism = Organism::new(-10, 10);
        organism.age = config.max_age;
        assert_eq!(
            energy_delta(&organism, &field, Position::new(50, 50), &config),
            config.senescence_penalty
        );

        // Well past max age, and badly adapted: still the same penalty.
        organism.age = config.max_age + 40;
        organism.genome.ideal_temp = 100;
        assert_eq!(
            energy_delta(&organism, &field, Position::new(50, 50), &config),
            config.senescence_penalty
        );
    }

    #[test]
    fn test_one_below_max_age_still_uses_temperature() {
        let (field, config) = setup();
        let mut organism = Organism::new(-10, 10);
        organism.age = config.max_age - 1;
        assert_eq!(
            energy_delta(&organism, &field, Position::new(50, 50), &config),
            2
        );
    }
}
