//! Organism state and reproduction.

use petri_core::MitosisConfig;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Heritable traits, copied to children and mutated only at birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    pub ideal_temp: i32,
}

/// An organism occupying one dish cell.
///
/// An organism stored in a grid always has positive energy; anything that
/// would drop to zero or below is removed during consolidation instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub genome: Genome,
    pub energy: i32,
    pub age: u32,
}

impl Organism {
    pub fn new(ideal_temp: i32, energy: i32) -> Self {
        Self {
            genome: Genome { ideal_temp },
            energy,
            age: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0
    }

    /// Offspring placed into an adjacent empty cell: half the parent's
    /// energy (floored), age zero, and an occasionally mutated ideal
    /// temperature.
    pub fn child(&self, config: &MitosisConfig, rng: &mut ChaCha8Rng) -> Organism {
        let mut child = self.clone();
        child.energy /= 2;
        child.age = 0;
        if rng.gen::<f64>() < config.mutation_chance {
            child.genome.ideal_temp +=
                rng.gen_range(-config.mutation_span..=config.mutation_span);
        }
        child
    }

    /// The parent's own state after donating a child: half energy, one
    /// generation older, genome unchanged
    pub fn split(&self) -> Organism {
        let mut parent = self.clone();
        parent.energy /= 2;
        parent.age += 1;
        parent
    }

    /// Ordinary survival into the next generation at the given energy
    pub fn survive(&self, energy: i32) -> Organism {
        let mut next = self.clone();
        next.energy = energy;
        next.age += 1;
        next
    }
}
