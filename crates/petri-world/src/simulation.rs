//! Generation stepper and simulation driver.

use crate::energy::energy_delta;
use crate::grid::Grid;
use crate::intent::IntentBuffer;
use crate::mitosis;
use crate::organism::Organism;
use crate::temperature::TemperatureField;
use petri_core::{Position, Result, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

/// Advance one generation: read `current`, leave the result in `next`.
///
/// Sweep 1 walks every cell in row-major order and records intents without
/// touching either grid: occupied cells get an energy delta, empty cells
/// run the mitosis resolver. Mitosis commitments are written to the intent
/// buffer immediately, so cells scanned later in the same sweep see them;
/// everything else a cell observes is previous-generation state.
///
/// Sweep 2 consolidates the intents into `next`, cell by cell: a recorded
/// source spawns a child here, a committed cell keeps its parent at half
/// energy, and everyone else applies their energy delta — dropping to zero
/// or below means the cell is left empty.
///
/// The caller owns the buffer lifecycle: swap the grid roles and reset
/// `intents` after each call.
pub fn advance_generation(
    current: &Grid,
    next: &mut Grid,
    intents: &mut IntentBuffer,
    field: &TemperatureField,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) {
    // Sweep 1: intent computation.
    for y in 0..current.height() {
        for x in 0..current.width() {
            let pos = Position::new(x, y);
            match current.get(pos) {
                None => {
                    mitosis::resolve(current, intents, pos, &config.mitosis, rng);
                }
                Some(organism) => {
                    intents.get_mut(pos).energy_delta =
                        energy_delta(organism, field, pos, &config.energy);
                }
            }
        }
    }

    // Sweep 2: consolidation.
    for y in 0..current.height() {
        for x in 0..current.width() {
            let pos = Position::new(x, y);
            let intent = intents.get(pos);
            let cell = if let Some(source) = &intent.source {
                Some(source.child(&config.mitosis, rng))
            } else if intent.committed {
                current.get(pos).map(Organism::split)
            } else {
                current.get(pos).and_then(|organism| {
                    let energy = organism.energy + intent.energy_delta;
                    (energy > 0).then(|| organism.survive(energy))
                })
            };
            next.set(pos, cell);
        }
    }
}

/// Owns the grid buffers, intent arena, temperature field, and RNG, and
/// drives generations through them.
pub struct Simulation {
    current: Grid,
    next: Grid,
    intents: IntentBuffer,
    field: TemperatureField,
    config: SimConfig,
    rng: ChaCha8Rng,
    generation: u64,
}

impl Simulation {
    /// Build a dish with the configured seed organism at its center
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;

        let mut current = Grid::from_config(&config.world);
        let seed = &config.seed_organism;
        let center = current.center();
        current.set(center, Some(Organism::new(seed.ideal_temp, seed.energy)));

        Ok(Self {
            next: Grid::from_config(&config.world),
            intents: IntentBuffer::new(config.world.width, config.world.height),
            field: TemperatureField::from_config(&config.world),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            current,
            config,
            generation: 0,
        })
    }

    /// One full generation, including buffer swap and intent reset
    pub fn step(&mut self) {
        advance_generation(
            &self.current,
            &mut self.next,
            &mut self.intents,
            &self.field,
            &self.config,
            &mut self.rng,
        );
        std::mem::swap(&mut self.current, &mut self.next);
        self.intents.reset();
        self.generation += 1;
    }

    /// Run for the configured number of generations
    #[instrument(skip(self), fields(generations = self.config.generations))]
    pub fn run(&mut self) {
        info!(
            seed = self.config.seed,
            population = self.current.population(),
            "starting simulation for {} generations",
            self.config.generations
        );

        for _ in 0..self.config.generations {
            self.step();
            if self.generation % 100 == 0 {
                self.emit_population_metrics();
            }
        }

        info!(
            generation = self.generation,
            population = self.current.population(),
            "simulation finished"
        );
    }

    fn emit_population_metrics(&self) {
        let population = self.current.population();
        if population == 0 {
            info!(generation = self.generation, "dish is empty");
            return;
        }

        let mut total_energy = 0i64;
        let mut total_age = 0u64;
        let mut total_ideal = 0i64;
        let mut max_energy = 0i32;
        for (_, organism) in self.current.iter() {
            total_energy += organism.energy as i64;
            total_age += organism.age as u64;
            total_ideal += organism.genome.ideal_temp as i64;
            max_energy = max_energy.max(organism.energy);
        }

        info!(
            generation = self.generation,
            population,
            avg_energy = total_energy / population as i64,
            max_energy,
            avg_age = total_age / population as u64,
            avg_ideal_temp = total_ideal / population as i64,
            "population metrics"
        );
    }

    /// The current (most recently consolidated) grid
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
