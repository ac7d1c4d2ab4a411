//! Petri dish simulation engine.
//!
//! This crate implements the double-buffered grid world where organisms
//! metabolize against a radial temperature field, reproduce by mitosis into
//! adjacent empty cells, and die when their energy runs out.

pub mod energy;
pub mod grid;
pub mod intent;
pub mod mitosis;
pub mod organism;
pub mod simulation;
pub mod temperature;

pub use grid::Grid;
pub use intent::IntentBuffer;
pub use organism::Organism;
pub use simulation::{advance_generation, Simulation};
pub use temperature::TemperatureField;
