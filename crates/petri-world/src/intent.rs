//! Per-generation scratch state.

use crate::organism::Organism;
use petri_core::Position;

/// The not-yet-applied outcome of the current generation for one cell.
///
/// At most one of `committed` (this cell donates a child) and `source`
/// (this cell receives a child) is ever set in a generation: `source` is
/// only recorded on empty cells and `committed` only on occupied ones.
#[derive(Debug, Clone, Default)]
pub struct Intent {
    /// Energy delta computed for an occupied cell
    pub energy_delta: i32,
    /// This cell's organism was claimed as a mitosis source
    pub committed: bool,
    /// The organism donating a child into this empty cell
    pub source: Option<Organism>,
}

/// One intent per cell, allocated once at startup and reset between
/// generations rather than reallocated.
#[derive(Debug)]
pub struct IntentBuffer {
    width: i32,
    entries: Vec<Intent>,
}

impl IntentBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            entries: vec![Intent::default(); size],
        }
    }

    pub fn get(&self, pos: Position) -> &Intent {
        &self.entries[(pos.y * self.width + pos.x) as usize]
    }

    pub fn get_mut(&mut self, pos: Position) -> &mut Intent {
        &mut self.entries[(pos.y * self.width + pos.x) as usize]
    }

    /// Iterator over all entries with their positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Intent)> + '_ {
        self.entries.iter().enumerate().map(|(i, entry)| {
            let x = (i as i32) % self.width;
            let y = (i as i32) / self.width;
            (Position::new(x, y), entry)
        })
    }

    /// Return every entry to the empty state, keeping the allocation
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.energy_delta = 0;
            entry.committed = false;
            entry.source = None;
        }
    }
}
