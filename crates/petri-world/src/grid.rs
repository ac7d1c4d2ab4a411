//! 2D dish grid.

use crate::organism::Organism;
use petri_core::{Position, WorldConfig};
use serde::{Deserialize, Serialize};

/// A fixed-size rectangular grid of cells, each holding at most one
/// organism. Edges are hard: positions outside the rectangle are simply not
/// part of the dish, and neighbor enumeration skips them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Organism>>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
        }
    }

    pub fn from_config(config: &WorldConfig) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// The organism at `pos`, or `None` for an empty cell
    pub fn get(&self, pos: Position) -> Option<&Organism> {
        debug_assert!(self.contains(pos));
        self.cells[self.index(pos)].as_ref()
    }

    pub fn set(&mut self, pos: Position, cell: Option<Organism>) {
        debug_assert!(self.contains(pos));
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    /// Number of occupied cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterator over occupied cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Organism)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref().map(|organism| (self.index_to_pos(i), organism))
        })
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }
}
