//! Mitosis resolution for empty cells.

use crate::grid::Grid;
use crate::intent::IntentBuffer;
use petri_core::{MitosisConfig, Position};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Resolve mitosis for the empty cell at `pos`.
///
/// Scans the 3x3 neighborhood (out-of-bounds neighbors skipped, the center
/// is empty and excluded by the occupancy test) for organisms energetic
/// enough to divide whose intent entry is not already committed this
/// generation. Candidates are collected and one is chosen with a single
/// uniform draw, so selection is bias-free regardless of scan order.
///
/// On selection the commitment is recorded immediately: the chosen
/// neighbor's entry is marked committed and a copy of its organism becomes
/// this cell's child source. Later cells in the same sweep therefore cannot
/// claim the same parent. Returns whether a candidate was found.
pub fn resolve(
    grid: &Grid,
    intents: &mut IntentBuffer,
    pos: Position,
    config: &MitosisConfig,
    rng: &mut ChaCha8Rng,
) -> bool {
    let mut candidates = Vec::with_capacity(8);
    for dy in -1..=1 {
        for dx in -1..=1 {
            let neighbor = pos.add(dx, dy);
            if !grid.contains(neighbor) {
                continue;
            }
            let Some(organism) = grid.get(neighbor) else {
                continue;
            };
            if organism.energy >= config.min_energy && !intents.get(neighbor).committed {
                candidates.push(neighbor);
            }
        }
    }

    if candidates.is_empty() {
        return false;
    }

    let chosen = candidates[rng.gen_range(0..candidates.len())];
    let source = grid.get(chosen).cloned();
    intents.get_mut(chosen).committed = true;
    intents.get_mut(pos).source = source;
    true
}
