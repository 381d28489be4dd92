use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Grid, Position};
use crate::snake::Snake;

/// Random draws tried before falling back to the explicit free-cell list.
const MAX_DRAWS: usize = 64;

/// Picks a cell the snake does not occupy, uniformly among the free ones.
/// Returns `None` once the snake covers the whole grid.
pub fn place_food<R: Rng>(rng: &mut R, grid: &Grid, snake: &Snake) -> Option<Position> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    for _ in 0..MAX_DRAWS {
        let candidate = Position::new(rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
        if !snake.occupies(candidate) {
            debug!("food placed at ({}, {})", candidate.x, candidate.y);
            return Some(candidate);
        }
    }

    // Crowded board, most draws would miss
    let free: Vec<Position> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
    let choice = free.choose(rng).copied();
    if let Some(pos) = choice {
        debug!("food placed at ({}, {}) from {} free cells", pos.x, pos.y, free.len());
    }
    choice
}
