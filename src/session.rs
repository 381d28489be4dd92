//! One playthrough: a snake, its food and its score on a fixed grid.

use log::{debug, warn};
use rand::Rng;

use crate::config::GameConfig;
use crate::food::place_food;
use crate::grid::{Grid, Position};
use crate::snake::{CollisionCause, Direction, MoveResult, Snake};

/// What a single tick did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// `old_tail` is `None` and `ate` is set when the snake grew.
    Alive { new_head: Position, old_head: Position, old_tail: Option<Position>, ate: bool },
    Collided(CollisionCause),
    /// The snake ate the last free cell, there is nowhere left for food.
    BoardFilled,
}

#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    score: u32,
}

impl Session {
    /// A one-cell snake in the middle of the grid, heading up.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let grid = config.grid;
        let snake = Snake::new(grid.center(), Direction::Up);
        let food = place_food(rng, &grid, &snake);
        Session { grid, snake, food, score: 0 }
    }

    /// Resumes from an arbitrary position, score starting at zero.
    pub fn with_state(grid: Grid, snake: Snake, food: Option<Position>) -> Self {
        Session { grid, snake, food, score: 0 }
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        let (new_head, old_head, old_tail) = match self.snake.move_step(&self.grid, self.food) {
            MoveResult::Crashed(cause) => return StepOutcome::Collided(cause),
            MoveResult::Moved { new_head, old_head, old_tail } => (new_head, old_head, old_tail),
        };

        let ate = old_tail.is_none();
        if ate {
            self.score += 1;
            debug!("ate food at ({}, {}), score {}", new_head.x, new_head.y, self.score);

            self.food = place_food(rng, &self.grid, &self.snake);
            if self.food.is_none() {
                warn!("no free cell left on a {}x{} grid", self.grid.width(), self.grid.height());
                return StepOutcome::BoardFilled;
            }
        }

        StepOutcome::Alive { new_head, old_head, old_tail, ate }
    }

    pub fn change_direction(&mut self, requested: Direction) {
        self.snake.change_direction(requested);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
