//! # gridsnake
//!
//! Single-player snake on a fixed 40x30 grid, played in the terminal.
//! A click starts the game, the arrow keys (or WASD) steer, and the snake
//! moves `5 x difficulty` cells per second until it hits a wall or itself.
//!
//! ```text
//! Input → GameState → Session → Snake / food → StepOutcome → SnakeGame (render)
//! ```
//!
//! 1. [`grid`] and [`snake`]: cells, directions, movement and collisions.
//! 2. [`food`]: random placement on free cells.
//! 3. [`session`]: one playthrough, composing a step with eating and scoring.
//! 4. [`state`]: start, play and game-over screens, restart.
//! 5. [`game`], [`term`] and [`pacer`]: the crossterm front end.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod pacer;
pub mod scoreboard;
pub mod session;
pub mod snake;
pub mod state;
pub mod term;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);

pub use error::{Error, Result};
