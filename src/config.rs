use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;
use crate::grid::Grid;

pub const GRID_WIDTH: u16 = 40;
pub const GRID_HEIGHT: u16 = 30;

/// Ticks per second at difficulty 1.
pub const BASE_TICK_RATE: u32 = 5;
pub const MAX_DIFFICULTY: u8 = 3;

/// Speed multiplier chosen before the first session, 1 through 3.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASY: Difficulty = Difficulty(1);
    pub const MEDIUM: Difficulty = Difficulty(2);
    pub const HARD: Difficulty = Difficulty(3);

    pub fn new(level: i64) -> Result<Self, Error> {
        if (1..=MAX_DIFFICULTY as i64).contains(&level) {
            Ok(Difficulty(level as u8))
        } else {
            Err(Error::InvalidDifficulty(level.to_string()))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Easy",
            2 => "Medium",
            _ => "Hard",
        }
    }

    pub fn ticks_per_second(&self) -> u32 {
        BASE_TICK_RATE * self.0 as u32
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.ticks_per_second() as u64)
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(level) => Difficulty::new(level),
            Err(_) => Err(Error::InvalidDifficulty(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.level())
    }
}

/// Everything that stays fixed for the lifetime of the program.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        GameConfig::with_grid(Grid::new(GRID_WIDTH, GRID_HEIGHT), difficulty)
    }

    pub fn with_grid(grid: Grid, difficulty: Difficulty) -> Self {
        GameConfig { grid, difficulty }
    }
}
