//! Screen flow: waiting for the first click, playing, and game over.
//!
//! [`GameState`] knows nothing about terminals. It consumes symbolic
//! [`Input`]s and advances the current [`Session`] once per [`GameState::tick`];
//! the front end in [`crate::game`] decides when ticks happen and what to draw.

use log::info;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::session::{Session, StepOutcome};
use crate::snake::{CollisionCause, Direction};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Pointer press, the start and restart trigger
    Press,
    Turn(Direction),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Collided(CollisionCause),
    BoardFilled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    WaitingToStart,
    Playing,
    GameOver(Ending),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct GameState {
    config: GameConfig,
    rng: StdRng,
    session: Session,
    screen: Screen,
    pending_turn: Option<Direction>,
}

impl GameState {
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let session = Session::new(&config, &mut rng);
        GameState { config, rng, session, screen: Screen::WaitingToStart, pending_turn: None }
    }

    pub fn handle(&mut self, input: Input) -> Control {
        match (input, self.screen) {
            (Input::Quit, _) => return Control::Quit,
            (Input::Press, Screen::WaitingToStart) => {
                info!("session started, difficulty {}", self.config.difficulty);
                self.screen = Screen::Playing;
            }
            (Input::Press, Screen::GameOver(_)) => self.restart(),
            (Input::Turn(direction), Screen::Playing) => self.pending_turn = Some(direction),
            _ => {}
        }

        Control::Continue
    }

    /// Advances the session by one cell. Does nothing outside of play.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.screen != Screen::Playing {
            return None;
        }

        if let Some(direction) = self.pending_turn.take() {
            self.session.change_direction(direction);
        }

        let outcome = self.session.step(&mut self.rng);
        let ending = match outcome {
            StepOutcome::Alive { .. } => None,
            StepOutcome::Collided(cause) => Some(Ending::Collided(cause)),
            StepOutcome::BoardFilled => Some(Ending::BoardFilled),
        };

        if let Some(ending) = ending {
            info!("game over ({:?}), score {}", ending, self.session.score());
            self.screen = Screen::GameOver(ending);
        }

        Some(outcome)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn restart(&mut self) {
        info!("restarting after a score of {}", self.session.score());
        self.session = Session::new(&self.config, &mut self.rng);
        self.pending_turn = None;
        self.screen = Screen::Playing;
    }
}
