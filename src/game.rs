use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use crossterm::style::Color;
use log::info;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::grid::{Grid, Position};
use crate::pacer::Pacer;
use crate::scoreboard::Scoreboard;
use crate::session::StepOutcome;
use crate::snake::Direction::*;
use crate::state::{Control, Ending, GameState, Input, Screen};
use crate::term::{Glyph, TermManager};
use crate::{Coords, TermInt};

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: TermInt = 2;
/// Row of the board's top border; the status line sits above it.
const BOARD_TOP: TermInt = 1;

const SNAKE_HEAD: Glyph = Glyph::new('█', Color::Green);
const SNAKE_BODY: Glyph = Glyph::new('█', Color::DarkGreen);
const DEAD_SNAKE: Glyph = Glyph::new('X', Color::DarkGrey);
const FOOD: Glyph = Glyph::new('█', Color::Red);

const QUIT_HINT: &str = "Q, Esc or Ctrl+C to quit";

pub struct SnakeGame {
    term: TermManager,
    state: GameState,
    scoreboard: Scoreboard,
    pacer: Pacer,
}

impl SnakeGame {
    pub fn new(config: GameConfig, rng: StdRng) -> Result<Self> {
        let term = TermManager::new()?;

        let needed = required_size(&config.grid);
        let actual = term.size();
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(Error::TerminalTooSmall { needed, actual });
        }

        let pacer = Pacer::new(config.difficulty.tick_interval());
        info!("ticking every {:?} on a {}x{} board", pacer.interval(), config.grid.width(), config.grid.height());
        Ok(SnakeGame { term, state: GameState::new(config, rng), scoreboard: Scoreboard::new(), pacer })
    }

    /// Runs until the player quits. The terminal is restored on every exit path.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let res = self.main_loop();
        let restored = self.term.restore();
        res.and(restored)
    }

    fn main_loop(&mut self) -> Result<()> {
        self.draw_board()?;
        let center = self.board_center();
        self.term.show_message(center, &["Click to Start", "", "Arrow keys or WASD to steer", QUIT_HINT])?;

        loop {
            let control = match self.state.screen() {
                Screen::Playing => self.play_tick()?,
                Screen::WaitingToStart | Screen::GameOver(_) => self.await_press()?,
            };

            if control == Control::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    fn await_press(&mut self) -> Result<Control> {
        let input = match translate(&self.term.read_event_blocking()?) {
            Some(input) => input,
            None => return Ok(Control::Continue),
        };

        let control = self.state.handle(input);
        if control == Control::Continue && self.state.screen() == Screen::Playing {
            self.draw_board()?;
            self.pacer.reset();
        }

        Ok(control)
    }

    fn play_tick(&mut self) -> Result<Control> {
        self.pacer.wait();

        for event in self.term.read_events_queue()? {
            if let Some(input) = translate(&event) {
                if self.state.handle(input) == Control::Quit {
                    return Ok(Control::Quit);
                }
            }
        }

        match self.state.tick() {
            Some(StepOutcome::Alive { new_head, old_head, old_tail, ate }) => {
                self.term.print_at_cell(old_head, SNAKE_BODY)?;
                if let Some(tail) = old_tail {
                    self.term.print_at_cell(tail, Glyph::BLANK)?;
                }
                self.term.print_at_cell(new_head, SNAKE_HEAD)?;

                if ate {
                    self.draw_food()?;
                    self.draw_status()?;
                }
                self.term.flush()?;
            }
            Some(StepOutcome::Collided(_)) | Some(StepOutcome::BoardFilled) => self.show_game_over()?,
            None => {}
        }

        Ok(Control::Continue)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_board(&mut self) -> Result<()> {
        let grid = *self.state.session().grid();
        let (width, height) = required_size(&grid);

        self.term.clear()?;
        self.term.draw_box((0, BOARD_TOP), width, height - BOARD_TOP)?;
        self.draw_status()?;
        self.draw_snake(SNAKE_HEAD, SNAKE_BODY)?;
        self.draw_food()?;
        self.term.flush()
    }

    fn draw_status(&mut self) -> Result<()> {
        self.scoreboard.update(self.state.session().score());
        let difficulty = format!("Difficulty: {}", self.state.config().difficulty);
        let right = required_size(self.state.session().grid()).0 - difficulty.len() as TermInt;

        self.term.print_str((0, 0), &self.scoreboard.label(), Color::White)?;
        self.term.print_str((right, 0), &difficulty, Color::White)
    }

    fn draw_snake(&mut self, head_glyph: Glyph, body_glyph: Glyph) -> Result<()> {
        let body: Vec<Position> = self.state.session().snake().body().iter().copied().collect();

        for (i, cell) in body.into_iter().enumerate() {
            self.term.print_at_cell(cell, if i == 0 { head_glyph } else { body_glyph })?;
        }
        Ok(())
    }

    fn draw_food(&mut self) -> Result<()> {
        match self.state.session().food() {
            Some(food) => self.term.print_at_cell(food, FOOD),
            None => Ok(()),
        }
    }

    fn show_game_over(&mut self) -> Result<()> {
        let title = match self.state.screen() {
            Screen::GameOver(Ending::BoardFilled) => "Board cleared!",
            _ => "Game Over!",
        };

        self.draw_snake(DEAD_SNAKE, DEAD_SNAKE)?;
        self.draw_status()?;

        let score = format!("Final score: {}", self.scoreboard.score());
        let center = self.board_center();
        self.term.show_message(center, &[title, &score, "", "Click to Restart", QUIT_HINT])
    }

    fn board_center(&self) -> Coords {
        let (width, height) = required_size(self.state.session().grid());
        (width / 2, BOARD_TOP + (height - BOARD_TOP) / 2)
    }
}

impl TermManager {
    fn print_at_cell(&mut self, cell: Position, glyph: Glyph) -> Result<()> {
        let (x, y) = cell_origin(cell);
        for dx in 0..CELL_WIDTH {
            self.print_at((x + dx, y), glyph)?;
        }
        Ok(())
    }
}

/// Terminal size needed for the status line plus the bordered board.
pub fn required_size(grid: &Grid) -> Coords {
    let width = grid.width() as TermInt * CELL_WIDTH + 2;
    let height = BOARD_TOP + grid.height() as TermInt + 2;
    (width, height)
}

/// Top-left terminal column and row of a grid cell.
fn cell_origin(cell: Position) -> Coords {
    (1 + cell.x as TermInt * CELL_WIDTH, BOARD_TOP + 1 + cell.y as TermInt)
}

fn translate(event: &Event) -> Option<Input> {
    match event {
        ev if is_ctrl_c(ev) => Some(Input::Quit),
        Event::Key(KeyEvent { code, modifiers: _ }) => match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Input::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Input::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Input::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Input::Turn(Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Press),
            KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), .. }) => Some(Input::Press),
        _ => None,
    }
}

fn is_ctrl_c(ev: &Event) -> bool {
    matches!(ev, Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers }) if modifiers.contains(KeyModifiers::CONTROL))
}
