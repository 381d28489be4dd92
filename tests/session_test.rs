// Movement, eating and restart scenarios driven through the public API

use gridsnake::config::{Difficulty, GameConfig};
use gridsnake::grid::{Grid, Position};
use gridsnake::session::{Session, StepOutcome};
use gridsnake::snake::{CollisionCause, Direction, Snake};
use gridsnake::state::{Control, Ending, GameState, Input, Screen};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid() -> Grid {
    Grid::new(40, 30)
}

fn body(session: &Session) -> Vec<Position> {
    session.snake().body().iter().copied().collect()
}

fn cells(coords: &[(i32, i32)]) -> Vec<Position> {
    coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
}

#[test]
fn test_eating_grows_and_scores() {
    let snake = Snake::new(Position::new(10, 10), Direction::Up);
    let mut session = Session::with_state(grid(), snake, Some(Position::new(10, 9)));
    let mut rng = StdRng::seed_from_u64(5);

    let outcome = session.step(&mut rng);

    assert_eq!(
        outcome,
        StepOutcome::Alive {
            new_head: Position::new(10, 9),
            old_head: Position::new(10, 10),
            old_tail: None,
            ate: true,
        }
    );
    assert_eq!(body(&session), cells(&[(10, 9), (10, 10)]));
    assert_eq!(session.score(), 1);

    let food = session.food().expect("new food placed");
    assert!(!session.snake().occupies(food));
}

#[test]
fn test_wall_collision_leaves_body_unchanged() {
    let snake = Snake::new(Position::new(0, 5), Direction::Left);
    let mut session = Session::with_state(grid(), snake, Some(Position::new(20, 20)));

    let outcome = session.step(&mut StdRng::seed_from_u64(0));

    assert_eq!(outcome, StepOutcome::Collided(CollisionCause::WallBound));
    assert_eq!(body(&session), cells(&[(0, 5)]));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_self_collision() {
    let snake = Snake::from_body(cells(&[(5, 5), (5, 6), (5, 7)]), Direction::Down);
    let mut session = Session::with_state(grid(), snake, Some(Position::new(20, 20)));

    let outcome = session.step(&mut StdRng::seed_from_u64(0));

    assert_eq!(outcome, StepOutcome::Collided(CollisionCause::SelfBody));
    assert_eq!(body(&session), cells(&[(5, 5), (5, 6), (5, 7)]));
}

/// Heads for the food, preferring moves that stay on the grid and off the body.
fn steer_to_food(session: &Session) -> Direction {
    let snake = session.snake();
    let head = snake.head();
    let food = session.food().expect("food on the board");

    let mut preferred = Vec::new();
    if food.x < head.x {
        preferred.push(Direction::Left);
    } else if food.x > head.x {
        preferred.push(Direction::Right);
    }
    if food.y < head.y {
        preferred.push(Direction::Up);
    } else if food.y > head.y {
        preferred.push(Direction::Down);
    }
    preferred.extend(Direction::ALL.iter().copied());

    preferred
        .into_iter()
        .filter(|&d| d != snake.direction().opposite())
        .find(|&d| {
            let next = head.offset(d.delta());
            session.grid().contains(next) && !snake.occupies(next)
        })
        .unwrap_or(snake.direction())
}

#[test]
fn test_length_changes_only_when_eating() {
    let config = GameConfig::new(Difficulty::HARD);
    let mut rng = StdRng::seed_from_u64(99);
    let mut session = Session::new(&config, &mut rng);

    let mut eaten = 0;
    let mut ticks = 0;
    while eaten < 8 && ticks < 2000 {
        session.change_direction(steer_to_food(&session));

        let len_before = session.snake().len();
        let score_before = session.score();
        let food_before = session.food();

        match session.step(&mut rng) {
            StepOutcome::Alive { new_head, ate, .. } => {
                assert_eq!(ate, Some(new_head) == food_before);
                let grew = if ate { 1 } else { 0 };
                assert_eq!(session.snake().len(), len_before + grew);
                assert_eq!(session.score(), score_before + grew as u32);

                let food = session.food().expect("grid is far from full");
                assert!(!session.snake().occupies(food));
                eaten += grew;
            }
            other => panic!("snake stopped after {} ticks: {:?}", ticks, other),
        }
        ticks += 1;
    }

    assert_eq!(eaten, 8);
    assert_eq!(session.score(), 8);
    assert_eq!(session.snake().len(), 9);
    assert!(ticks >= 8);
}

#[test]
fn test_restart_keeps_difficulty_and_resets_the_rest() {
    let config = GameConfig::new(Difficulty::MEDIUM);
    let mut state = GameState::new(config, StdRng::seed_from_u64(21));

    assert_eq!(state.handle(Input::Press), Control::Continue);
    state.handle(Input::Turn(Direction::Left));

    let mut ticks = 0;
    while state.screen() == Screen::Playing {
        state.tick();
        ticks += 1;
        assert!(ticks <= 21, "snake should reach the left wall");
    }
    assert_eq!(state.screen(), Screen::GameOver(Ending::Collided(CollisionCause::WallBound)));

    // Frozen until the restart trigger
    state.handle(Input::Turn(Direction::Down));
    assert_eq!(state.tick(), None);
    assert_eq!(state.session().snake().head(), Position::new(0, 15));

    state.handle(Input::Press);

    assert_eq!(state.screen(), Screen::Playing);
    assert_eq!(body(state.session()), cells(&[(20, 15)]));
    assert_eq!(state.session().snake().direction(), Direction::Up);
    assert_eq!(state.session().score(), 0);
    assert_eq!(state.config().difficulty, Difficulty::MEDIUM);
}
