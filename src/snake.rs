use std::collections::VecDeque;

use crate::grid::{Grid, Position};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit vector, with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionCause {
    WallBound,
    SelfBody,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// `old_tail` is `None` when the snake grew this move.
    Moved { new_head: Position, old_head: Position, old_tail: Option<Position> },
    Crashed(CollisionCause),
}

/// Occupied cells, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Position, direction: Direction) -> Self {
        Snake::from_body(vec![pos], direction)
    }

    /// Builds a snake from its cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn from_body(body: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let body: VecDeque<Position> = body.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");
        Snake { body, direction }
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advances one cell. Grows instead of dropping the tail when the new
    /// head lands on `food`. A crash leaves the snake untouched.
    pub fn move_step(&mut self, grid: &Grid, food: Option<Position>) -> MoveResult {
        let old_head = self.head();
        let new_head = old_head.offset(self.direction.delta());

        if !grid.contains(new_head) {
            return Crashed(CollisionCause::WallBound);
        }

        // The tail cell is exempt, even on a move that will not vacate it.
        let tail_index = self.body.len() - 1;
        if self.body.iter().take(tail_index).any(|&cell| cell == new_head) {
            return Crashed(CollisionCause::SelfBody);
        }

        self.body.push_front(new_head);

        if food == Some(new_head) {
            Moved { new_head, old_head, old_tail: None }
        } else {
            let old_tail = self.body.pop_back();
            Moved { new_head, old_head, old_tail }
        }
    }

    pub fn change_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(40, 30)
    }

    fn cells(coords: &[(i32, i32)]) -> Vec<Position> {
        coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn change_direction_rejects_only_reversal() {
        for &current in Direction::ALL.iter() {
            for &requested in Direction::ALL.iter() {
                let mut snake = Snake::new(Position::new(5, 5), current);
                snake.change_direction(requested);

                let expected = if requested == current.opposite() { current } else { requested };
                assert_eq!(snake.direction(), expected, "{:?} -> {:?}", current, requested);
            }
        }
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut snake = Snake::from_body(cells(&[(5, 5), (5, 6), (5, 7)]), Right);
        let res = snake.move_step(&grid(), Some(Position::new(0, 0)));

        assert_eq!(
            res,
            Moved {
                new_head: Position::new(6, 5),
                old_head: Position::new(5, 5),
                old_tail: Some(Position::new(5, 7)),
            }
        );
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), cells(&[(6, 5), (5, 5), (5, 6)]));
    }

    #[test]
    fn eating_keeps_the_tail() {
        let mut snake = Snake::new(Position::new(10, 10), Up);
        let res = snake.move_step(&grid(), Some(Position::new(10, 9)));

        assert!(matches!(res, Moved { old_tail: None, .. }));
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), cells(&[(10, 9), (10, 10)]));
    }

    #[test]
    fn leaving_the_grid_crashes_without_moving() {
        let mut snake = Snake::new(Position::new(0, 5), Left);

        assert_eq!(snake.move_step(&grid(), None), Crashed(CollisionCause::WallBound));
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), cells(&[(0, 5)]));

        let mut snake = Snake::new(Position::new(39, 29), Down);
        assert_eq!(snake.move_step(&grid(), None), Crashed(CollisionCause::WallBound));
    }

    #[test]
    fn running_into_the_body_crashes() {
        let mut snake = Snake::from_body(cells(&[(5, 5), (5, 6), (5, 7)]), Down);

        assert_eq!(snake.move_step(&grid(), None), Crashed(CollisionCause::SelfBody));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
    }

    #[test]
    fn chasing_the_tail_is_allowed() {
        // A 2x2 loop: the head moves into the cell the tail is leaving.
        let body = cells(&[(5, 5), (6, 5), (6, 6), (5, 6)]);
        let mut snake = Snake::from_body(body, Down);

        let res = snake.move_step(&grid(), None);

        assert!(matches!(res, Moved { .. }));
        assert_eq!(snake.head(), Position::new(5, 6));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn tail_is_exempt_even_when_growing() {
        let body = cells(&[(5, 5), (6, 5), (6, 6), (5, 6)]);
        let mut snake = Snake::from_body(body, Down);

        let res = snake.move_step(&grid(), Some(Position::new(5, 6)));

        assert!(matches!(res, Moved { old_tail: None, .. }));
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn single_cell_snake_never_hits_itself() {
        for &direction in Direction::ALL.iter() {
            let mut snake = Snake::new(Position::new(5, 5), direction);
            assert!(matches!(snake.move_step(&grid(), None), Moved { .. }));
        }
    }
}
