use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Cell, Direction, Grid};

/// Self-collision is only looked for once the snake is longer than this.
pub const MIN_COLLISION_LENGTH: usize = 4;

/// How many trailing segments the head is compared against.
const COLLISION_TAIL_SPAN: usize = 3;

pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    dropped_tail: Option<Cell>,
    grow_next_move: bool,
}

impl Snake {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self::with_direction(grid.center(), Direction::random(rng))
    }

    pub fn with_direction(start: Cell, direction: Direction) -> Self {
        Snake {
            body: VecDeque::from([start]),
            direction,
            pending_direction: None,
            dropped_tail: None,
            grow_next_move: false,
        }
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: it starts with one cell and advance()
        // pushes before it pops.
        self.body[0]
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Buffers a turn for the next tick. A request to reverse the current
    /// heading is dropped.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }
    }

    pub fn advance(&mut self, grid: &Grid) {
        let new_head = grid.step(self.head(), self.direction);
        self.body.push_front(new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
            self.dropped_tail = None;
        } else {
            self.dropped_tail = self.body.pop_back();
        }
    }

    /// Adds one segment. The tail dropped by the last `advance()` is put
    /// back right away; if nothing was dropped yet, the next `advance()`
    /// keeps its tail instead.
    pub fn grow(&mut self) {
        match self.dropped_tail.take() {
            Some(tail) => self.body.push_back(tail),
            None => self.grow_next_move = true,
        }
    }

    /// True when the head sits on one of the last three segments. Short
    /// snakes never collide.
    pub fn check_self_collision(&self) -> bool {
        let len = self.body.len();
        if len <= MIN_COLLISION_LENGTH {
            return false;
        }

        let head = self.head();
        self.body.range(len - COLLISION_TAIL_SPAN..).any(|seg| *seg == head)
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        *self = Snake::new(grid, rng);
    }
}
