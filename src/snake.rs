use Direction::*;
use MoveResult::*;

/// A cell on the board, in grid units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn in_bounds(self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }

    /// Row-major index of the cell, only meaningful for in-bounds positions.
    pub fn index(self, grid_size: i32) -> usize {
        (self.y * grid_size + self.x) as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

/// Per-tick displacement of the head. Zero only before the first
/// directional input of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn from_direction(direction: Direction) -> Self {
        let (dx, dy) = match direction {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        };
        Velocity { dx, dy }
    }

    pub fn direction(self) -> Option<Direction> {
        match (self.dx, self.dy) {
            (0, -1) => Some(Up),
            (0, 1) => Some(Down),
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            _ => None,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Velocity::ZERO
    }

    /// True when `other` points exactly the opposite way. A zero velocity
    /// has no reverse.
    pub fn is_reverse_of(self, other: Velocity) -> bool {
        !self.is_zero() && self.dx == -other.dx && self.dy == -other.dy
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Body,
    Wall,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Position, old_head: Position },
    Crashed(Crash)
}

/// The head plus its trailing segments, closest-to-head first. Segments are
/// plain values rewritten in place on every step.
#[derive(Clone, Debug)]
pub struct Snake {
    head: Position,
    body: Vec<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake { head, body: vec![] }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Appends a segment at the tail end.
    pub fn grow_at(&mut self, pos: Position) {
        self.body.push(pos);
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Shifts every segment onto its predecessor (the first one onto the
    /// old head), advances the head and reports whether it crashed.
    pub fn move_step(&mut self, velocity: Velocity, grid_size: i32) -> MoveResult {
        let old_head = self.head;

        for i in (0..self.body.len()).rev() {
            self.body[i] = if i == 0 { old_head } else { self.body[i - 1] };
        }

        self.head = Position::new(old_head.x + velocity.dx, old_head.y + velocity.dy);

        if self.body.contains(&self.head) {
            Crashed(Crash::Body)
        } else if !self.head.in_bounds(grid_size) {
            Crashed(Crash::Wall)
        } else {
            Moved { new_head: self.head, old_head }
        }
    }
}
