use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate, `row` and `col` both in `[0, size)`.
///
/// Deliberately carries no ordering: the frontier orders entries by an
/// explicit `(f_score, sequence)` key, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// True when `other` is exactly one unit away along exactly one axis.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Steps of a found path in start -> end order. The start position itself is
/// not included, so the number of steps equals the path cost.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Path {
    pub steps: Vec<Position>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cost(&self) -> usize {
        self.steps.len()
    }

    pub fn last(&self) -> Option<&Position> {
        self.steps.last()
    }

    /// Whether `start` followed by every step forms a chain of single grid moves.
    pub fn is_contiguous_from(&self, start: Position) -> bool {
        let mut previous = start;
        for step in &self.steps {
            if !previous.is_adjacent(step) {
                return false;
            }
            previous = *step;
        }
        true
    }
}
