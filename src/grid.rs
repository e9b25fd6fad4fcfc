use tracing::{debug, trace};

use crate::common::Position;
use crate::error::{Endpoint, GridError, Result};

/// Observable state of a single cell. Colors are a rendering concern and
/// live in the renderer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Frontier,
    Visited,
    Path,
}

#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    state: CellState,
    neighbors: Vec<Position>, // Passable 4-way neighbors, as of the last refresh
}

impl Cell {
    fn new(position: Position) -> Self {
        Cell {
            position,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn neighbors(&self) -> &[Position] {
        &self.neighbors
    }

    pub fn is_wall(&self) -> bool {
        self.state == CellState::Wall
    }
}

/// An N x N board of cells.
///
/// The grid keeps track of the single Start and End cell, and of whether the
/// neighbor lists still reflect the current walls.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cell_size: usize,
    cells: Vec<Vec<Cell>>,
    start: Option<Position>,
    end: Option<Position>,
    neighbors_fresh: bool,
}

impl Grid {
    pub fn new(size: usize, cell_size: usize) -> Result<Self> {
        if size == 0 || cell_size == 0 {
            return Err(GridError::InvalidDimension { size, cell_size });
        }

        let mut grid = Grid {
            size,
            cell_size,
            cells: Vec::with_capacity(size),
            start: None,
            end: None,
            neighbors_fresh: false,
        };
        grid.build();
        Ok(grid)
    }

    fn build(&mut self) {
        self.cells = (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| Cell::new(Position::new(row, col)))
                    .collect()
            })
            .collect();
        self.start = None;
        self.end = None;
        self.neighbors_fresh = false;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn neighbors_fresh(&self) -> bool {
        self.neighbors_fresh
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    fn check(&self, position: Position) -> Result<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }

    pub fn cell(&self, position: Position) -> Result<&Cell> {
        self.check(position)?;
        Ok(&self.cells[position.row][position.col])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn state(&self, position: Position) -> Result<CellState> {
        Ok(self.cell(position)?.state)
    }

    pub fn set_wall(&mut self, position: Position) -> Result<()> {
        self.check(position)?;
        self.refuse_endpoint(position)?;
        self.write(position, CellState::Wall);
        Ok(())
    }

    pub fn set_start(&mut self, position: Position) -> Result<()> {
        self.check(position)?;
        if self.end == Some(position) {
            return Err(GridError::Conflict {
                position,
                occupied: Endpoint::End,
            });
        }
        if let Some(previous) = self.start.take() {
            self.write(previous, CellState::Empty);
        }
        self.write(position, CellState::Start);
        self.start = Some(position);
        debug!("start set to {position}");
        Ok(())
    }

    pub fn set_end(&mut self, position: Position) -> Result<()> {
        self.check(position)?;
        if self.start == Some(position) {
            return Err(GridError::Conflict {
                position,
                occupied: Endpoint::Start,
            });
        }
        if let Some(previous) = self.end.take() {
            self.write(previous, CellState::Empty);
        }
        self.write(position, CellState::End);
        self.end = Some(position);
        debug!("end set to {position}");
        Ok(())
    }

    /// Return a cell to Empty. Clearing an endpoint forgets it.
    pub fn clear(&mut self, position: Position) -> Result<()> {
        self.check(position)?;
        if self.start == Some(position) {
            self.start = None;
        }
        if self.end == Some(position) {
            self.end = None;
        }
        self.write(position, CellState::Empty);
        Ok(())
    }

    /// Rebuild every cell as Empty and forget both endpoints.
    pub fn reset(&mut self) {
        debug!("reset {}x{} grid", self.size, self.size);
        self.build();
    }

    /// Drop Frontier, Visited and Path markings left over from a previous run.
    pub fn clear_trace(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if matches!(
                cell.state,
                CellState::Frontier | CellState::Visited | CellState::Path
            ) {
                cell.state = CellState::Empty;
            }
        }
    }

    /// Recompute every cell's passable neighbors, in the fixed order
    /// down, up, right, left.
    pub fn refresh_neighbors(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let neighbors = self.get_neighbors(row, col);
                self.cells[row][col].neighbors = neighbors;
            }
        }
        self.neighbors_fresh = true;
        trace!("neighbors refreshed");
    }

    fn get_neighbors(&self, row: usize, col: usize) -> Vec<Position> {
        let directions: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)]; // Down, up, right, left
        let mut neighbors = Vec::with_capacity(4);

        for &(dr, dc) in &directions {
            let (Some(new_row), Some(new_col)) =
                (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if new_row < self.size
                && new_col < self.size
                && !self.cells[new_row][new_col].is_wall()
            {
                neighbors.push(Position::new(new_row, new_col));
            }
        }

        neighbors
    }

    /// Search-time marking. Walls and the tracked endpoints are never
    /// overwritten, so neighbor lists and the Start/End cells stay valid
    /// whatever the run's outcome.
    pub(crate) fn mark(&mut self, position: Position, state: CellState) {
        if self.start == Some(position) || self.end == Some(position) {
            return;
        }
        let cell = &mut self.cells[position.row][position.col];
        if cell.state != CellState::Wall {
            cell.state = state;
        }
    }

    fn refuse_endpoint(&self, position: Position) -> Result<()> {
        if self.start == Some(position) {
            return Err(GridError::Conflict {
                position,
                occupied: Endpoint::Start,
            });
        }
        if self.end == Some(position) {
            return Err(GridError::Conflict {
                position,
                occupied: Endpoint::End,
            });
        }
        Ok(())
    }

    fn write(&mut self, position: Position, state: CellState) {
        let cell = &mut self.cells[position.row][position.col];
        // Any wall appearing or disappearing invalidates neighbor lists.
        if (cell.state == CellState::Wall) != (state == CellState::Wall) {
            self.neighbors_fresh = false;
        }
        cell.state = state;
    }
}
