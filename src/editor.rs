use tracing::{debug, info};

use crate::algorithm::{a_star_search, SearchOutcome, StepObserver};
use crate::common::Position;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::scenario::InputEvent;
use crate::stat::Stats;

/// Map a pointer coordinate to a grid position. The pixel x axis selects
/// the row and the pixel y axis selects the column.
pub fn pointer_to_position(x: usize, y: usize, width: usize, rows: usize) -> Option<Position> {
    let gap = width.checked_div(rows)?;
    let row = x.checked_div(gap)?;
    let col = y.checked_div(gap)?;
    (row < rows && col < rows).then(|| Position::new(row, col))
}

/// Applies input events to the grid it owns.
pub struct Editor {
    grid: Grid,
    width: usize,
}

impl Editor {
    pub fn new(grid: Grid, width: usize) -> Self {
        Editor { grid, width }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Apply one event. A `Run` with both endpoints set returns the search
    /// outcome; every other event returns `None`.
    pub fn handle<O: StepObserver + ?Sized>(
        &mut self,
        event: InputEvent,
        observer: &mut O,
        stats: &mut Stats,
    ) -> Result<Option<SearchOutcome>> {
        match event {
            InputEvent::Left { x, y } => {
                if let Some(position) = self.locate(x, y) {
                    self.paint(position)?;
                }
                Ok(None)
            }
            InputEvent::Right { x, y } => {
                if let Some(position) = self.locate(x, y) {
                    self.grid.clear(position)?;
                }
                Ok(None)
            }
            InputEvent::Run => self.run(observer, stats),
            InputEvent::Reset => {
                self.grid.reset();
                Ok(None)
            }
        }
    }

    /// Refresh neighbors and search between the current endpoints, or do
    /// nothing when either is missing.
    pub fn run<O: StepObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        stats: &mut Stats,
    ) -> Result<Option<SearchOutcome>> {
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            debug!("run ignored, endpoints missing");
            return Ok(None);
        };

        self.grid.clear_trace();
        self.grid.refresh_neighbors();
        let outcome = a_star_search(&mut self.grid, start, end, observer, stats)?;
        info!("search from {start} to {end}: {}", outcome.label());
        Ok(Some(outcome))
    }

    fn locate(&self, x: usize, y: usize) -> Option<Position> {
        let position = pointer_to_position(x, y, self.width, self.grid.size());
        if position.is_none() {
            debug!("pointer ({x}, {y}) is outside the grid");
        }
        position
    }

    // First click places the start, second the end, the rest paint walls.
    fn paint(&mut self, position: Position) -> Result<()> {
        let start = self.grid.start();
        let end = self.grid.end();

        let edit = if start.is_none() && end != Some(position) {
            self.grid.set_start(position)
        } else if end.is_none() && start != Some(position) {
            self.grid.set_end(position)
        } else if start != Some(position) && end != Some(position) {
            self.grid.set_wall(position)
        } else {
            Ok(())
        };

        match edit {
            Err(GridError::Conflict { position, occupied }) => {
                debug!("ignored click on {position}, holds {occupied:?}");
                Ok(())
            }
            other => other,
        }
    }
}
