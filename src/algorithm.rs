mod astar;
mod frontier;

pub use astar::a_star_search;

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::common::{Path, Position};
use crate::grid::Grid;

type Trace = HashMap<Position, Position>;

/// Terminal result of one search run. Only `a_star_search`'s `Err` side is
/// an error; an unreachable end or an aborted run are ordinary outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    PathFound(Path),
    PathNotFound,
    Cancelled,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::PathFound(path) => Some(path),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::PathFound(_) => "path_found",
            SearchOutcome::PathNotFound => "path_not_found",
            SearchOutcome::Cancelled => "cancelled",
        }
    }
}

/// Called once after every expanded node, with the grid as it now looks and
/// the position that was just expanded. Returning `Break` cancels the run.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid, expanded: Position) -> ControlFlow<()>;
}

impl<F> StepObserver for F
where
    F: FnMut(&Grid, Position) -> ControlFlow<()>,
{
    fn on_step(&mut self, grid: &Grid, expanded: Position) -> ControlFlow<()> {
        self(grid, expanded)
    }
}

/// Wraps an observer and cancels a run once it has seen `max_steps`
/// expansions. The count is per run: call `reset` before starting the next.
pub struct StepLimit<O> {
    inner: O,
    max_steps: Option<usize>,
    steps: usize,
}

impl<O: StepObserver> StepLimit<O> {
    pub fn new(inner: O, max_steps: Option<usize>) -> Self {
        Self {
            inner,
            max_steps,
            steps: 0,
        }
    }

    pub fn reset(&mut self) {
        self.steps = 0;
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<O: StepObserver> StepObserver for StepLimit<O> {
    fn on_step(&mut self, grid: &Grid, expanded: Position) -> ControlFlow<()> {
        self.steps += 1;
        if self.inner.on_step(grid, expanded).is_break() {
            return ControlFlow::Break(());
        }
        match self.max_steps {
            Some(max_steps) if self.steps >= max_steps => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

/// Walk predecessors back from `end` until a position without one (the
/// start). The start is left out; the result runs start -> end.
fn construct_path(trace: &Trace, mut current: Position) -> Path {
    let mut steps = vec![current];
    while let Some(&previous) = trace.get(&current) {
        if !trace.contains_key(&previous) {
            break;
        }
        steps.push(previous);
        current = previous;
    }
    steps.reverse();
    Path { steps }
}
