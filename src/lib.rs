pub mod algorithm;
pub mod common;
pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod render;
pub mod scenario;
pub mod stat;

pub use algorithm::{a_star_search, SearchOutcome, StepLimit, StepObserver};
pub use common::{Path, Position};
pub use error::{GridError, Result};
pub use grid::{Cell, CellState, Grid};
