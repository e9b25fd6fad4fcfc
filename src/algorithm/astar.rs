use super::frontier::Frontier;
use super::{construct_path, SearchOutcome, StepObserver, Trace};
use crate::common::Position;
use crate::error::{GridError, Result};
use crate::grid::{CellState, Grid};
use crate::heuristic::manhattan;
use crate::stat::Stats;

use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// g-score of a node nothing has reached yet.
const UNREACHABLE: usize = usize::MAX;

/// Run A* from `start` to `end` over `grid`, marking cells as the search
/// progresses and calling `observer` once after each expanded node.
///
/// `start` and `end` must be the grid's own endpoints and its neighbor
/// lists must be fresh. Frontier and Visited markings are left in place
/// whatever the outcome.
#[instrument(skip_all, name = "a_star", fields(start = %start, end = %end), level = "debug")]
pub fn a_star_search<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    start: Position,
    end: Position,
    observer: &mut O,
    stats: &mut Stats,
) -> Result<SearchOutcome> {
    validate_request(grid, start, end)?;
    let search_start_time = Instant::now();

    let mut frontier = Frontier::new();
    let mut trace = Trace::new();
    let mut g_score: HashMap<Position, usize> = HashMap::new();
    let mut f_score: HashMap<Position, usize> = HashMap::new();

    g_score.insert(start, 0);
    f_score.insert(start, manhattan(start, end));
    frontier.push(start, f_score[&start]);
    stats.enqueued_nodes += 1;

    while let Some(current) = frontier.pop() {
        let position = current.position;
        trace!("expand node {position} f {}", current.f_score);

        // Update stats.
        stats.expanded_nodes += 1;

        if position == end {
            let path = construct_path(&trace, end);
            for step in &path.steps {
                grid.mark(*step, CellState::Path);
            }

            stats.path_cost = Some(path.cost());
            stats.time_us = search_start_time.elapsed().as_micros() as usize;
            debug!("path found with cost {}", path.cost());
            return Ok(SearchOutcome::PathFound(path));
        }

        // All edges cost 1.
        let tentative_g_score = g_score[&position] + 1;
        let neighbors = grid.cell(position)?.neighbors().to_vec();

        for neighbor in neighbors {
            if tentative_g_score >= *g_score.get(&neighbor).unwrap_or(&UNREACHABLE) {
                continue;
            }

            let neighbor_f_score = tentative_g_score + manhattan(neighbor, end);
            trace.insert(neighbor, position);
            g_score.insert(neighbor, tentative_g_score);
            f_score.insert(neighbor, neighbor_f_score);

            // A member keeps its existing entry and key, even after improving.
            if frontier.push(neighbor, neighbor_f_score) {
                stats.enqueued_nodes += 1;
                grid.mark(neighbor, CellState::Frontier);
                trace!("enqueue {neighbor} f {neighbor_f_score}");
            } else {
                stats.skipped_requeues += 1;
                trace!("improved {neighbor} while queued, not requeued");
            }
        }

        stats.steps_observed += 1;
        if observer.on_step(grid, position).is_break() {
            stats.time_us = search_start_time.elapsed().as_micros() as usize;
            debug!(
                "cancelled after {} steps, {} left in frontier",
                stats.steps_observed,
                frontier.len()
            );
            return Ok(SearchOutcome::Cancelled);
        }

        if position != start {
            grid.mark(position, CellState::Visited);
        }
    }

    stats.time_us = search_start_time.elapsed().as_micros() as usize;
    debug!("cannot find path");
    Ok(SearchOutcome::PathNotFound)
}

fn validate_request(grid: &Grid, start: Position, end: Position) -> Result<()> {
    if start == end {
        return Err(GridError::InvalidRequest(format!(
            "start and end are both {start}"
        )));
    }
    for (name, position) in [("start", start), ("end", end)] {
        if !grid.contains(position) {
            return Err(GridError::InvalidRequest(format!(
                "{name} {position} is not on the {0}x{0} grid",
                grid.size()
            )));
        }
    }
    if grid.start() != Some(start) || grid.end() != Some(end) {
        return Err(GridError::InvalidRequest(format!(
            "{start} -> {end} does not match the grid's endpoints {:?} -> {:?}",
            grid.start(),
            grid.end()
        )));
    }
    if !grid.neighbors_fresh() {
        return Err(GridError::InvalidRequest(
            "neighbor lists are stale, refresh them before searching".to_string(),
        ));
    }
    Ok(())
}
