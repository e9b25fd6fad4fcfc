use astar_grid::config::{Cli, Config};
use astar_grid::editor::Editor;
use astar_grid::grid::Grid;
use astar_grid::render::Surface;
use astar_grid::scenario::{scatter_walls, Scenario};
use astar_grid::stat::Stats;
use astar_grid::{Position, SearchOutcome, StepLimit};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::ops::ControlFlow;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Summary<'a> {
    outcome: &'static str,
    path: &'a [Position],
    stats: &'a Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)
            .with_context(|| format!("cannot read config file: {config_file}"))?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;
    config.validate()?;

    let grid = Grid::new(config.rows, config.cell_size())?;
    let mut editor = Editor::new(grid, config.width);
    let mut surface = Surface::create(config.width, config.rows);
    let mut stats = Stats::default();

    let animate = |grid: &Grid, _: Position| {
        if config.animate {
            println!("{}", surface.draw_text(grid));
        }
        ControlFlow::Continue(())
    };
    let mut observer = StepLimit::new(animate, config.max_steps);

    let outcome = match config.scenario_path.as_deref() {
        Some(path) => {
            let scenario = Scenario::load_from_file(path)?;
            let mut last = None;
            for event in scenario.events {
                observer.reset();
                if let Some(outcome) = editor.handle(event, &mut observer, &mut stats)? {
                    last = Some(outcome);
                }
            }
            last
        }
        None => {
            let grid = editor.grid_mut();
            grid.set_start(config.start_or_default())?;
            grid.set_end(config.end_or_default())?;
            let mut rng = StdRng::seed_from_u64(config.seed);
            scatter_walls(grid, config.wall_density, &mut rng);
            editor.run(&mut observer, &mut stats)?
        }
    };

    println!("{}", surface.draw_text(editor.grid()));
    stats.print();

    let Some(outcome) = outcome else {
        warn!("no search was run");
        surface.destroy();
        return Ok(());
    };

    match &outcome {
        SearchOutcome::PathFound(path) => info!("path found, cost {}", path.cost()),
        SearchOutcome::PathNotFound => info!("no path between the endpoints"),
        SearchOutcome::Cancelled => info!("search cancelled after {} steps", stats.steps_observed),
    }

    if config.json {
        let summary = Summary {
            outcome: outcome.label(),
            path: outcome
                .path()
                .map(|path| path.steps.as_slice())
                .unwrap_or_default(),
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    surface.destroy();
    Ok(())
}
