use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Deserialize;

use crate::common::Position;

#[derive(Parser, Debug)]
#[command(
    name = "A* Grid",
    about = "Step-by-step A* path finding on a square grid.",
    version = "0.1"
)]
pub struct Cli {
    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Number of rows (and columns) in the grid")]
    pub rows: Option<usize>,

    #[arg(long, help = "Window width in pixels")]
    pub width: Option<usize>,

    #[arg(long, help = "Path to a YAML scenario of input events to replay")]
    pub scenario: Option<String>,

    #[arg(long, help = "Start cell as row,col", value_delimiter = ',')]
    pub start: Option<Vec<usize>>,

    #[arg(long, help = "End cell as row,col", value_delimiter = ',')]
    pub end: Option<Vec<usize>>,

    #[arg(long, help = "Probability of a cell becoming a wall")]
    pub wall_density: Option<f64>,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,

    #[arg(long, help = "Cancel the search after this many expansions")]
    pub max_steps: Option<usize>,

    #[arg(long, help = "Print a frame after every expansion", default_value_t = false)]
    pub animate: bool,

    #[arg(long, help = "Print a JSON summary at the end", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    pub width: usize,
    pub scenario_path: Option<String>,
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub wall_density: f64,
    pub seed: u64,
    pub max_steps: Option<usize>,
    pub animate: bool,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 50,
            width: 800,
            scenario_path: None,
            start: None,
            end: None,
            wall_density: 0.25,
            seed: 0,
            max_steps: None,
            animate: false,
            json: false,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(rows) = cli.rows {
            self.rows = rows;
        }
        if let Some(width) = cli.width {
            self.width = width;
        }
        if let Some(scenario) = &cli.scenario {
            self.scenario_path = Some(scenario.clone());
        }
        if let Some(start) = &cli.start {
            self.start = Some(parse_position(start).context("invalid --start")?);
        }
        if let Some(end) = &cli.end {
            self.end = Some(parse_position(end).context("invalid --end")?);
        }
        if let Some(wall_density) = cli.wall_density {
            self.wall_density = wall_density;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(max_steps) = cli.max_steps {
            self.max_steps = Some(max_steps);
        }
        self.animate |= cli.animate;
        self.json |= cli.json;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.rows == 0 {
            return Err(anyhow!("Rows must be positive, got {}", self.rows));
        }
        if self.width < self.rows {
            return Err(anyhow!(
                "Width must be at least the number of rows, got width {} for {} rows",
                self.width,
                self.rows
            ));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(anyhow!(
                "Wall density must be within [0, 1], got {}",
                self.wall_density
            ));
        }
        for position in [self.start, self.end].into_iter().flatten() {
            if position.row >= self.rows || position.col >= self.rows {
                return Err(anyhow!(
                    "Endpoint {position} is outside the {0}x{0} grid",
                    self.rows
                ));
            }
        }
        if self.start.is_some() && self.start == self.end {
            return Err(anyhow!("Start and end must differ"));
        }
        Ok(())
    }

    pub fn cell_size(&self) -> usize {
        self.width / self.rows
    }

    pub fn start_or_default(&self) -> Position {
        self.start.unwrap_or(Position::new(0, 0))
    }

    pub fn end_or_default(&self) -> Position {
        self.end
            .unwrap_or_else(|| Position::new(self.rows - 1, self.rows - 1))
    }
}

fn parse_position(values: &[usize]) -> anyhow::Result<Position> {
    match values {
        [row, col] => Ok(Position::new(*row, *col)),
        _ => Err(anyhow!("expected row,col, got {values:?}")),
    }
}
