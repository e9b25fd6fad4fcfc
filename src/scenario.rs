use anyhow::{Context, Result};
use rand::Rng;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use tracing::info;

use crate::common::Position;
use crate::grid::Grid;

/// A pointer or key event, in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Left { x: usize, y: usize },
    Right { x: usize, y: usize },
    Run,
    Reset,
}

/// A recorded sequence of input events to replay against an editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Scenario {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        Ok(scenario)
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open scenario {path}"))?;
        let reader = BufReader::new(file);
        let scenario: Scenario = serde_yaml::from_reader(reader)
            .with_context(|| format!("cannot parse scenario {path}"))?;
        info!("Loaded {} events from {path}", scenario.events.len());
        Ok(scenario)
    }
}

/// Turn each non-endpoint cell into a wall with probability `density`.
/// Returns how many walls were placed.
pub fn scatter_walls<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) -> usize {
    let endpoints = [grid.start(), grid.end()];
    let size = grid.size();
    let mut placed = 0;

    for row in 0..size {
        for col in 0..size {
            let position = Position::new(row, col);
            if endpoints.contains(&Some(position)) {
                continue;
            }
            if rng.gen_bool(density) && grid.set_wall(position).is_ok() {
                placed += 1;
            }
        }
    }

    info!("Scattered {placed} walls at density {density}");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_events() {
        let yaml = r#"
events:
  - kind: left
    x: 15
    y: 5
  - kind: right
    x: 0
    y: 40
  - kind: run
  - kind: reset
"#;
        let scenario = Scenario::from_yaml_str(yaml).unwrap();
        assert_eq!(
            scenario.events,
            vec![
                InputEvent::Left { x: 15, y: 5 },
                InputEvent::Right { x: 0, y: 40 },
                InputEvent::Run,
                InputEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(Scenario::from_yaml_str("events:\n  - kind: jump\n").is_err());
    }

    #[test]
    fn test_scatter_walls_spares_endpoints() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_start(Position::new(0, 0)).unwrap();
        grid.set_end(Position::new(9, 9)).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let placed = scatter_walls(&mut grid, 1.0, &mut rng);
        assert_eq!(placed, 98);
        assert_eq!(grid.state(Position::new(0, 0)).unwrap(), CellState::Start);
        assert_eq!(grid.state(Position::new(9, 9)).unwrap(), CellState::End);
    }

    #[test]
    fn test_scatter_walls_is_reproducible() {
        let walls = |seed: u64| {
            let mut grid = Grid::new(8, 10).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            scatter_walls(&mut grid, 0.3, &mut rng);
            grid.cells()
                .filter(|cell| cell.is_wall())
                .map(|cell| cell.position())
                .collect::<Vec<_>>()
        };
        assert_eq!(walls(42), walls(42));
        assert!(scatter_walls(&mut Grid::new(8, 10).unwrap(), 0.0, &mut StdRng::seed_from_u64(1)) == 0);
    }
}
