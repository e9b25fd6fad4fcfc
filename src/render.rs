//! Rendering boundary.
//!
//! The core exposes cell states only. A [`Surface`] is the explicit display
//! context a caller creates, draws through, and destroys. It turns a grid
//! into rectangle and line geometry, or into a plain text frame.

use tracing::debug;

use crate::common::Position;
use crate::grid::{CellState, Grid};

/// One filled square to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub position: Position,
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub state: CellState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLine {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub rects: Vec<CellRect>,
    pub lines: Vec<GridLine>,
}

pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Wall => '#',
        CellState::Start => 'S',
        CellState::End => 'E',
        CellState::Frontier => 'o',
        CellState::Visited => 'x',
        CellState::Path => '*',
    }
}

#[derive(Debug)]
pub struct Surface {
    width: usize,
    rows: usize,
    frames_drawn: usize,
}

impl Surface {
    pub fn create(width: usize, rows: usize) -> Self {
        debug!("create {width}px surface for {rows} rows");
        Surface {
            width,
            rows,
            frames_drawn: 0,
        }
    }

    pub fn destroy(self) {
        debug!("destroy surface after {} frames", self.frames_drawn);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    fn gap(&self) -> usize {
        self.width / self.rows.max(1)
    }

    /// Geometry for one frame. A cell's x offset follows its row and its y
    /// offset follows its column, mirroring the pointer mapping.
    pub fn layout(&self, grid: &Grid) -> Frame {
        let gap = self.gap();
        let rects = grid
            .cells()
            .map(|cell| {
                let position = cell.position();
                CellRect {
                    position,
                    x: position.row * gap,
                    y: position.col * gap,
                    size: gap,
                    state: cell.state(),
                }
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows * 2);
        for i in 0..self.rows {
            lines.push(GridLine {
                from: (0, i * gap),
                to: (self.width, i * gap),
            });
            lines.push(GridLine {
                from: (i * gap, 0),
                to: (i * gap, self.width),
            });
        }

        Frame { rects, lines }
    }

    /// Text frame: one line per column index (screen y), one glyph per row
    /// index (screen x).
    pub fn draw_text(&mut self, grid: &Grid) -> String {
        let size = grid.size();
        let mut screen = vec![vec![' '; size]; size];
        for rect in self.layout(grid).rects {
            screen[rect.position.col][rect.position.row] = glyph(rect.state);
        }
        self.frames_drawn += 1;

        let mut text = String::with_capacity(size * (size + 1));
        for line in screen {
            text.extend(line);
            text.push('\n');
        }
        text
    }
}
