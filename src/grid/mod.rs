//! Decorative contribution grid filled from a fixed seed.

pub mod rng;

use std::fmt;

use crate::constants::*;
use crate::dom::{Document, NodeId};

pub use rng::Mulberry32;

/// Cell intensity, 0 (empty) to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(u8);

impl Level {
    pub const EMPTY: Level = Level(0);

    /// Classifies a draw by the highest threshold it exceeds.
    pub fn from_draw(r: f64) -> Self {
        let exceeded = LEVEL_THRESHOLDS.iter().rposition(|cut| r > *cut);
        Level(exceeded.map_or(0, |i| i as u8 + 1))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn class_name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("level-1"),
            2 => Some("level-2"),
            3 => Some("level-3"),
            4 => Some("level-4"),
            _ => None,
        }
    }

    pub fn from_classes(classes: &[String]) -> Self {
        (1..=4)
            .map(Level)
            .rev()
            .find(|level| {
                level
                    .class_name()
                    .is_some_and(|name| classes.iter().any(|c| c == name))
            })
            .unwrap_or(Level::EMPTY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Level>,
}

impl Grid {
    /// The page's 7x26 grid for `seed`.
    pub fn generate(seed: u32) -> Self {
        Self::with_size(GRID_ROWS, GRID_COLS, seed)
    }

    /// Draws one value per cell in row-major order.
    pub fn with_size(rows: usize, cols: usize, seed: u32) -> Self {
        let mut rng = Mulberry32::new(seed);
        let cells = (0..rows * cols)
            .map(|_| Level::from_draw(rng.next_unit()))
            .collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn level(&self, row: usize, col: usize) -> Option<Level> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Option<&[Level]> {
        if row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols..(row + 1) * self.cols)
    }

    fn each_row(&self) -> impl Iterator<Item = &[Level]> {
        (0..self.rows).filter_map(|r| self.row(r))
    }

    /// Appends one row element per grid row, each holding one cell element
    /// per column tagged with its level class.
    pub fn render(&self, doc: &mut Document, container: NodeId) {
        for levels in self.each_row() {
            let row = doc.create_element("div");
            doc.add_class(row, GRID_ROW_CLASS);
            for level in levels {
                let cell = doc.create_element("span");
                doc.add_class(cell, GRID_CELL_CLASS);
                if let Some(class) = level.class_name() {
                    doc.add_class(cell, class);
                }
                doc.append_child(row, cell);
            }
            doc.append_child(container, row);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for levels in self.each_row() {
            for level in levels {
                write!(f, "{}", level.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
