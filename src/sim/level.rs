//! Brick layouts
//!
//! A level is a grid of cells; every cell equal to 1 becomes a brick on a
//! fixed 80x24 pitch, starting 60 units below the top of the field.

use glam::Vec2;
use serde::Deserialize;

use super::state::Brick;
use crate::consts::{BRICK_HEIGHT, BRICK_TOP_OFFSET, BRICK_WIDTH};

/// The built-in first level
pub const LEVEL_1: [[u8; 10]; 4] = [
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// A grid of cells, row-major, top row first
///
/// Cells hold any JSON number; only cells equal to 1 become bricks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Level {
    pub rows: Vec<Vec<f64>>,
}

impl Level {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// The built-in first level
    pub fn level_1() -> Self {
        Self::new(
            LEVEL_1
                .iter()
                .map(|row| row.iter().map(|&cell| f64::from(cell)).collect())
                .collect(),
        )
    }

    /// Parse a level from a JSON array of rows, e.g. `[[0,1],[1,0]]`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a level from a JSON file, falling back to level 1 (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(level) => {
                    log::info!("Loaded level from {}", path);
                    level
                }
                Err(e) => {
                    log::warn!("Ignoring level file {}: {}", path, e);
                    Self::level_1()
                }
            },
            Err(e) => {
                log::warn!("Could not read level file {}: {}", path, e);
                Self::level_1()
            }
        }
    }

    /// Number of bricks this level will produce
    pub fn brick_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&cell| cell == 1.0).count()
    }
}

/// Turn a level grid into bricks, row-major (top to bottom, left to right).
///
/// Cells other than 1 are empty. Brick ids start at 1.
pub fn build_level(level: &Level) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(level.brick_count());

    for (row_index, row) in level.rows.iter().enumerate() {
        for (col_index, &cell) in row.iter().enumerate() {
            if cell != 1.0 {
                continue;
            }
            let pos = Vec2::new(
                BRICK_WIDTH * col_index as f32,
                BRICK_TOP_OFFSET + BRICK_HEIGHT * row_index as f32,
            );
            bricks.push(Brick::new(bricks.len() as u32 + 1, pos));
        }
    }

    log::info!("Built level with {} bricks", bricks.len());
    bricks
}
