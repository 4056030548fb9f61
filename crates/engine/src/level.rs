//! Level layout loading
//!
//! The host hands the kernel a populated grid. [`LevelLayout`] is the
//! declarative form of that handoff: dimensions plus a sparse list of cell
//! entries, each an ordered bottom-to-top color list. `build()` validates
//! the document and materializes a [`GridStore`]; violations come back as
//! structured [`LevelError`]s so the host can report what was wrong.
//!
//! Documents serialize as JSON with lowercase color names:
//!
//! ```json
//! {
//!   "rows": 8,
//!   "columns": 8,
//!   "cells": [
//!     { "row": 2, "column": 3, "layers": ["blue", "red"] }
//!   ]
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pixel_blast_core::GridStore;
use pixel_blast_types::{Color, Position, MAX_GRID_SIZE, MAX_LAYERS, MIN_GRID_SIZE};

/// Why a layout document was rejected.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("grid dimensions {rows}x{columns} outside supported range {min}..={max}",
        min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    DimensionsOutOfRange { rows: u8, columns: u8 },

    #[error("cell ({row}, {column}) lies outside the {rows}x{columns} grid")]
    CellOutOfBounds {
        row: u8,
        column: u8,
        rows: u8,
        columns: u8,
    },

    #[error("cell ({row}, {column}) appears more than once")]
    DuplicateCell { row: u8, column: u8 },

    #[error("cell ({row}, {column}) defines {count} layers, maximum is {max}", max = MAX_LAYERS)]
    TooManyLayers { row: u8, column: u8, count: usize },

    #[error("failed to parse level document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serde-facing color names (lowercase in documents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    Blue,
    Yellow,
    Green,
    Orange,
    Purple,
    Black,
    White,
}

impl From<ColorName> for Color {
    fn from(name: ColorName) -> Self {
        match name {
            ColorName::Red => Color::Red,
            ColorName::Blue => Color::Blue,
            ColorName::Yellow => Color::Yellow,
            ColorName::Green => Color::Green,
            ColorName::Orange => Color::Orange,
            ColorName::Purple => Color::Purple,
            ColorName::Black => Color::Black,
            ColorName::White => Color::White,
        }
    }
}

impl From<Color> for ColorName {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => ColorName::Red,
            Color::Blue => ColorName::Blue,
            Color::Yellow => ColorName::Yellow,
            Color::Green => ColorName::Green,
            Color::Orange => ColorName::Orange,
            Color::Purple => ColorName::Purple,
            Color::Black => ColorName::Black,
            Color::White => ColorName::White,
        }
    }
}

/// One cell's layers, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellLayers {
    pub row: u8,
    pub column: u8,
    pub layers: Vec<ColorName>,
}

/// A declarative level document: dimensions plus sparse cell entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub rows: u8,
    pub columns: u8,
    #[serde(default)]
    pub cells: Vec<CellLayers>,
}

impl LevelLayout {
    /// Start an empty layout of the given dimensions.
    pub fn new(rows: u8, columns: u8) -> Self {
        Self {
            rows,
            columns,
            cells: Vec::new(),
        }
    }

    /// Add a cell entry (builder style), layers bottom to top.
    pub fn with_cell(mut self, row: u8, column: u8, layers: &[Color]) -> Self {
        self.cells.push(CellLayers {
            row,
            column,
            layers: layers.iter().map(|&c| ColorName::from(c)).collect(),
        });
        self
    }

    /// Parse a JSON layout document.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a JSON layout document.
    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the document and materialize the grid.
    pub fn build(&self) -> Result<GridStore, LevelError> {
        let dims_ok = |n: u8| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n);
        if !dims_ok(self.rows) || !dims_ok(self.columns) {
            return Err(LevelError::DimensionsOutOfRange {
                rows: self.rows,
                columns: self.columns,
            });
        }

        let mut grid = GridStore::new(self.rows, self.columns);
        let mut seen = HashSet::new();

        for entry in &self.cells {
            if entry.row >= self.rows || entry.column >= self.columns {
                return Err(LevelError::CellOutOfBounds {
                    row: entry.row,
                    column: entry.column,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
            if entry.layers.len() > MAX_LAYERS {
                return Err(LevelError::TooManyLayers {
                    row: entry.row,
                    column: entry.column,
                    count: entry.layers.len(),
                });
            }
            if !seen.insert((entry.row, entry.column)) {
                return Err(LevelError::DuplicateCell {
                    row: entry.row,
                    column: entry.column,
                });
            }

            let pos = Position::new(entry.row as i8, entry.column as i8);
            for &name in &entry.layers {
                grid.push(pos, Color::from(name));
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_reproduces_layer_order() {
        let grid = LevelLayout::new(8, 8)
            .with_cell(2, 3, &[Color::Blue, Color::Red])
            .build()
            .unwrap();

        let pos = Position::new(2, 3);
        assert_eq!(grid.peek_top(pos), Some(Color::Red));
        assert_eq!(
            grid.get_cell(pos).unwrap().layers(),
            &[Color::Blue, Color::Red]
        );
        assert_eq!(grid.total_layers(), 2);
    }

    #[test]
    fn dimensions_are_range_checked() {
        assert!(matches!(
            LevelLayout::new(4, 8).build(),
            Err(LevelError::DimensionsOutOfRange { .. })
        ));
        assert!(matches!(
            LevelLayout::new(8, 16).build(),
            Err(LevelError::DimensionsOutOfRange { .. })
        ));
        assert!(LevelLayout::new(5, 15).build().is_ok());
    }

    #[test]
    fn out_of_bounds_cell_is_rejected() {
        let result = LevelLayout::new(8, 8)
            .with_cell(8, 0, &[Color::Red])
            .build();
        assert!(matches!(result, Err(LevelError::CellOutOfBounds { .. })));
    }

    #[test]
    fn duplicate_cell_is_rejected() {
        let result = LevelLayout::new(8, 8)
            .with_cell(2, 3, &[Color::Red])
            .with_cell(2, 3, &[Color::Blue])
            .build();
        assert!(matches!(result, Err(LevelError::DuplicateCell { .. })));
    }

    #[test]
    fn layer_cap_is_enforced() {
        let layers = [Color::Red; 6];
        let result = LevelLayout::new(8, 8).with_cell(2, 3, &layers).build();
        assert!(matches!(
            result,
            Err(LevelError::TooManyLayers { count: 6, .. })
        ));
    }

    #[test]
    fn json_roundtrip_uses_lowercase_names() {
        let layout = LevelLayout::new(8, 8).with_cell(2, 3, &[Color::Blue, Color::Red]);
        let json = layout.to_json().unwrap();
        assert!(json.contains("\"blue\""));
        assert!(json.contains("\"red\""));

        let parsed = LevelLayout::from_json(&json).unwrap();
        assert_eq!(parsed, layout);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let result = LevelLayout::from_json("{ not json }");
        assert!(matches!(result, Err(LevelError::Parse(_))));
    }

    #[test]
    fn error_display_names_the_cell() {
        let err = LevelError::TooManyLayers {
            row: 2,
            column: 3,
            count: 6,
        };
        assert_eq!(
            err.to_string(),
            "cell (2, 3) defines 6 layers, maximum is 5"
        );
    }
}
