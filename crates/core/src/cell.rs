//! Cell module - a bounded stack of colored layers
//!
//! Each grid cell holds up to 5 layers ordered bottom to top. Only the top
//! layer is visible and targetable; the layers beneath are revealed one at a
//! time as the top is destroyed. The stack lives inline (no heap) since the
//! bound is known.

use arrayvec::ArrayVec;

use pixel_blast_types::{Color, MAX_LAYERS};

/// A single grid cell: colored layers from bottom (index 0) to top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    layers: ArrayVec<Color, MAX_LAYERS>,
}

impl Cell {
    /// Create a new empty cell
    pub fn new() -> Self {
        Self {
            layers: ArrayVec::new(),
        }
    }

    /// Check whether the cell has no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers currently stacked (0 to 5)
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Push a layer on top of the stack.
    /// Returns false (no mutation) when the cell is already at capacity.
    pub fn push(&mut self, color: Color) -> bool {
        if self.layers.is_full() {
            return false;
        }
        self.layers.push(color);
        true
    }

    /// Remove and return the top layer, or None if the cell is empty.
    pub fn pop_top(&mut self) -> Option<Color> {
        self.layers.pop()
    }

    /// The top (visible) layer without removing it.
    pub fn peek_top(&self) -> Option<Color> {
        self.layers.last().copied()
    }

    /// All layers, bottom to top.
    pub fn layers(&self) -> &[Color] {
        &self.layers
    }
}
