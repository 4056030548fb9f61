//! Line-of-sight resolution
//!
//! A shooter on the lane looks up its current column toward the far edge of
//! the grid. Visibility is decided by the first non-empty cell scanning from
//! row 0 down to (but excluding) the lane row: a matching top layer is a
//! target, a non-matching one blocks the entire column no matter what sits
//! beneath or beyond it. The resolution is a pure read and must be repeated
//! after every destructive change, since removing a top layer can reveal a
//! new visible layer in the same column.

use crate::grid::GridStore;
use pixel_blast_types::{Color, Position};

/// Outcome of resolving a column for a shooter color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOfSight {
    /// The first visible layer matches; fire here.
    Target(Position),
    /// The first visible layer does not match and shields the column.
    Blocked(Position),
    /// No visible layer in the column (or the column is out of the lane).
    Clear,
}

impl LineOfSight {
    /// The target position when resolution succeeded.
    pub fn target(&self) -> Option<Position> {
        match self {
            LineOfSight::Target(pos) => Some(*pos),
            _ => None,
        }
    }
}

/// Resolve the line of sight for `color` in `column`.
///
/// Scans from the far edge (row 0) toward the lane; the lane row itself is
/// never scanned. Out-of-range columns, including the pre-lane column -1,
/// resolve to [`LineOfSight::Clear`].
pub fn resolve(grid: &GridStore, column: i8, color: Color) -> LineOfSight {
    if column < 0 || column >= grid.columns() as i8 {
        return LineOfSight::Clear;
    }

    for row in 0..grid.lane_row() {
        let pos = Position::new(row, column);
        if let Some(top) = grid.peek_top(pos) {
            if top == color {
                return LineOfSight::Target(pos);
            }
            return LineOfSight::Blocked(pos);
        }
    }

    LineOfSight::Clear
}

/// The position to fire at, if resolution succeeds.
pub fn find_target(grid: &GridStore, column: i8, color: Color) -> Option<Position> {
    resolve(grid, column, color).target()
}
