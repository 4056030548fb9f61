//! Core simulation kernel - pure, deterministic, and testable
//!
//! This crate contains the grid data structure, the line-of-sight rule, and
//! the shooter state machine. It has **zero dependencies** on UI, networking,
//! or I/O, making it:
//!
//! - **Deterministic**: the same grid and shooter sequence always produces
//!   the same destruction order
//! - **Testable**: every operation returns plain values; nothing panics on
//!   out-of-range input
//! - **Portable**: runs headless in any host (terminal demo, GUI, tests)
//!
//! # Module Structure
//!
//! - [`cell`]: a bounded stack of colored layers (at most 5, bottom to top)
//! - [`grid`]: the rows x columns store of cells with aggregate queries
//! - [`sight`]: line-of-sight resolution down a single column
//! - [`shooter`]: the Idle → Active → Finished shooter state machine
//!
//! # Game Rules
//!
//! - A cell shows only its top layer; deeper layers become visible as the
//!   ones above them are destroyed.
//! - A shooter travels the lane (the grid's last row) column by column,
//!   starting before column 0.
//! - At each column the shooter fires at the first visible layer scanning
//!   from the far edge toward the lane. A matching top layer is destroyed;
//!   a non-matching one blocks the whole column.
//! - Each destroyed layer costs one unit of ammo. A shooter finishes when it
//!   runs out of ammo or walks off the end of the lane.
//!
//! # Example
//!
//! ```
//! use pixel_blast_core::{GridStore, Shooter};
//! use pixel_blast_types::{Color, Position};
//!
//! let mut grid = GridStore::new(8, 8);
//! grid.push(Position::new(2, 3), Color::Red);
//!
//! let mut shooter = Shooter::new(Color::Red, 5);
//! shooter.activate(&grid);
//! let destroyed = shooter.run_to_completion(&mut grid);
//!
//! assert_eq!(destroyed, vec![Position::new(2, 3)]);
//! assert_eq!(shooter.ammo(), 4);
//! assert!(grid.is_empty());
//! ```

pub mod cell;
pub mod grid;
pub mod shooter;
pub mod sight;

// Re-export commonly used types
pub use cell::Cell;
pub use grid::GridStore;
pub use shooter::{Shooter, ShooterPhase};
pub use sight::{find_target, resolve, LineOfSight};
