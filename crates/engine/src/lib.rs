//! Engine module - the host-facing boundary around the simulation kernel
//!
//! Everything a host embeds: the shooter pool manager that drives turns and
//! emits domain events, the level layout loader that materializes a grid
//! from a declarative document, and the session controller that models the
//! select → activate → run turn loop with progress tracking.
//!
//! # Module Structure
//!
//! - [`events`]: domain event enum and the ordered synchronous dispatcher
//! - [`pool`]: [`ShooterPool`], which owns the grid, enforces the
//!   single-active-shooter rule, retires finished shooters, detects the win
//! - [`level`]: [`LevelLayout`], validated layout documents turned into a
//!   [`GridStore`]
//! - [`session`]: [`GameSession`], selection phase, turn flow, progress
//!
//! # Example
//!
//! ```
//! use pixel_blast_engine::{LevelLayout, ShooterPool};
//! use pixel_blast_types::Color;
//!
//! let grid = LevelLayout::new(8, 8)
//!     .with_cell(2, 3, &[Color::Red])
//!     .build()
//!     .expect("valid layout");
//!
//! let mut pool = ShooterPool::new(grid);
//! pool.seed_from_grid();
//! assert_eq!(pool.available().len(), 1);
//!
//! assert!(pool.activate(0));
//! let destroyed = pool.execute_to_completion();
//! assert_eq!(destroyed.len(), 1);
//! assert!(pool.is_won());
//! ```

pub mod events;
pub mod level;
pub mod pool;
pub mod session;

// Re-export commonly used types
pub use events::{EventDispatcher, GameEvent};
pub use level::{CellLayers, ColorName, LevelError, LevelLayout};
pub use pool::ShooterPool;
pub use session::{GameSession, TurnPhase};

// Convenience re-export for hosts that only pull in the engine crate.
pub use pixel_blast_core::GridStore;
