//! Game session - the turn loop around the pool
//!
//! Hosts drive play through two phases: **Selection**, where a shooter may
//! be picked (and re-picked) from the available set, and **ShooterActive**,
//! where the chosen shooter runs. The session falls back to Selection the
//! moment the active shooter retires. It also tracks level progress as a
//! pixel count captured when the session is created.

use pixel_blast_core::GridStore;
use pixel_blast_types::{Color, Position};

use crate::events::GameEvent;
use crate::pool::ShooterPool;

/// The session's turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the host to pick the next shooter.
    Selection,
    /// A shooter is bound to the grid and running.
    ShooterActive,
}

/// Turn controller and progress tracker over a [`ShooterPool`].
#[derive(Debug)]
pub struct GameSession {
    pool: ShooterPool,
    phase: TurnPhase,
    /// Index into the pool's available set, held during Selection.
    selected: Option<usize>,
    /// Layer count of the freshly loaded grid.
    total_pixels: u32,
}

impl GameSession {
    /// Create a session over a populated grid.
    pub fn new(grid: GridStore) -> Self {
        let total_pixels = grid.total_layers();
        Self {
            pool: ShooterPool::new(grid),
            phase: TurnPhase::Selection,
            selected: None,
            total_pixels,
        }
    }

    /// The underlying pool (read access).
    pub fn pool(&self) -> &ShooterPool {
        &self.pool
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The shooter picked during Selection, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Register an event handler on the pool.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.pool.subscribe(handler);
    }

    /// Add a shooter to the available set.
    pub fn add_shooter(&mut self, color: Color, ammo: u32) {
        self.pool.add(color, ammo);
    }

    /// Seed shooters from the grid composition; clears any selection.
    pub fn seed_shooters(&mut self) {
        self.pool.seed_from_grid();
        self.selected = None;
    }

    /// Pick an available shooter. Fails outside Selection or for an index
    /// out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if self.phase != TurnPhase::Selection {
            return false;
        }
        if index >= self.pool.available().len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Clear the current selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Activate the selected shooter and enter ShooterActive.
    ///
    /// Fails without a selection, outside Selection, or when the pool
    /// refuses the activation.
    pub fn activate_selected(&mut self) -> bool {
        if self.phase != TurnPhase::Selection {
            return false;
        }
        let Some(index) = self.selected else {
            return false;
        };
        if !self.pool.activate(index) {
            return false;
        }

        self.selected = None;
        self.phase = TurnPhase::ShooterActive;
        true
    }

    /// Run one step of the active shooter; drops back to Selection when the
    /// shooter retires.
    pub fn execute_step(&mut self) -> Vec<Position> {
        let destroyed = self.pool.execute_step();
        if !self.pool.has_active() {
            self.phase = TurnPhase::Selection;
        }
        destroyed
    }

    /// Run the active shooter to completion and return to Selection.
    pub fn execute_to_completion(&mut self) -> Vec<Position> {
        let destroyed = self.pool.execute_to_completion();
        self.phase = TurnPhase::Selection;
        destroyed
    }

    /// Pixels in the level when the session started.
    pub fn total_pixels(&self) -> u32 {
        self.total_pixels
    }

    /// Pixels still on the grid.
    pub fn remaining_pixels(&self) -> u32 {
        self.pool.grid().total_layers()
    }

    /// Cleared share of the level, 0.0 to 100.0. An empty level reports 0.0.
    pub fn completion_percentage(&self) -> f32 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        let cleared = self.total_pixels - self.remaining_pixels();
        cleared as f32 / self.total_pixels as f32 * 100.0
    }

    /// Whether the level is cleared.
    pub fn is_complete(&self) -> bool {
        self.pool.is_won()
    }

    /// Clear pool state and selection; back to Selection. The grid is left
    /// untouched.
    pub fn reset(&mut self) {
        self.pool.reset();
        self.selected = None;
        self.phase = TurnPhase::Selection;
    }
}
