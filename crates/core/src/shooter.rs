//! Shooter module - the lane-walking, color-matched agent
//!
//! A shooter is bound to one color and an ammo budget. Once activated
//! against a grid it advances along the lane one column at a time, starting
//! before column 0, and fires at whatever its line of sight resolves to at
//! the current column. Destroying a layer can reveal another matching layer
//! in the same column, so a single step may fire several times.
//!
//! Lifecycle is strictly Idle → Active → Finished; a finished shooter never
//! mutates anything again. All "cannot do that" conditions are ordinary
//! return values.

use crate::grid::GridStore;
use crate::sight;
use pixel_blast_types::{Color, Position};

/// Shooter lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterPhase {
    /// Created, not yet bound to a grid.
    Idle,
    /// Bound and advancing along the lane.
    Active,
    /// Terminal; no further mutation permitted.
    Finished,
}

/// A color-matched shooter with a bounded ammo budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shooter {
    color: Color,
    ammo: u32,
    /// Current lane column; -1 before the first advance.
    column: i8,
    phase: ShooterPhase,
    /// Lane length captured at activation.
    lane_columns: u8,
}

impl Shooter {
    /// Create an idle shooter for `color` with `ammo` shots.
    pub fn new(color: Color, ammo: u32) -> Self {
        Self {
            color,
            ammo,
            column: -1,
            phase: ShooterPhase::Idle,
            lane_columns: 0,
        }
    }

    /// The shooter's color; fixed for its lifetime.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Remaining ammo; decremented by successful fires only.
    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    /// Current lane column (-1 before the lane).
    pub fn column(&self) -> i8 {
        self.column
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ShooterPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ShooterPhase::Idle
    }

    pub fn is_active(&self) -> bool {
        self.phase == ShooterPhase::Active
    }

    pub fn is_finished(&self) -> bool {
        self.phase == ShooterPhase::Finished
    }

    /// Bind the shooter to a grid and start it before column 0.
    ///
    /// No-op unless the shooter is Idle. The grid itself is passed to the
    /// firing calls; activation only captures the lane geometry.
    pub fn activate(&mut self, grid: &GridStore) {
        if self.phase != ShooterPhase::Idle {
            return;
        }
        self.lane_columns = grid.columns();
        self.column = -1;
        self.phase = ShooterPhase::Active;
    }

    /// Move one column along the lane.
    ///
    /// Returns true if the shooter moved. At the last column, or with ammo
    /// already spent, the shooter finishes instead and did not move.
    pub fn advance(&mut self) -> bool {
        if self.phase != ShooterPhase::Active {
            return false;
        }

        // Lane boundary is absolute, ammo or not.
        if self.column >= self.lane_columns as i8 - 1 {
            self.phase = ShooterPhase::Finished;
            return false;
        }

        if self.ammo == 0 {
            self.phase = ShooterPhase::Finished;
            return false;
        }

        self.column += 1;
        true
    }

    /// Check whether the current column holds a target without firing.
    pub fn has_target(&self, grid: &GridStore) -> bool {
        if self.phase != ShooterPhase::Active {
            return false;
        }
        sight::find_target(grid, self.column, self.color).is_some()
    }

    /// Fire at the current column's line-of-sight target.
    ///
    /// On success the target's top layer is removed, ammo drops by one, and
    /// the destroyed position is returned; spending the last unit finishes
    /// the shooter. Returns None (no mutation) when the shooter is not
    /// Active, has no ammo, or the column resolves to blocked or clear.
    pub fn fire(&mut self, grid: &mut GridStore) -> Option<Position> {
        if self.phase != ShooterPhase::Active || self.ammo == 0 {
            return None;
        }

        let target = sight::find_target(grid, self.column, self.color)?;
        grid.pop_top(target)?;

        self.ammo -= 1;
        if self.ammo == 0 {
            self.phase = ShooterPhase::Finished;
        }

        Some(target)
    }

    /// One movement step: advance, then fire while targets keep resolving.
    ///
    /// Firing repeats because destroying a layer can expose another matching
    /// layer in the same column (deeper in the same cell, or in a cell the
    /// emptied one was hiding). Returns the destroyed positions in
    /// destruction order; empty when the shooter did not move.
    pub fn step(&mut self, grid: &mut GridStore) -> Vec<Position> {
        let mut destroyed = Vec::new();

        if !self.advance() {
            return destroyed;
        }

        while let Some(position) = self.fire(grid) {
            destroyed.push(position);
        }

        destroyed
    }

    /// Step until the shooter finishes; all destroyed positions in order.
    pub fn run_to_completion(&mut self, grid: &mut GridStore) -> Vec<Position> {
        let mut destroyed = Vec::new();

        while self.is_active() {
            destroyed.extend(self.step(grid));
        }

        destroyed
    }
}
