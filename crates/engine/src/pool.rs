//! Shooter pool - turn manager over the grid and shooter collections
//!
//! The pool owns the level's grid and two disjoint ordered collections of
//! shooters: available (waiting or running) and used (retired). At most one
//! shooter is active at any instant; activation is refused, not queued,
//! while another is running. The pool drives step-wise or full-path
//! execution, emits domain events, and detects the win.

use pixel_blast_core::{GridStore, Shooter};
use pixel_blast_types::{Color, Position};

use crate::events::{EventDispatcher, GameEvent};

/// Owns the grid and the shooter collections; enforces turn order.
#[derive(Debug, Default)]
pub struct ShooterPool {
    grid: GridStore,
    available: Vec<Shooter>,
    used: Vec<Shooter>,
    /// Index into `available` while a shooter is running.
    active: Option<usize>,
    events: EventDispatcher,
    /// Latch: the win notification fires once per clearing.
    win_announced: bool,
}

impl ShooterPool {
    /// Create a pool over an already-populated grid.
    pub fn new(grid: GridStore) -> Self {
        Self {
            grid,
            available: Vec::new(),
            used: Vec::new(),
            active: None,
            events: EventDispatcher::new(),
            win_announced: false,
        }
    }

    /// The level grid.
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Shooters waiting to run (the active one included until retirement).
    pub fn available(&self) -> &[Shooter] {
        &self.available
    }

    /// Retired shooters, in retirement order.
    pub fn used(&self) -> &[Shooter] {
        &self.used
    }

    /// The currently running shooter, if any.
    pub fn active(&self) -> Option<&Shooter> {
        self.active.map(|idx| &self.available[idx])
    }

    /// Whether a shooter is currently running.
    pub fn has_active(&self) -> bool {
        matches!(self.active, Some(idx) if self.available[idx].is_active())
    }

    /// Register an event handler (fires in registration order).
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.events.subscribe(handler);
    }

    /// Append an idle shooter to the available set.
    pub fn add(&mut self, color: Color, ammo: u32) {
        self.available.push(Shooter::new(color, ammo));
    }

    /// Rebuild the pool from the grid's composition: one shooter per color
    /// present, with ammo equal to that color's total layer count at all
    /// depths. Replaces any prior pool contents.
    pub fn seed_from_grid(&mut self) {
        self.available.clear();
        self.used.clear();
        self.active = None;
        self.win_announced = false;

        for color in self.grid.colors_present() {
            let ammo = self.grid.count_color(color);
            self.available.push(Shooter::new(color, ammo));
        }
    }

    /// Activate the available shooter at `index`.
    ///
    /// Fails (no mutation) while another shooter is active, when the index
    /// is out of range, or when the shooter is not idle.
    pub fn activate(&mut self, index: usize) -> bool {
        if self.has_active() {
            return false;
        }
        let Some(shooter) = self.available.get_mut(index) else {
            return false;
        };
        if !shooter.is_idle() {
            return false;
        }

        shooter.activate(&self.grid);
        self.active = Some(index);

        let (color, ammo) = (self.available[index].color(), self.available[index].ammo());
        self.events.emit(&GameEvent::ShooterActivated { color, ammo });
        true
    }

    /// Run one step of the active shooter.
    ///
    /// Emits `PixelDestroyed` per destroyed position in order; when the step
    /// finishes the shooter, retires it (available → used) and emits
    /// `ShooterCompleted` with the final step's positions; then checks the
    /// grid and announces the win at most once per clearing. Returns the
    /// positions destroyed by this call; empty when nothing is active.
    pub fn execute_step(&mut self) -> Vec<Position> {
        let Some(idx) = self.active else {
            return Vec::new();
        };

        let destroyed = self.available[idx].step(&mut self.grid);

        for &position in &destroyed {
            self.events.emit(&GameEvent::PixelDestroyed { position });
        }

        if self.available[idx].is_finished() {
            self.retire_active(&destroyed);
        }

        self.check_win();
        destroyed
    }

    /// Run the active shooter's complete path.
    ///
    /// Returns all destroyed positions in call order; empty when nothing is
    /// active.
    pub fn execute_to_completion(&mut self) -> Vec<Position> {
        let mut all_destroyed = Vec::new();

        while self.has_active() {
            all_destroyed.extend(self.execute_step());
        }

        all_destroyed
    }

    /// Whether the level is cleared. Independent of whether the win
    /// notification has fired.
    pub fn is_won(&self) -> bool {
        self.grid.is_empty()
    }

    /// Clear the active reference and both collections. The grid is left
    /// untouched.
    pub fn reset(&mut self) {
        self.active = None;
        self.available.clear();
        self.used.clear();
        self.win_announced = false;
    }

    /// Move the active shooter to the used set and notify.
    fn retire_active(&mut self, destroyed_in_last_step: &[Position]) {
        let Some(idx) = self.active.take() else {
            return;
        };

        let shooter = self.available.remove(idx);
        let color = shooter.color();
        self.used.push(shooter);

        self.events.emit(&GameEvent::ShooterCompleted {
            color,
            destroyed: destroyed_in_last_step.to_vec(),
        });
    }

    fn check_win(&mut self) {
        if !self.win_announced && self.grid.is_empty() {
            self.win_announced = true;
            self.events.emit(&GameEvent::GameWon);
        }
    }
}
