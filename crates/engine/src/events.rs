//! Domain events and the observer dispatcher
//!
//! Hosts subscribe handlers; the pool emits events synchronously, from
//! within the call that caused them, in registration order. Events carry
//! owned snapshots of kernel data, so a handler can keep them past the turn
//! without holding any reference into live state.

use std::fmt;

use pixel_blast_types::{Color, Position};

/// A notification emitted by the shooter pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A shooter was bound to the grid and started its run.
    ShooterActivated { color: Color, ammo: u32 },
    /// One layer was destroyed at `position`.
    PixelDestroyed { position: Position },
    /// The active shooter finished and was retired; `destroyed` holds the
    /// positions from its final step.
    ShooterCompleted { color: Color, destroyed: Vec<Position> },
    /// Every cell in the grid is empty. Emitted once per clearing.
    GameWon,
}

/// Boxed event handler.
pub type EventHandler = Box<dyn FnMut(&GameEvent)>;

/// An ordered list of handlers invoked synchronously on every event.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<EventHandler>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers fire in registration order.
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver an event to every handler, in registration order.
    pub fn emit(&mut self, event: &GameEvent) {
        for handler in &mut self.handlers {
            handler(event);
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
