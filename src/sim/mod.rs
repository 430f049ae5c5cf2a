//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod grid;
pub mod spawn;
pub mod state;
pub mod tick;

pub use grid::{Cell, GridGeometry};
pub use spawn::spawn_fruit;
pub use state::{Direction, GamePhase, GameState};
pub use tick::{CollisionKind, TickOutcome, tick};
