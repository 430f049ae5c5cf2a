//! Grid Snake - a touch-friendly Snake game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake movement, collisions, fruit)
//! - `renderer`: Display list generation and Canvas 2D playback
//! - `input`: Keyboard/swipe/button mapping to game commands
//! - `game`: Loop driver owning the authoritative game state
//! - `platform`: Browser glue (timer, DOM wiring)
//! - `settings`: Tunable gameplay and presentation constants

pub mod game;
pub mod hud;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Palette, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Delay between simulation ticks (ms)
    pub const TICK_MS: u32 = 120;
    /// Fruit needed to win a round
    pub const TARGET_SCORE: u32 = 10;
    /// Desired number of columns; the real count is derived from cell size
    pub const TARGET_COLUMNS: u32 = 20;
    /// Red border drawn inside the canvas (px)
    pub const BORDER_WIDTH: u32 = 6;
    /// Fraction of the smaller viewport side used by the play area
    pub const VIEWPORT_FILL: f64 = 0.98;
    /// Touch travel (px) below which a gesture counts as a tap
    pub const SWIPE_THRESHOLD: f64 = 20.0;
}
