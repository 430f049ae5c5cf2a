//! Input mapping
//!
//! Translates raw browser input (key names, touch coordinates, button ids)
//! into [`Command`]s. Nothing here touches the game state; the [`Game`]
//! decides what a command means for the current phase.
//!
//! [`Game`]: crate::game::Game

use crate::sim::Direction;

/// A player intent, independent of where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Queue a turn (restarts instead when the round is over)
    Turn(Direction),
    /// Start a new round unconditionally
    Restart,
    /// Input with no gameplay meaning: restarts a finished round, otherwise ignored
    Any,
    /// Toggle the autopilot demo
    ToggleDemo,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn key_command(key: &str) -> Command {
    match key {
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        "i" | "I" => Command::ToggleDemo,
        _ => Command::Any,
    }
}

/// On-screen direction buttons: element id and the direction it sends
pub const BUTTONS: [(&str, Direction); 4] = [
    ("up", Direction::Up),
    ("down", Direction::Down),
    ("left", Direction::Left),
    ("right", Direction::Right),
];

/// Classify a touch gesture by its dominant axis
///
/// Travel of at most `threshold` px along the dominant axis is a tap and
/// yields `None`. Screen y grows downward.
pub fn swipe_direction(start: (f64, f64), end: (f64, f64), threshold: f64) -> Option<Direction> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(Direction::Right)
        } else if dx < -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy > threshold {
        Some(Direction::Down)
    } else if dy < -threshold {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Remembers where a touch began until it ends
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the gesture: a swipe becomes a turn, a tap becomes [`Command::Any`]
    pub fn end(&mut self, x: f64, y: f64, threshold: f64) -> Command {
        match self.start.take() {
            Some(start) => match swipe_direction(start, (x, y), threshold) {
                Some(dir) => Command::Turn(dir),
                None => Command::Any,
            },
            None => Command::Any,
        }
    }
}
