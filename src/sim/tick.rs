//! Fixed-step simulation tick
//!
//! Advances the snake exactly one cell. Input never reaches this function
//! directly: turns are queued in `pending_direction` and committed here, so
//! two turns between ticks can never fold the snake back onto itself.

use super::state::{GamePhase, GameState};

/// What stopped the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfHit,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round already over, nothing changed
    Idle,
    /// Moved one cell
    Moved,
    /// Ate the fruit and grew
    Ate,
    /// Ran into something; the round is over
    Collided(CollisionKind),
    /// Reached the target score or filled the board
    Won,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.is_terminal() {
        return TickOutcome::Idle;
    }

    state.direction = state.pending_direction;
    let new_head = state.head() + state.direction.delta();

    // Collisions leave the body exactly as it was before the tick
    if !state.in_bounds(new_head) {
        state.phase = GamePhase::Over;
        return TickOutcome::Collided(CollisionKind::Wall);
    }
    if state.occupies(new_head) {
        state.phase = GamePhase::Over;
        return TickOutcome::Collided(CollisionKind::SelfHit);
    }

    state.time_ticks += 1;
    state.snake.push_front(new_head);

    if state.fruit != Some(new_head) {
        state.snake.pop_back();
        return TickOutcome::Moved;
    }

    state.score += 1;
    if state.score >= state.target_score {
        state.fruit = None;
        state.phase = GamePhase::Won;
        return TickOutcome::Won;
    }

    state.fruit = state.respawn_fruit();
    if state.fruit.is_none() {
        state.phase = GamePhase::Won;
        return TickOutcome::Won;
    }

    TickOutcome::Ate
}
