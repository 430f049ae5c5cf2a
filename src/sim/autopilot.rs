//! Demo mode steering
//!
//! Greedy chase toward the fruit. Moves that would crash are never chosen
//! while a safe one exists, and moves into a pocket smaller than the snake
//! are only taken when nothing roomier is available.

use std::collections::{HashSet, VecDeque};

use super::grid::Cell;
use super::state::{Direction, GameState};

/// Choose the next turn for the snake, or `None` when the round is over
pub fn steer(state: &GameState) -> Option<Direction> {
    if state.is_terminal() {
        return None;
    }

    let head = state.head();
    let target = state.fruit.unwrap_or(head);

    Direction::ALL
        .into_iter()
        .filter(|&dir| dir != state.direction.opposite())
        .filter_map(|dir| {
            let next = head + dir.delta();
            if !state.in_bounds(next) || state.occupies(next) {
                return None;
            }
            let room = reachable_cells(state, next, state.len());
            let roomy = room >= state.len();
            let distance = (target - next).abs().element_sum();
            let keeps_heading = dir == state.direction;
            Some((dir, roomy, distance, keeps_heading))
        })
        // Prefer room, then closeness, then not turning
        .max_by(|a, b| {
            a.1.cmp(&b.1)
                .then(b.2.cmp(&a.2))
                .then(a.3.cmp(&b.3))
        })
        .map(|(dir, ..)| dir)
}

/// Flood fill from `start` over free cells, stopping early at `limit`
fn reachable_cells(state: &GameState, start: Cell, limit: usize) -> usize {
    let mut seen: HashSet<Cell> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        if seen.len() >= limit {
            break;
        }
        for dir in Direction::ALL {
            let next = cell + dir.delta();
            if state.in_bounds(next) && !state.occupies(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen.len()
}
