//! HUD text: score line and end-of-round overlay

use crate::sim::{GamePhase, GameState};

const OVER_MESSAGE: &str = "Game Over!<br><small>Tap or Press Any Key<br>to Restart</small>";
const WON_MESSAGE: &str =
    "\u{1F389} You Win! \u{1F389}<br><small>Tap or Press Any Key<br>to Play Again</small>";

/// "Score: {score} / {target}"
pub fn score_text(state: &GameState) -> String {
    format!("Score: {} / {}", state.score, state.target_score)
}

/// Overlay HTML for a finished round, `None` while running
pub fn overlay_html(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Running => None,
        GamePhase::Over => Some(OVER_MESSAGE),
        GamePhase::Won => Some(WON_MESSAGE),
    }
}
