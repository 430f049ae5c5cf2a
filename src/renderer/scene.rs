//! Display list generation
//!
//! Turns a game state into an ordered list of rectangle fills and strokes.
//! Building the list is pure so it can be checked without a canvas; the
//! canvas backend only replays it.

use crate::settings::Palette;
use crate::sim::{Cell, GameState, GridGeometry};

/// Axis-aligned rectangle in canvas px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// One drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand<'a> {
    Fill {
        rect: Rect,
        color: &'a str,
    },
    Stroke {
        rect: Rect,
        color: &'a str,
        line_width: f64,
    },
}

/// Outline width drawn around each snake cell
const CELL_OUTLINE_WIDTH: f64 = 1.0;

fn cell_rect(geometry: &GridGeometry, cell: Cell) -> Rect {
    let (x, y) = geometry.cell_origin(cell);
    let size = geometry.cell_size as f64;
    Rect::new(x, y, size, size)
}

/// Build the frame for `state`
///
/// Works for finished rounds too: the frozen final position is drawn, and a
/// won round simply has no fruit.
pub fn build<'a>(
    state: &GameState,
    geometry: &GridGeometry,
    palette: &'a Palette,
) -> Vec<DrawCommand<'a>> {
    let (width, height) = geometry.canvas_size();
    let (width, height) = (width as f64, height as f64);
    let mut commands = Vec::with_capacity(3 + state.len() * 2);

    commands.push(DrawCommand::Fill {
        rect: Rect::new(0.0, 0.0, width, height),
        color: &palette.background,
    });

    // Stroke is centered on the path, so inset by half the line width
    if geometry.border > 0 {
        let border = geometry.border as f64;
        commands.push(DrawCommand::Stroke {
            rect: Rect::new(border / 2.0, border / 2.0, width - border, height - border),
            color: &palette.border,
            line_width: border,
        });
    }

    if let Some(fruit) = state.fruit {
        commands.push(DrawCommand::Fill {
            rect: cell_rect(geometry, fruit),
            color: &palette.fruit,
        });
    }

    for (i, &cell) in state.snake.iter().enumerate() {
        let rect = cell_rect(geometry, cell);
        let color = if i == 0 { palette.head.as_str() } else { palette.body.as_str() };
        commands.push(DrawCommand::Fill { rect, color });
        commands.push(DrawCommand::Stroke {
            rect,
            color: &palette.outline,
            line_width: CELL_OUTLINE_WIDTH,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;
    use glam::IVec2;

    fn snake_state(geometry: &GridGeometry) -> GameState {
        let mut state = GameState::with_snake(
            geometry,
            10,
            1,
            [IVec2::new(3, 2), IVec2::new(2, 2), IVec2::new(1, 2)],
            Direction::Right,
        );
        state.fruit = Some(IVec2::new(7, 7));
        state
    }

    #[test]
    fn test_scene_layout() {
        let geometry = GridGeometry::new(10, 10, 20, 6);
        let palette = Palette::default();
        let state = snake_state(&geometry);
        let commands = build(&state, &geometry, &palette);

        // background + border + fruit + 3 cells * (fill + outline)
        assert_eq!(commands.len(), 9);

        assert_eq!(
            commands[0],
            DrawCommand::Fill {
                rect: Rect::new(0.0, 0.0, 212.0, 212.0),
                color: "#222"
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Stroke {
                rect: Rect::new(3.0, 3.0, 206.0, 206.0),
                color: "red",
                line_width: 6.0
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Fill {
                rect: Rect::new(146.0, 146.0, 20.0, 20.0),
                color: "red"
            }
        );
    }

    #[test]
    fn test_head_is_distinct() {
        let geometry = GridGeometry::new(10, 10, 20, 0);
        let palette = Palette::default();
        let state = snake_state(&geometry);
        let fills: Vec<&str> = build(&state, &geometry, &palette)
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { color, .. } => Some(color),
                DrawCommand::Stroke { .. } => None,
            })
            .collect();

        // background, fruit, head, body, body
        assert_eq!(fills, vec!["#222", "red", "#0f0", "#8f8", "#8f8"]);
    }

    #[test]
    fn test_won_round_has_no_fruit() {
        let geometry = GridGeometry::new(10, 10, 20, 0);
        let palette = Palette::default();
        let mut state = snake_state(&geometry);
        state.fruit = None;
        state.phase = crate::sim::GamePhase::Won;

        let commands = build(&state, &geometry, &palette);
        // background + 3 cells * 2, no border with zero width
        assert_eq!(commands.len(), 7);
    }
}
