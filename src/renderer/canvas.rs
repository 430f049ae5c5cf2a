//! Canvas 2D playback of display lists

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::DrawCommand;
use crate::sim::GridGeometry;

/// Owns the play surface and its 2D context
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the drawing buffer to the board
    pub fn resize(&self, geometry: &GridGeometry) {
        let (width, height) = geometry.canvas_size();
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
    }

    /// Replay a display list
    pub fn paint(&self, commands: &[DrawCommand<'_>]) {
        let ctx = &self.ctx;
        for command in commands {
            match *command {
                DrawCommand::Fill { rect, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
                }
                DrawCommand::Stroke {
                    rect,
                    color,
                    line_width,
                } => {
                    ctx.set_line_width(line_width);
                    ctx.set_stroke_style_str(color);
                    ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
                }
            }
        }
    }
}
