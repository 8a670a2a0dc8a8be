//! [`Surface`] backed by a canvas 2D context

use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::context::get_2d_context;
use crate::error::{BackdropError, Result};
use crate::render::{Circle, Line, Surface};

/// Draws onto an `HtmlCanvasElement`; clearing covers the canvas's current
/// pixel size, so it follows resizes without being told
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// # Errors
    ///
    /// Returns [`BackdropError::Canvas`] if no 2D context is available.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = get_2d_context(&canvas)?;
        Ok(Self { canvas, context })
    }

    pub const fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) -> Result<()> {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        Ok(())
    }

    fn fill_circle(&mut self, circle: &Circle) -> Result<()> {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU)
            .map_err(|e| BackdropError::Canvas(format!("failed to draw arc: {e:?}")))?;

        match circle.glow {
            Some(glow) => {
                ctx.set_shadow_color(&glow.color.to_css());
                ctx.set_shadow_blur(glow.blur);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        ctx.set_fill_style_str(&circle.paint.to_css());
        ctx.fill();
        Ok(())
    }

    fn stroke_line(&mut self, line: &Line) -> Result<()> {
        let ctx = &self.context;
        ctx.set_shadow_blur(0.0);
        ctx.begin_path();
        ctx.set_stroke_style_str(&line.paint.to_css());
        ctx.set_line_width(line.width);
        ctx.move_to(line.from.x, line.from.y);
        ctx.line_to(line.to.x, line.to.y);
        ctx.stroke();
        Ok(())
    }
}
