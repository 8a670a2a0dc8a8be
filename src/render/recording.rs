//! In-memory surface that records draw calls
//!
//! Holds the commands of the most recent frame: each `clear` starts a new
//! frame. Used by tests and by headless callers that want to inspect what a
//! tick would paint.

use super::surface::{Circle, Line, Surface};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle(Circle),
    Line(Line),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingSurface {
    /// Commands since the last `clear`, including that `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            DrawCommand::Clear | DrawCommand::Line(_) => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            DrawCommand::Clear | DrawCommand::Circle(_) => None,
        })
    }

    /// Number of frames started (times `clear` was called)
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
        Ok(())
    }

    fn fill_circle(&mut self, circle: &Circle) -> Result<()> {
        self.commands.push(DrawCommand::Circle(*circle));
        Ok(())
    }

    fn stroke_line(&mut self, line: &Line) -> Result<()> {
        self.commands.push(DrawCommand::Line(*line));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Paint, Palette, Vec2};

    #[test]
    fn test_clear_starts_new_frame() -> Result<()> {
        let mut surface = RecordingSurface::default();
        surface.clear()?;
        surface.stroke_line(&Line {
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(1.0, 1.0),
            paint: Paint::new(Palette::BASE, 0.1),
            width: 0.5,
        })?;
        assert_eq!(surface.lines().count(), 1);

        surface.clear()?;
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
        assert_eq!(surface.frames(), 2);
        Ok(())
    }
}
