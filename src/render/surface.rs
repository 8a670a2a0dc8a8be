//! Drawing primitives and the surface abstraction

use crate::error::Result;
use crate::models::{Paint, RgbColor, Vec2};

/// Shadow glow drawn around a filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: RgbColor,
    pub blur: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
    pub paint: Paint,
    pub glow: Option<Glow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub paint: Paint,
    pub width: f64,
}

/// A 2D drawing target, accessed serially once per tick
pub trait Surface {
    /// Erase the whole surface
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying target rejects the operation.
    fn clear(&mut self) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the underlying target rejects the operation.
    fn fill_circle(&mut self, circle: &Circle) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the underlying target rejects the operation.
    fn stroke_line(&mut self, line: &Line) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn fill_circle(&mut self, circle: &Circle) -> Result<()> {
        (**self).fill_circle(circle)
    }

    fn stroke_line(&mut self, line: &Line) -> Result<()> {
        (**self).stroke_line(line)
    }
}
