//! Entity and colour types shared by simulation and rendering

pub mod colors;
pub mod entity;

pub use colors::{Palette, Paint, RgbColor};
pub use entity::{Category, Entity, Vec2};
