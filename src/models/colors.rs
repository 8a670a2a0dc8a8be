//! Colour values and the per-category style table

use serde::{Deserialize, Serialize};

use super::entity::Category;

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to CSS rgb() string
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to CSS rgba() string; alpha is clamped to [0, 1]
    pub fn to_css_alpha(&self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// A colour with an alpha, as applied to one fill or stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: RgbColor,
    pub alpha: f64,
}

impl Paint {
    pub const fn new(color: RgbColor, alpha: f64) -> Self {
        Self { color, alpha }
    }

    pub fn to_css(&self) -> String {
        self.color.to_css_alpha(self.alpha)
    }
}

/// Base colours for the two visual systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill and line colour for particles and ordinary nodes
    pub base: RgbColor,
    /// Fill colour for hubs and for any line touching a hub
    pub hub: RgbColor,
}

impl Palette {
    pub const BASE: RgbColor = RgbColor::new(102, 126, 234);
    pub const HUB: RgbColor = RgbColor::new(0, 255, 136);

    /// Fill colour for an entity of `category`
    pub const fn fill(&self, category: Category) -> RgbColor {
        match category {
            Category::Particle | Category::Node => self.base,
            Category::Hub => self.hub,
        }
    }

    /// Stroke colour for a connection between `a` and `b`
    pub const fn line(&self, a: Category, b: Category) -> RgbColor {
        match (a, b) {
            (Category::Hub, _) | (_, Category::Hub) => self.hub,
            _ => self.base,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Self::BASE,
            hub: Self::HUB,
        }
    }
}
