//! Simulated points: particles, network nodes and hubs

use serde::{Deserialize, Serialize};

use crate::error::{BackdropError, Result};

/// Position or velocity in surface space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Point at fraction `t` of the way from `self` to `other`
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Visual category, selects fill colour and connection styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Background particle field
    #[default]
    Particle,
    /// Ordinary network node
    Node,
    /// Highlighted network node; lines touching it take the hub colour
    Hub,
}

/// A single simulated point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub opacity: f64,
    pub category: Category,
}

impl Entity {
    /// Creates an entity after checking that every field is finite and
    /// radius/opacity are in range
    ///
    /// # Errors
    ///
    /// Returns [`BackdropError::InvalidConfig`] on non-finite position or
    /// velocity, a negative radius, or opacity outside `[0, 1]`.
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        radius: f64,
        opacity: f64,
        category: Category,
    ) -> Result<Self> {
        if !position.is_finite() {
            return Err(BackdropError::invalid_config(format!(
                "entity position must be finite, got ({}, {})",
                position.x, position.y
            )));
        }
        if !velocity.is_finite() {
            return Err(BackdropError::invalid_config(format!(
                "entity velocity must be finite, got ({}, {})",
                velocity.x, velocity.y
            )));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(BackdropError::invalid_config(format!(
                "entity radius must be finite and >= 0, got {radius}"
            )));
        }
        if !(0.0..=1.0).contains(&opacity) {
            return Err(BackdropError::invalid_config(format!(
                "entity opacity must be in [0, 1], got {opacity}"
            )));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            opacity,
            category,
        })
    }

    pub const fn is_hub(&self) -> bool {
        matches!(self.category, Category::Hub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 40.0);
        assert!((a.distance(&b) - 50.0).abs() < f64::EPSILON);
        assert!((b.distance(&a) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vec2::new(10.0, 20.0);
        let b = Vec2::new(30.0, 60.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_entity_new_ok() -> Result<()> {
        let entity = Entity::new(
            Vec2::new(5.0, 6.0),
            Vec2::new(0.1, -0.2),
            2.0,
            0.5,
            Category::Hub,
        )?;
        assert!(entity.is_hub());
        assert_eq!(entity.position, Vec2::new(5.0, 6.0));
        Ok(())
    }

    #[test]
    fn test_entity_rejects_nan_position() {
        let result = Entity::new(
            Vec2::new(f64::NAN, 0.0),
            Vec2::default(),
            1.0,
            0.5,
            Category::Particle,
        );
        assert!(matches!(result, Err(BackdropError::InvalidConfig(msg)) if msg.contains("position")));
    }

    #[test]
    fn test_entity_rejects_opacity_out_of_range() {
        let result = Entity::new(
            Vec2::default(),
            Vec2::default(),
            1.0,
            1.5,
            Category::Node,
        );
        assert!(matches!(result, Err(BackdropError::InvalidConfig(msg)) if msg.contains("opacity")));
    }

    #[test]
    fn test_category_serde_lowercase() -> std::result::Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Category::Hub)?, "\"hub\"");
        let parsed: Category = serde_json::from_str("\"node\"")?;
        assert_eq!(parsed, Category::Node);
        Ok(())
    }
}
