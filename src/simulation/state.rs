//! Entity collection and surface bounds
//!
//! The state owns every entity for the life of a backdrop. Entities are
//! created once by [`SimulationState::seed`] and afterwards only mutated in
//! place by the stepper; resizing changes the bounds but never reseeds.

use rand::Rng;

use crate::config::{BackdropConfig, ValueRange};
use crate::error::{BackdropError, Result};
use crate::models::{Category, Entity, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    entities: Vec<Entity>,
    width: f64,
    height: f64,
}

impl SimulationState {
    /// Seed `config.count` entities uniformly over a `width` x `height` surface
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation or the dimensions are
    /// not finite and positive.
    pub fn seed<R: Rng>(
        config: &BackdropConfig,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        check_dimensions(width, height)?;

        let entities = (0..config.count)
            .map(|_| seed_entity(config, width, height, rng))
            .collect::<Vec<_>>();

        tracing::debug!(
            count = entities.len(),
            hubs = entities.iter().filter(|e| e.is_hub()).count(),
            width,
            height,
            "seeded simulation"
        );

        Ok(Self {
            entities,
            width,
            height,
        })
    }

    /// Build a state from explicit entities
    ///
    /// # Errors
    ///
    /// Returns [`BackdropError::InvalidDimensions`] for non-finite or
    /// non-positive dimensions.
    pub fn from_entities(entities: Vec<Entity>, width: f64, height: f64) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            entities,
            width,
            height,
        })
    }

    /// Update the surface bounds; entities keep their positions
    ///
    /// # Errors
    ///
    /// Returns [`BackdropError::InvalidDimensions`] and leaves the state
    /// untouched if the new size is invalid.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Mutable entities plus bounds, for the stepper only
    pub(crate) fn entities_mut(&mut self) -> (&mut [Entity], f64, f64) {
        (&mut self.entities, self.width, self.height)
    }
}

fn check_dimensions(width: f64, height: f64) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(BackdropError::InvalidDimensions { width, height })
    }
}

fn seed_entity<R: Rng>(config: &BackdropConfig, width: f64, height: f64, rng: &mut R) -> Entity {
    let category = if config.hub_ratio > 0.0 && rng.gen_bool(config.hub_ratio) {
        Category::Hub
    } else {
        config.category
    };
    let radius = sample(rng, config.radius);
    let radius = match category {
        Category::Hub => radius * config.hub_radius_scale,
        Category::Particle | Category::Node => radius,
    };

    Entity {
        position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
        velocity: Vec2::new(
            sample(rng, ValueRange::new(-config.speed, config.speed)),
            sample(rng, ValueRange::new(-config.speed, config.speed)),
        ),
        radius,
        opacity: sample(rng, config.opacity),
        category,
    }
}

/// Uniform sample from `[min, max)`; a degenerate range yields `min`
fn sample<R: Rng>(rng: &mut R, range: ValueRange) -> f64 {
    if range.max > range.min {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}
