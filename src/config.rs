//! Backdrop configuration: the two built-in presets and JSON overrides
//!
//! The presets are the fixed constants each visual system runs with.
//! Overrides are layered over a preset from a JSON object and validated
//! before use.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BackdropError, Result};
use crate::models::{Category, Palette};
use crate::simulation::BoundaryPolicy;

/// Half-open `[min, max)` range sampled uniformly at seeding time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(BackdropError::invalid_config(format!(
                "{name} range must be finite, got [{}, {})",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(BackdropError::invalid_config(format!(
                "{name} range is inverted: [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Which built-in visual system to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Drifting particle field with faint proximity lines
    Particles,
    /// Node network with hubs, glow and travelling pulses
    Network,
}

impl Preset {
    pub fn config(self) -> BackdropConfig {
        match self {
            Self::Particles => BackdropConfig::particles(),
            Self::Network => BackdropConfig::network(),
        }
    }

    /// Default mount container id for this preset
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Particles => "particles",
            Self::Network => "network",
        }
    }
}

/// Every tunable of one visual system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackdropConfig {
    /// Number of entities seeded; never changes afterwards
    pub count: usize,
    /// Velocity components are drawn from `[-speed, speed)`
    pub speed: f64,
    pub radius: ValueRange,
    pub opacity: ValueRange,
    /// Category of every entity not promoted to a hub
    pub category: Category,
    /// Probability that a seeded entity becomes a hub
    pub hub_ratio: f64,
    pub hub_radius_scale: f64,
    /// Pairs closer than this are connected
    pub connection_distance: f64,
    /// Line opacity at distance 0
    pub line_opacity: f64,
    pub line_width: f64,
    pub boundary: BoundaryPolicy,
    pub palette: Palette,
    /// Shadow blur applied to every circle; 0 disables glow
    pub glow_blur: f64,
    /// Per-connection, per-frame chance of drawing a pulse dot
    pub pulse_probability: f64,
    pub pulse_radius: f64,
}

impl BackdropConfig {
    pub fn particles() -> Self {
        Self {
            count: 80,
            speed: 0.25,
            radius: ValueRange::new(1.0, 3.0),
            opacity: ValueRange::new(0.2, 0.7),
            category: Category::Particle,
            hub_ratio: 0.0,
            hub_radius_scale: 1.0,
            connection_distance: 120.0,
            line_opacity: 0.15,
            line_width: 0.5,
            boundary: BoundaryPolicy::Reflect,
            palette: Palette::default(),
            glow_blur: 0.0,
            pulse_probability: 0.0,
            pulse_radius: 2.0,
        }
    }

    pub fn network() -> Self {
        Self {
            count: 60,
            speed: 0.4,
            radius: ValueRange::new(2.0, 4.0),
            opacity: ValueRange::new(0.6, 1.0),
            category: Category::Node,
            hub_ratio: 0.15,
            hub_radius_scale: 1.75,
            connection_distance: 150.0,
            line_opacity: 0.35,
            line_width: 1.0,
            boundary: BoundaryPolicy::ReflectAndClamp,
            palette: Palette::default(),
            glow_blur: 12.0,
            pulse_probability: 0.002,
            pulse_radius: 2.0,
        }
    }

    /// Layer a JSON object over `preset` and validate the result
    ///
    /// Nested objects (`radius`, `palette`, ...) merge field by field, so an
    /// override only has to name what it changes.
    ///
    /// # Errors
    ///
    /// Returns [`BackdropError::InvalidConfig`] if the JSON is malformed,
    /// names an unknown field, or the merged config fails [`Self::validate`].
    pub fn from_json_overrides(preset: Preset, json: &str) -> Result<Self> {
        let overrides: Value = serde_json::from_str(json)
            .map_err(|e| BackdropError::invalid_config(format!("malformed JSON: {e}")))?;
        if !overrides.is_object() {
            return Err(BackdropError::invalid_config(
                "overrides must be a JSON object",
            ));
        }

        let mut merged = serde_json::to_value(preset.config())
            .map_err(|e| BackdropError::invalid_config(e.to_string()))?;
        merge_json(&mut merged, overrides);

        let config: Self = serde_json::from_value(merged)
            .map_err(|e| BackdropError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`BackdropError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(BackdropError::invalid_config("count must be > 0"));
        }
        non_negative("speed", self.speed)?;
        self.radius.validate("radius")?;
        if self.radius.min < 0.0 {
            return Err(BackdropError::invalid_config("radius must be >= 0"));
        }
        self.opacity.validate("opacity")?;
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(BackdropError::invalid_config(
                "opacity range must lie within [0, 1]",
            ));
        }
        if self.category == Category::Hub {
            return Err(BackdropError::invalid_config(
                "base category cannot be hub; use hub_ratio",
            ));
        }
        unit_interval("hub_ratio", self.hub_ratio)?;
        non_negative("hub_radius_scale", self.hub_radius_scale)?;
        non_negative("connection_distance", self.connection_distance)?;
        if self.connection_distance == 0.0 {
            return Err(BackdropError::invalid_config(
                "connection_distance must be > 0",
            ));
        }
        unit_interval("line_opacity", self.line_opacity)?;
        non_negative("line_width", self.line_width)?;
        non_negative("glow_blur", self.glow_blur)?;
        unit_interval("pulse_probability", self.pulse_probability)?;
        non_negative("pulse_radius", self.pulse_radius)?;
        Ok(())
    }

    pub fn has_glow(&self) -> bool {
        self.glow_blur > 0.0
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self::particles()
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BackdropError::invalid_config(format!(
            "{name} must be finite and >= 0, got {value}"
        )))
    }
}

fn unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BackdropError::invalid_config(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
