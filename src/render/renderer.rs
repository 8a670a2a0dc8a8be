//! Per-tick renderer: entity pass, connection pass, optional pulses

use rand::Rng;

use super::connections::{candidate_pairs, evaluate_pair};
use super::surface::{Circle, Glow, Line, Surface};
use crate::config::BackdropConfig;
use crate::error::Result;
use crate::models::{Entity, Paint, Palette, RgbColor};
use crate::simulation::SimulationState;

/// Alpha of a travelling pulse dot
const PULSE_ALPHA: f64 = 0.9;

/// Counts of what one frame drew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderReport {
    pub circles: usize,
    pub lines: usize,
    pub pulses: usize,
    pub pairs_evaluated: usize,
}

/// Paints a [`SimulationState`] onto a [`Surface`]; never mutates entities
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    palette: Palette,
    connection_distance: f64,
    line_opacity: f64,
    line_width: f64,
    glow_blur: f64,
    pulse_probability: f64,
    pulse_radius: f64,
}

impl Renderer {
    /// # Errors
    ///
    /// Returns [`crate::error::BackdropError::InvalidConfig`] if the config fails
    /// validation.
    pub fn from_config(config: &BackdropConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            palette: config.palette,
            connection_distance: config.connection_distance,
            line_opacity: config.line_opacity,
            line_width: config.line_width,
            glow_blur: config.glow_blur,
            pulse_probability: config.pulse_probability,
            pulse_radius: config.pulse_radius,
        })
    }

    pub const fn connection_distance(&self) -> f64 {
        self.connection_distance
    }

    /// Clear the surface and draw one frame
    ///
    /// # Errors
    ///
    /// Propagates the first surface error; the rest of the frame is skipped.
    pub fn render<S, R>(
        &self,
        state: &SimulationState,
        surface: &mut S,
        rng: &mut R,
    ) -> Result<RenderReport>
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        surface.clear()?;

        let entities = state.entities();
        let mut report = RenderReport::default();

        for entity in entities {
            surface.fill_circle(&self.entity_circle(entity))?;
            report.circles += 1;
        }

        for (a, b) in candidate_pairs(entities.len()) {
            report.pairs_evaluated += 1;
            let Some(connection) =
                evaluate_pair(entities, a, b, self.connection_distance, self.line_opacity)
            else {
                continue;
            };
            let (Some(first), Some(second)) = (entities.get(a), entities.get(b)) else {
                continue;
            };

            let color = self.palette.line(first.category, second.category);
            surface.stroke_line(&Line {
                from: first.position,
                to: second.position,
                paint: Paint::new(color, connection.opacity),
                width: self.line_width,
            })?;
            report.lines += 1;

            if self.pulse_probability > 0.0 && rng.gen_bool(self.pulse_probability) {
                let t = rng.gen_range(0.0..1.0);
                surface.fill_circle(&Circle {
                    center: first.position.lerp(&second.position, t),
                    radius: self.pulse_radius,
                    paint: Paint::new(self.palette.hub, PULSE_ALPHA),
                    glow: self.glow(self.palette.hub),
                })?;
                report.pulses += 1;
            }
        }

        Ok(report)
    }

    fn entity_circle(&self, entity: &Entity) -> Circle {
        let color = self.palette.fill(entity.category);
        Circle {
            center: entity.position,
            radius: entity.radius,
            paint: Paint::new(color, entity.opacity),
            glow: self.glow(color),
        }
    }

    fn glow(&self, color: RgbColor) -> Option<Glow> {
        (self.glow_blur > 0.0).then_some(Glow {
            color,
            blur: self.glow_blur,
        })
    }
}
