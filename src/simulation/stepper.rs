//! Frame stepper: Euler integration plus boundary reflection
//!
//! Each entity is advanced independently; no entity reads another's state.

use serde::{Deserialize, Serialize};

use super::state::SimulationState;

/// What happens when an entity crosses a surface edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Flip the velocity sign only; the entity may sit up to one tick's
    /// travel outside the surface before it comes back
    #[default]
    Reflect,
    /// Flip the velocity sign, then clamp the position onto the surface
    ReflectAndClamp,
}

/// Counts gathered during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Axis velocity flips performed
    pub reflections: usize,
    /// Entities still outside `[0, width] x [0, height]` after the step
    pub overshoots: usize,
}

/// Advance every entity by one tick
///
/// Position is integrated with unit time (`p += v`). Then, per axis, an
/// entity outside `[0, dimension]` that is still moving outward has that
/// velocity component negated; magnitude never changes. Under
/// [`BoundaryPolicy::ReflectAndClamp`] the position is then clamped onto the
/// surface.
pub fn step(state: &mut SimulationState, policy: BoundaryPolicy) -> StepReport {
    let clamp = matches!(policy, BoundaryPolicy::ReflectAndClamp);
    let (entities, width, height) = state.entities_mut();

    entities
        .iter_mut()
        .fold(StepReport::default(), |mut report, entity| {
            entity.position.x += entity.velocity.x;
            entity.position.y += entity.velocity.y;

            let flipped_x =
                reflect_axis(&mut entity.position.x, &mut entity.velocity.x, width, clamp);
            let flipped_y =
                reflect_axis(&mut entity.position.y, &mut entity.velocity.y, height, clamp);
            report.reflections += usize::from(flipped_x) + usize::from(flipped_y);

            let inside = (0.0..=width).contains(&entity.position.x)
                && (0.0..=height).contains(&entity.position.y);
            if !inside {
                report.overshoots += 1;
            }
            report
        })
}

/// Returns whether the velocity was flipped
fn reflect_axis(position: &mut f64, velocity: &mut f64, max: f64, clamp: bool) -> bool {
    let outward = (*position < 0.0 && *velocity < 0.0) || (*position > max && *velocity > 0.0);
    if outward {
        *velocity = -*velocity;
    }
    if clamp {
        *position = position.clamp(0.0, max);
    }
    outward
}
