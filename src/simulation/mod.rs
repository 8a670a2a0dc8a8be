//! Point simulation: entity state and the per-tick stepper

pub mod state;
pub mod stepper;

pub use state::SimulationState;
pub use stepper::{BoundaryPolicy, StepReport, step};
