//! Frame rendering onto an abstract 2D surface
//!
//! The renderer only reads simulation state. It draws through the
//! [`Surface`] trait, implemented by the browser canvas and by
//! [`RecordingSurface`] for tests and frame capture.

pub mod connections;
pub mod recording;
pub mod renderer;
pub mod surface;

pub use connections::{Connection, candidate_pairs, connection_opacity, connections, pair_count};
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{RenderReport, Renderer};
pub use surface::{Circle, Glow, Line, Surface};
