//! Animated canvas backdrops for a static profile page
//!
//! Two visual systems share one core: a soft particle field and a glowing
//! node network whose nearby points are joined by fading lines.
//!
//! ## Architecture
//! - Host-independent core: seeding, stepping, rendering to a [`render::Surface`]
//! - Leptos 0.7 CSR binding for the browser (wasm32-unknown-unknown)
//! - One `requestAnimationFrame` loop per system, cancellable through a
//!   [`driver::Lifecycle`]
//!
//! ## Module Structure
//! - `simulation`: entity state and the per-frame stepper
//! - `render`: surface trait, connection falloff, the renderer
//! - `driver`: frame loop state, timing and cancellation
//! - `viewport`: canvas sizing
//! - `interaction`: card tilt and cursor follower styles
//! - `components`: browser bindings
//! - `app`: page composition

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod interaction;
pub mod logging;
pub mod models;
pub mod render;
pub mod simulation;
pub mod viewport;

pub use config::{BackdropConfig, Preset};
pub use error::{BackdropError, Result};
