//! Pointer-driven cosmetic effects: card tilt and the cursor follower
//!
//! Pure style computations; the DOM bindings live in `components`.

pub mod cursor;
pub mod tilt;

pub use cursor::{CursorFollower, RingStyle};
pub use tilt::{CardTilt, PRESSED_TRANSFORM};
