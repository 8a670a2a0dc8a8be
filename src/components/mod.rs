//! Browser-facing layer: canvas plumbing, the backdrop component and the
//! page effects

pub mod backdrop;
pub mod canvas;
pub mod cards;
pub mod cursor;
pub mod reveal;

pub use backdrop::{Backdrop, BackdropHandle, start_backdrop};
pub use cards::attach_card_tilt;
pub use cursor::attach_cursor_follower;
pub use reveal::{attach_scroll_reveal, fade_in_body};
