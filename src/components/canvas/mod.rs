//! Browser canvas plumbing: element lookup, 2D context, RAF loop, resizing

pub mod context;
pub mod init;
pub mod raf;
pub mod resize;
pub mod surface;

pub use context::get_2d_context;
pub(crate) use init::document;
pub use init::{OVERLAY_STYLE, RenderTarget, acquire_canvas, find_canvas, find_container};
pub use raf::{AnimationHandle, start_animation_loop};
pub use resize::{ResizeHandler, attach_resize_listener, fit_canvas_to_window, get_window_size};
pub use surface::CanvasSurface;
