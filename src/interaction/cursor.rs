//! Custom cursor: a ring and a dot that follow the pointer

use crate::models::{Palette, RgbColor};

/// Ring diameter in pixels
pub const RING_SIZE: u32 = 40;
/// Dot diameter in pixels
pub const DOT_SIZE: u32 = 8;
/// Windows at or below this width keep the native cursor
pub const MIN_WINDOW_WIDTH: f64 = 768.0;

/// Centres an element on its `left`/`top` offset
pub const CENTERED: &str = "translate(-50%, -50%)";

/// Ring appearance for the current hover state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub scale: f64,
    pub border_alpha: f64,
}

/// Tracks pointer position and whether it is over a link or button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    color: RgbColor,
    x: f64,
    y: f64,
    hovering: bool,
}

impl CursorFollower {
    pub const fn new(color: RgbColor) -> Self {
        Self {
            color,
            x: 0.0,
            y: 0.0,
            hovering: false,
        }
    }

    /// Whether the follower should be installed for this window width
    pub fn enabled_for(window_width: f64) -> bool {
        window_width > MIN_WINDOW_WIDTH
    }

    pub fn move_to(&mut self, client_x: f64, client_y: f64) {
        self.x = client_x;
        self.y = client_y;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub const fn ring(&self) -> RingStyle {
        if self.hovering {
            RingStyle {
                scale: 1.5,
                border_alpha: 1.0,
            }
        } else {
            RingStyle {
                scale: 1.0,
                border_alpha: 0.5,
            }
        }
    }

    /// `left`/`top` values shared by ring and dot
    pub fn offsets(&self) -> (String, String) {
        (format!("{}px", self.x), format!("{}px", self.y))
    }

    pub fn ring_transform(&self) -> String {
        format!("{CENTERED} scale({})", self.ring().scale)
    }

    pub fn ring_border_color(&self) -> String {
        self.color.to_css_alpha(self.ring().border_alpha)
    }

    /// Static inline style for the ring element
    pub fn ring_base_style(&self) -> String {
        format!(
            "position: fixed; width: {RING_SIZE}px; height: {RING_SIZE}px; border: 2px solid {}; \
             border-radius: 50%; pointer-events: none; z-index: 9999; transform: {CENTERED}; \
             transition: transform 0.2s ease;",
            self.color.to_css_alpha(0.5)
        )
    }

    /// Static inline style for the dot element
    pub fn dot_base_style(&self) -> String {
        format!(
            "position: fixed; width: {DOT_SIZE}px; height: {DOT_SIZE}px; background: {}; \
             border-radius: 50%; pointer-events: none; z-index: 9999; transform: {CENTERED};",
            self.color.to_css_alpha(0.8)
        )
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(Palette::BASE)
    }
}
