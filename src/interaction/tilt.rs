//! Card tilt-on-hover
//!
//! The card rotates toward the pointer: one degree per ten pixels of offset
//! from the card centre, lifted and slightly enlarged, with a soft highlight
//! under the pointer.

/// Pixels of pointer offset per degree of rotation
const PIXELS_PER_DEGREE: f64 = 10.0;

/// Transform applied while a card is pressed
pub const PRESSED_TRANSFORM: &str = "scale(0.98)";

/// Rotation for one pointer position over a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    /// Degrees about the X axis; positive when the pointer is below centre
    pub rotate_x: f64,
    /// Degrees about the Y axis; positive when the pointer is left of centre
    pub rotate_y: f64,
    /// Pointer position relative to the card's top-left corner
    pub x: f64,
    pub y: f64,
}

impl CardTilt {
    /// Tilt for a pointer at card-relative `(x, y)` on a `width` x `height` card
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / PIXELS_PER_DEGREE,
            rotate_y: (center_x - x) / PIXELS_PER_DEGREE,
            x,
            y,
        }
    }

    /// Tilt from client coordinates and the card's bounding rect origin
    pub fn from_client(
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self::from_pointer(client_x - left, client_y - top, width, height)
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }

    /// CSS `background` value with a highlight under the pointer
    pub fn background(&self) -> String {
        format!(
            "radial-gradient(circle at {}px {}px, rgba(255, 255, 255, 0.15), transparent), rgba(255, 255, 255, 0.05)",
            self.x, self.y
        )
    }
}
