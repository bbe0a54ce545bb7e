//! Cursor-follow glow behind the message input.
//!
//! Purely cosmetic: the widget recomputes the glow on every pointer move
//! inside the input container and never feeds it back into conversation
//! state.

#[cfg(test)]
#[path = "glow_test.rs"]
mod glow_test;

/// Diameter of the glow disc in CSS pixels.
pub const GLOW_DIAMETER_PX: f64 = 150.0;

/// Pointer position relative to the input container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowPosition {
    pub x: f64,
    pub y: f64,
}

impl GlowPosition {
    /// Translate viewport pointer coordinates into container coordinates.
    #[must_use]
    pub fn relative_to(client_x: f64, client_y: f64, container_left: f64, container_top: f64) -> Self {
        Self { x: client_x - container_left, y: client_y - container_top }
    }

    /// Inline style centering the glow disc on the pointer.
    #[must_use]
    pub fn style(&self) -> String {
        let radius = GLOW_DIAMETER_PX / 2.0;
        format!(
            "left: {}px; top: {}px; width: {GLOW_DIAMETER_PX}px; height: {GLOW_DIAMETER_PX}px;",
            self.x - radius,
            self.y - radius
        )
    }
}
