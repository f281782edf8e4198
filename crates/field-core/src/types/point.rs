//! Field and pixel point types

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};

/// A position on the field, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldPoint {
    pub x: f64,
    pub y: f64,
}

impl FieldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Field origin, also the sentinel published when a target is cleared.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Returns this point with both coordinates clamped to the field bounds.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, FIELD_WIDTH),
            y: self.y.clamp(0.0, FIELD_HEIGHT),
        }
    }

    /// Check whether the point lies inside the field (bounds inclusive)
    pub fn is_on_field(&self) -> bool {
        (0.0..=FIELD_WIDTH).contains(&self.x) && (0.0..=FIELD_HEIGHT).contains(&self.y)
    }
}

/// A position on the canvas, in pixels relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x as f32, self.y as f32)
    }
}
