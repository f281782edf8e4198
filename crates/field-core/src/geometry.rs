//! Pixel/meter conversion and orientation math
//!
//! The field origin (0, 0) sits at the **top-right** corner of the canvas:
//! field x grows leftwards, field y grows downwards. Every function here takes
//! the current [`CanvasDimensions`], so a resize is picked up on the next call.

use std::f64::consts::FRAC_PI_2;

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::types::{CanvasDimensions, EulerAngles, FieldPoint, PixelPoint, Quaternion};

/// Convert a canvas-local pixel to a field position.
///
/// The result is clamped to the field, so pixels outside the canvas can
/// never produce off-field coordinates.
pub fn pixel_to_meter(px: f64, py: f64, dims: CanvasDimensions) -> FieldPoint {
    let x = (dims.width() - px) / dims.width() * FIELD_WIDTH;
    let y = py / dims.height() * FIELD_HEIGHT;
    FieldPoint::new(x, y).clamped()
}

/// Convert a field position to a canvas-local pixel.
///
/// The meter inputs are clamped to the field first.
pub fn meter_to_pixel(mx: f64, my: f64, dims: CanvasDimensions) -> PixelPoint {
    let p = FieldPoint::new(mx, my).clamped();
    PixelPoint::new(
        dims.width() - p.x / FIELD_WIDTH * dims.width(),
        p.y / FIELD_HEIGHT * dims.height(),
    )
}

/// Pixels per meter along each canvas axis, as `(sx, sy)`.
///
/// Used for real-world lengths (extents, radii, arrows) that must scale with
/// the field but must not be clamped like positions.
pub fn pixels_per_meter(dims: CanvasDimensions) -> (f64, f64) {
    (dims.width() / FIELD_WIDTH, dims.height() / FIELD_HEIGHT)
}

/// Convert a field-frame displacement to a pixel displacement.
///
/// The x component flips sign because field x grows leftwards on the canvas.
pub fn field_vector_to_pixels(dx: f64, dy: f64, dims: CanvasDimensions) -> (f64, f64) {
    let (sx, sy) = pixels_per_meter(dims);
    (-dx * sx, dy * sy)
}

/// Standard quaternion to roll/pitch/yaw conversion.
///
/// Pitch saturates at ±π/2 when `|sin(pitch)| >= 1` instead of taking the
/// arcsine of an out-of-domain value.
pub fn quaternion_to_euler(q: Quaternion) -> EulerAngles {
    let sinr_cosp = 2.0 * (q.w * q.x + q.y * q.z);
    let cosr_cosp = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);
    let roll = sinr_cosp.atan2(cosr_cosp);

    let sinp = 2.0 * (q.w * q.y - q.z * q.x);
    let pitch = if sinp.abs() >= 1.0 {
        FRAC_PI_2.copysign(sinp)
    } else {
        sinp.asin()
    };

    let siny_cosp = 2.0 * (q.w * q.z + q.x * q.y);
    let cosy_cosp = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
    let yaw = siny_cosp.atan2(cosy_cosp);

    EulerAngles { roll, pitch, yaw }
}
