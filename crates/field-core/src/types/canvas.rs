//! Canvas dimensions

use crate::constants::MIN_CANVAS_SIZE;

/// Size of the drawing surface in pixels.
///
/// Always at least [`MIN_CANVAS_SIZE`] on each side, so the geometry
/// functions never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasDimensions {
    width: f64,
    height: f64,
}

impl CanvasDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Self::sanitize(width),
            height: Self::sanitize(height),
        }
    }

    fn sanitize(side: f64) -> f64 {
        if side.is_finite() {
            side.max(MIN_CANVAS_SIZE)
        } else {
            MIN_CANVAS_SIZE
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Check whether a canvas-local pixel lies on the canvas (edges inclusive)
    pub fn contains(&self, px: f64, py: f64) -> bool {
        (0.0..=self.width).contains(&px) && (0.0..=self.height).contains(&py)
    }
}

impl Default for CanvasDimensions {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_have_positive_floor() {
        let dims = CanvasDimensions::new(0.0, -5.0);
        assert_eq!(dims.width(), MIN_CANVAS_SIZE);
        assert_eq!(dims.height(), MIN_CANVAS_SIZE);

        let dims = CanvasDimensions::new(f64::NAN, 640.0);
        assert_eq!(dims.width(), MIN_CANVAS_SIZE);
        assert_eq!(dims.height(), 640.0);
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let dims = CanvasDimensions::new(800.0, 600.0);
        assert!(dims.contains(0.0, 0.0));
        assert!(dims.contains(800.0, 600.0));
        assert!(!dims.contains(-0.5, 10.0));
        assert!(!dims.contains(10.0, 600.5));
    }
}
