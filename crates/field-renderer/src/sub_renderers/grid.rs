//! Grid layer: lines every [`GRID_SPACING`] meters, labelled in meters.

use field_core::{FIELD_HEIGHT, FIELD_WIDTH, GRID_SPACING, meter_to_pixel};
use glam::Vec2;

use super::{names, priorities};
use crate::canvas::{Canvas, Stroke, TextAnchor};
use crate::colors;
use crate::scene::Scene;
use crate::traits::SubRenderer;

const LINE_WIDTH: f32 = 1.0;
const LABEL_SIZE: f32 = 11.0;
/// Gap between a label and the canvas edge, in pixels
const LABEL_INSET: f32 = 3.0;

pub struct GridRenderer {
    enabled: bool,
    spacing: f64,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self {
            enabled: true,
            spacing: GRID_SPACING,
        }
    }

    /// Grid values from 0 to `limit` inclusive, in steps of the spacing.
    fn ticks(&self, limit: f64) -> impl Iterator<Item = f64> + '_ {
        let count = (limit / self.spacing).floor() as usize;
        (0..=count).map(move |i| i as f64 * self.spacing)
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for GridRenderer {
    fn name(&self) -> &str {
        names::GRID
    }

    fn priority(&self) -> i32 {
        priorities::GRID
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene) {
        let dims = scene.dims;
        let stroke = Stroke::new(LINE_WIDTH, colors::GRID_LINE);

        for x in self.ticks(FIELD_WIDTH) {
            let top = meter_to_pixel(x, 0.0, dims).to_vec2();
            let bottom = meter_to_pixel(x, FIELD_HEIGHT, dims).to_vec2();
            canvas.line(top, bottom, stroke);
            canvas.text(
                top + Vec2::new(0.0, LABEL_INSET),
                TextAnchor::CenterTop,
                &format!("{}", x),
                LABEL_SIZE,
                colors::GRID_LABEL,
            );
        }

        for y in self.ticks(FIELD_HEIGHT) {
            let right = meter_to_pixel(0.0, y, dims).to_vec2();
            let left = meter_to_pixel(FIELD_WIDTH, y, dims).to_vec2();
            canvas.line(left, right, stroke);
            canvas.text(
                right - Vec2::new(LABEL_INSET, 0.0),
                TextAnchor::RightCenter,
                &format!("{}", y),
                LABEL_SIZE,
                colors::GRID_LABEL,
            );
        }
    }
}
