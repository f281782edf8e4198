//! Target layer: the point last selected on the field.

use field_core::meter_to_pixel;
use glam::Vec2;

use super::{names, priorities};
use crate::canvas::{Canvas, Stroke, TextAnchor};
use crate::colors;
use crate::scene::Scene;
use crate::traits::SubRenderer;

const DOT_RADIUS: f32 = 5.0;
const CROSSHAIR_HALF: f32 = 12.0;
const CROSSHAIR_WIDTH: f32 = 1.5;
const LABEL_SIZE: f32 = 12.0;
const LABEL_OFFSET: Vec2 = Vec2::new(10.0, -8.0);

pub struct TargetRenderer {
    enabled: bool,
}

impl TargetRenderer {
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for TargetRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for TargetRenderer {
    fn name(&self) -> &str {
        names::TARGET
    }

    fn priority(&self) -> i32 {
        priorities::TARGET
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene) {
        let Some(target) = scene.target else {
            return;
        };
        let center = meter_to_pixel(target.x, target.y, scene.dims).to_vec2();
        let stroke = Stroke::new(CROSSHAIR_WIDTH, colors::TARGET);

        canvas.line(
            center - Vec2::X * CROSSHAIR_HALF,
            center + Vec2::X * CROSSHAIR_HALF,
            stroke,
        );
        canvas.line(
            center - Vec2::Y * CROSSHAIR_HALF,
            center + Vec2::Y * CROSSHAIR_HALF,
            stroke,
        );
        canvas.circle(center, DOT_RADIUS, Some(colors::TARGET), None);
        canvas.text(
            center + LABEL_OFFSET,
            TextAnchor::LeftBottom,
            &format!("Target ({:.2}, {:.2})", target.x, target.y),
            LABEL_SIZE,
            colors::TARGET_LABEL,
        );
    }
}
