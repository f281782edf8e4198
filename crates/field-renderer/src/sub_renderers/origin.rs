//! Origin marker, always at the top-right corner of the canvas.

use field_core::meter_to_pixel;
use glam::Vec2;

use super::{names, priorities};
use crate::canvas::{Canvas, TextAnchor};
use crate::colors;
use crate::scene::Scene;
use crate::traits::SubRenderer;

const MARKER_RADIUS: f32 = 6.0;
const LABEL_SIZE: f32 = 12.0;
const LABEL_OFFSET: Vec2 = Vec2::new(-10.0, 10.0);

pub struct OriginRenderer {
    enabled: bool,
}

impl OriginRenderer {
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for OriginRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for OriginRenderer {
    fn name(&self) -> &str {
        names::ORIGIN
    }

    fn priority(&self) -> i32 {
        priorities::ORIGIN
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene) {
        let origin = meter_to_pixel(0.0, 0.0, scene.dims).to_vec2();
        canvas.circle(origin, MARKER_RADIUS, Some(colors::ORIGIN), None);
        canvas.text(
            origin + LABEL_OFFSET,
            TextAnchor::RightTop,
            "Origin (0,0)",
            LABEL_SIZE,
            colors::ORIGIN,
        );
    }
}
