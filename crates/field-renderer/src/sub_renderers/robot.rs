//! Robot layer: body circle, heading arrow and pose readout.

use field_core::{
    HEADING_ARROW_LENGTH, ROBOT_RADIUS, field_vector_to_pixels, meter_to_pixel, pixels_per_meter,
};
use glam::Vec2;

use super::{names, priorities};
use crate::canvas::{Canvas, Stroke, TextAnchor};
use crate::colors;
use crate::scene::Scene;
use crate::traits::SubRenderer;

const OUTLINE_WIDTH: f32 = 2.0;
const HEADING_WIDTH: f32 = 3.0;
const ARROWHEAD_LENGTH: f32 = 10.0;
const ARROWHEAD_ANGLE: f32 = 0.5;
const LABEL_SIZE: f32 = 13.0;
const LABEL_GAP: f32 = 6.0;

pub struct RobotRenderer {
    enabled: bool,
}

impl RobotRenderer {
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for RobotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for RobotRenderer {
    fn name(&self) -> &str {
        names::ROBOT
    }

    fn priority(&self) -> i32 {
        priorities::ROBOT
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene) {
        let Some(pose) = scene.robot else {
            return;
        };
        let dims = scene.dims;
        let (sx, sy) = pixels_per_meter(dims);

        let center = meter_to_pixel(pose.x, pose.y, dims).to_vec2();
        let radius = (ROBOT_RADIUS * sx.min(sy)) as f32;
        canvas.circle(
            center,
            radius,
            Some(colors::ROBOT_BODY),
            Some(Stroke::new(OUTLINE_WIDTH, colors::ROBOT_OUTLINE)),
        );

        let (dx, dy) = field_vector_to_pixels(
            HEADING_ARROW_LENGTH * pose.angle.cos(),
            HEADING_ARROW_LENGTH * pose.angle.sin(),
            dims,
        );
        let tip = center + Vec2::new(dx as f32, dy as f32);
        let stroke = Stroke::new(HEADING_WIDTH, colors::ROBOT_HEADING);
        canvas.line(center, tip, stroke);

        // Arrowhead barbs point back along the shaft
        let back = (center - tip).normalize_or_zero() * ARROWHEAD_LENGTH;
        if back != Vec2::ZERO {
            for angle in [ARROWHEAD_ANGLE, -ARROWHEAD_ANGLE] {
                canvas.line(tip, tip + Vec2::from_angle(angle).rotate(back), stroke);
            }
        }

        canvas.text(
            center + Vec2::new(0.0, radius + LABEL_GAP),
            TextAnchor::CenterTop,
            &pose.label(),
            LABEL_SIZE,
            colors::ROBOT_LABEL,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use approx::assert_relative_eq;
    use field_core::{CanvasDimensions, RobotPose};

    fn dims() -> CanvasDimensions {
        CanvasDimensions::new(1500.0, 800.0)
    }

    #[test]
    fn test_nothing_drawn_without_pose() {
        let mut canvas = RecordingCanvas::new();
        RobotRenderer::new().render(&mut canvas, &Scene::new(dims()));
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_body_and_label() {
        let mut canvas = RecordingCanvas::new();
        let scene = Scene::new(dims()).with_robot(Some(RobotPose::new(5.0, 2.0, 0.0)));
        RobotRenderer::new().render(&mut canvas, &scene);

        let circles = canvas.circles();
        assert_eq!(circles.len(), 1);
        assert_relative_eq!(circles[0].0.x, 1000.0, epsilon = 1e-3);
        assert_relative_eq!(circles[0].0.y, 200.0, epsilon = 1e-3);
        assert_relative_eq!(circles[0].1, 30.0, epsilon = 1e-3);
        assert!(canvas.has_text("(5.00, 2.00)"));
    }

    #[test]
    fn test_zero_heading_points_left_on_canvas() {
        let mut canvas = RecordingCanvas::new();
        let scene = Scene::new(dims()).with_robot(Some(RobotPose::new(5.0, 2.0, 0.0)));
        RobotRenderer::new().render(&mut canvas, &scene);

        // shaft first, then two barbs
        let lines = canvas.lines();
        assert_eq!(lines.len(), 3);
        let (from, to) = lines[0];
        assert_relative_eq!(to.x - from.x, -60.0, epsilon = 1e-3);
        assert_relative_eq!(to.y - from.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_quarter_turn_points_down() {
        let mut canvas = RecordingCanvas::new();
        let scene = Scene::new(dims()).with_robot(Some(RobotPose::new(
            5.0,
            2.0,
            std::f64::consts::FRAC_PI_2,
        )));
        RobotRenderer::new().render(&mut canvas, &scene);

        let (from, to) = canvas.lines()[0];
        assert_relative_eq!(to.x - from.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(to.y - from.y, 60.0, epsilon = 1e-3);
    }
}
