//! Field schematic layer.

use field_core::{FieldElement, default_field_layout, meter_to_pixel, pixels_per_meter};
use glam::Vec2;

use super::{names, priorities};
use crate::canvas::{Canvas, Stroke};
use crate::scene::Scene;
use crate::traits::SubRenderer;

const BOUNDARY_WIDTH: f32 = 2.0;
/// Thin lines stay visible on small canvases
const MIN_LINE_WIDTH: f32 = 2.0;

/// Draws the static [`FieldElement`] layout.
pub struct FieldElementsRenderer {
    enabled: bool,
    elements: Vec<FieldElement>,
}

impl FieldElementsRenderer {
    pub fn new() -> Self {
        Self::with_elements(default_field_layout())
    }

    pub fn with_elements(elements: Vec<FieldElement>) -> Self {
        Self {
            enabled: true,
            elements,
        }
    }

    pub fn elements(&self) -> &[FieldElement] {
        &self.elements
    }
}

impl Default for FieldElementsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for FieldElementsRenderer {
    fn name(&self) -> &str {
        names::FIELD
    }

    fn priority(&self) -> i32 {
        priorities::FIELD
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene) {
        let dims = scene.dims;
        let (sx, sy) = pixels_per_meter(dims);

        for element in &self.elements {
            match element {
                FieldElement::Rectangle {
                    center,
                    size,
                    color,
                    filled,
                    ..
                } => {
                    let c = meter_to_pixel(center.x, center.y, dims).to_vec2();
                    let s = Vec2::new((size.0 * sx) as f32, (size.1 * sy) as f32);
                    if *filled {
                        canvas.rect(c, s, Some(*color), None);
                    } else {
                        canvas.rect(c, s, None, Some(Stroke::new(BOUNDARY_WIDTH, *color)));
                    }
                }
                FieldElement::Line {
                    thickness, color, ..
                } => {
                    let Some((a, b)) = element.line_endpoints() else {
                        continue;
                    };
                    let from = meter_to_pixel(a.x, a.y, dims).to_vec2();
                    let to = meter_to_pixel(b.x, b.y, dims).to_vec2();
                    let width = ((thickness * sx) as f32).max(MIN_LINE_WIDTH);
                    canvas.line(from, to, Stroke::new(width, *color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingCanvas};
    use field_core::CanvasDimensions;

    #[test]
    fn test_layout_projection() {
        let mut canvas = RecordingCanvas::new();
        let scene = Scene::new(CanvasDimensions::new(1500.0, 800.0));
        FieldElementsRenderer::new().render(&mut canvas, &scene);

        // boundary fills the whole canvas
        let rects = canvas.rects();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], (Vec2::new(750.0, 400.0), Vec2::new(1500.0, 800.0)));

        // blue goal hugs the right edge, where x = 0 is drawn
        assert_eq!(rects[1], (Vec2::new(1425.0, 400.0), Vec2::new(150.0, 300.0)));

        let lines = canvas.lines();
        assert_eq!(lines, vec![(Vec2::new(750.0, 0.0), Vec2::new(750.0, 800.0))]);
    }

    #[test]
    fn test_boundary_is_outlined_goals_filled() {
        let mut canvas = RecordingCanvas::new();
        let scene = Scene::new(CanvasDimensions::default());
        FieldElementsRenderer::new().render(&mut canvas, &scene);

        let fills: Vec<bool> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { fill, .. } => Some(fill.is_some()),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![false, true, true]);
    }
}
