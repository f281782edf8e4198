//! Top-level field view renderer.

use crate::canvas::Canvas;
use crate::colors;
use crate::display_options::DisplayOptions;
use crate::plugin::RendererRegistry;
use crate::scene::Scene;
use crate::sub_renderers::{
    FieldElementsRenderer, GridRenderer, OriginRenderer, RobotRenderer, TargetRenderer, names,
};
use crate::traits::SubRenderer;

/// Clears the surface and draws every enabled layer, back to front.
pub struct FieldRenderer {
    registry: RendererRegistry,
}

impl FieldRenderer {
    /// Creates a renderer with the built-in layers registered.
    pub fn new() -> Self {
        let mut registry = RendererRegistry::new();
        registry.register(GridRenderer::new());
        registry.register(FieldElementsRenderer::new());
        registry.register(RobotRenderer::new());
        registry.register(TargetRenderer::new());
        registry.register(OriginRenderer::new());

        Self { registry }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Adds a custom layer alongside the built-in ones.
    pub fn register<R: SubRenderer + 'static>(&mut self, renderer: R) {
        self.registry.register(renderer);
    }

    /// Sync layer visibility with the given options.
    pub fn apply_display_options(&mut self, options: &DisplayOptions) {
        self.registry.set_enabled(names::GRID, options.show_grid);
        self.registry.set_enabled(names::FIELD, options.show_field);
        self.registry.set_enabled(names::ROBOT, options.show_robot);
        self.registry.set_enabled(names::TARGET, options.show_target);
        self.registry.set_enabled(names::ORIGIN, options.show_origin);
    }

    /// Draw one complete frame. Nothing from the previous frame survives.
    pub fn render_frame(&mut self, canvas: &mut dyn Canvas, scene: &Scene) {
        canvas.clear(colors::BACKGROUND);
        self.registry.render_all(canvas, scene);
    }
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingCanvas};
    use field_core::{CanvasDimensions, FieldPoint, RobotPose};

    fn scene() -> Scene {
        Scene::new(CanvasDimensions::new(800.0, 600.0))
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let mut renderer = FieldRenderer::new();
        let mut canvas = RecordingCanvas::new();
        renderer.render_frame(&mut canvas, &scene());

        assert_eq!(canvas.commands()[0], DrawCommand::Clear(colors::BACKGROUND));
        let clears = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count();
        assert_eq!(clears, 1);
    }

    #[test]
    fn test_robot_only_drawn_with_pose() {
        let mut renderer = FieldRenderer::new();
        let mut canvas = RecordingCanvas::new();

        renderer.render_frame(&mut canvas, &scene());
        assert!(!canvas.has_text(" m "));

        canvas.reset();
        let pose = RobotPose::new(1.0, 2.0, 0.5);
        renderer.render_frame(&mut canvas, &scene().with_robot(Some(pose)));
        assert!(canvas.has_text(&pose.label()));
    }

    #[test]
    fn test_cleared_target_disappears_next_frame() {
        let mut renderer = FieldRenderer::new();
        let mut canvas = RecordingCanvas::new();

        let with_target = scene().with_target(Some(FieldPoint::new(2.0, 3.0)));
        renderer.render_frame(&mut canvas, &with_target);
        assert!(canvas.has_text("Target (2.00, 3.00)"));

        canvas.reset();
        renderer.render_frame(&mut canvas, &scene());
        assert!(!canvas.has_text("Target"));
    }

    #[test]
    fn test_origin_drawn_last() {
        let mut renderer = FieldRenderer::new();
        let mut canvas = RecordingCanvas::new();
        renderer.render_frame(&mut canvas, &scene());
        assert_eq!(canvas.texts().last(), Some(&"Origin (0,0)"));
    }

    #[test]
    fn test_display_options_hide_grid() {
        let mut renderer = FieldRenderer::new();
        let mut options = DisplayOptions::new();
        options.set_show_grid(false);
        renderer.apply_display_options(&options);

        let mut canvas = RecordingCanvas::new();
        renderer.render_frame(&mut canvas, &scene());

        // only the center line remains
        assert_eq!(canvas.lines().len(), 1);
        assert!(!canvas.has_text("15"));
    }
}
