//! SubRenderer trait definition.

use crate::canvas::Canvas;
use crate::scene::Scene;

/// A sub-renderer that draws one layer of the field view.
///
/// # Priority
///
/// Sub-renderers are executed in order of their priority (lower values first),
/// so later layers occlude earlier ones:
/// - 0-99: Background elements (grid, field schematic)
/// - 100-299: Live overlays (robot, target)
/// - 1000+: Always-on-top markers
pub trait SubRenderer {
    /// Returns the unique name of this sub-renderer.
    fn name(&self) -> &str;

    /// Returns the render priority (lower = rendered first).
    fn priority(&self) -> i32;

    /// Returns whether this sub-renderer is currently enabled.
    fn is_enabled(&self) -> bool;

    /// Enables or disables this sub-renderer.
    fn set_enabled(&mut self, enabled: bool);

    /// Draw this layer for the given scene.
    fn render(&self, canvas: &mut dyn Canvas, scene: &Scene);
}
