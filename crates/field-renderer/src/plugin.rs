//! Registry of field view layers.

use crate::canvas::Canvas;
use crate::scene::Scene;
use crate::traits::SubRenderer;

/// Registry for managing sub-renderers.
///
/// Layers are drawn in ascending priority; registration order does not matter.
pub struct RendererRegistry {
    sub_renderers: Vec<Box<dyn SubRenderer>>,
    sorted: bool,
}

impl RendererRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            sub_renderers: Vec::new(),
            sorted: true,
        }
    }

    /// Registers a new sub-renderer.
    pub fn register<R: SubRenderer + 'static>(&mut self, renderer: R) {
        self.sub_renderers.push(Box::new(renderer));
        self.sorted = false;
    }

    /// Unregisters a sub-renderer by name.
    ///
    /// Returns the removed sub-renderer, or None if not found.
    pub fn unregister(&mut self, name: &str) -> Option<Box<dyn SubRenderer>> {
        let pos = self.sub_renderers.iter().position(|r| r.name() == name)?;
        Some(self.sub_renderers.remove(pos))
    }

    /// Gets a sub-renderer by name.
    pub fn get(&self, name: &str) -> Option<&dyn SubRenderer> {
        self.sub_renderers
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    /// Enables or disables a sub-renderer by name. Returns false if not found.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.sub_renderers.iter_mut().find(|r| r.name() == name) {
            Some(renderer) => {
                renderer.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Returns true if the registry contains a sub-renderer with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.sub_renderers.iter().any(|r| r.name() == name)
    }

    /// Returns the number of registered sub-renderers.
    pub fn len(&self) -> usize {
        self.sub_renderers.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sub_renderers.is_empty()
    }

    /// Returns an iterator over all sub-renderers in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SubRenderer> {
        self.sub_renderers.iter().map(|r| r.as_ref())
    }

    /// Sorts sub-renderers by priority if needed.
    fn ensure_sorted(&mut self) {
        if !self.sorted {
            self.sub_renderers.sort_by_key(|r| r.priority());
            self.sorted = true;
        }
    }

    /// Renders all enabled sub-renderers in priority order.
    pub fn render_all(&mut self, canvas: &mut dyn Canvas, scene: &Scene) {
        self.ensure_sorted();
        for renderer in &self.sub_renderers {
            if renderer.is_enabled() {
                renderer.render(canvas, scene);
            }
        }
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}
