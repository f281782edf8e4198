//! Field Dashboard Renderer
//!
//! Draws the field view onto any [`Canvas`] implementation.
//!
//! # Architecture
//!
//! - [`traits::SubRenderer`] - One visual layer (grid, field, robot, ...)
//! - [`plugin::RendererRegistry`] - Ordered collection of sub-renderers
//! - [`FieldRenderer`] - Clears the surface and draws every enabled layer
//! - [`RenderLoop`] - Start/stop wrapper over a platform [`FrameScheduler`]
//! - [`recording::RecordingCanvas`] - Canvas that records draw calls, for tests
//!
//! # Example
//!
//! ```ignore
//! let mut renderer = FieldRenderer::new();
//! let mut render_loop = RenderLoop::new(scheduler);
//! render_loop.start();
//!
//! // Once per display refresh
//! render_loop.tick(Some(&mut canvas), &mut renderer, &scene);
//! ```

pub mod canvas;
pub mod colors;
pub mod display_options;
pub mod plugin;
pub mod recording;
pub mod render_loop;
pub mod renderer;
pub mod scene;
pub mod sub_renderers;
pub mod traits;

pub use canvas::{Canvas, Stroke, TextAnchor};
pub use display_options::DisplayOptions;
pub use plugin::RendererRegistry;
pub use render_loop::{FrameOutcome, FrameScheduler, RenderLoop};
pub use renderer::FieldRenderer;
pub use scene::Scene;
pub use traits::SubRenderer;
