//! Frame-driven render loop
//!
//! The platform supplies a [`FrameScheduler`] that asks for the next display
//! refresh; the loop draws one frame per refresh while running. When no
//! drawing surface is available the loop stops itself and stays stopped until
//! [`RenderLoop::start`] is called again.

use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::renderer::FieldRenderer;
use crate::scene::Scene;

/// Requests display refreshes from the host platform.
pub trait FrameScheduler {
    /// Ask for `tick` to be called again on the next refresh.
    fn request_frame(&mut self);

    /// Withdraw any pending request. Must tolerate having nothing pending.
    fn cancel(&mut self);
}

/// Result of one [`RenderLoop::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was drawn and the next one requested.
    Rendered,
    /// No surface to draw on; the loop stopped.
    NoSurface,
    /// The loop is not running; nothing was drawn.
    Stopped,
}

pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    running: bool,
    frame_count: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            running: false,
            frame_count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames drawn since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start requesting frames. Calling it while running does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        debug!("Render loop started");
        self.running = true;
        self.scheduler.request_frame();
    }

    /// Stop requesting frames. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        debug!("Render loop stopped after {} frames", self.frame_count);
        self.running = false;
        self.scheduler.cancel();
    }

    /// Handle one display refresh.
    pub fn tick(
        &mut self,
        canvas: Option<&mut dyn Canvas>,
        renderer: &mut FieldRenderer,
        scene: &Scene,
    ) -> FrameOutcome {
        if !self.running {
            return FrameOutcome::Stopped;
        }
        let Some(canvas) = canvas else {
            warn!("No drawing surface available, stopping render loop");
            self.running = false;
            return FrameOutcome::NoSurface;
        };

        renderer.render_frame(canvas, scene);
        self.frame_count += 1;
        self.scheduler.request_frame();
        FrameOutcome::Rendered
    }
}

impl<S: FrameScheduler> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use field_core::CanvasDimensions;

    #[derive(Default)]
    struct CountingScheduler {
        requests: usize,
        cancels: usize,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) {
            self.requests += 1;
        }

        fn cancel(&mut self) {
            self.cancels += 1;
        }
    }

    fn scene() -> Scene {
        Scene::new(CanvasDimensions::default())
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut render_loop = RenderLoop::new(CountingScheduler::default());
        render_loop.start();
        render_loop.start();
        assert!(render_loop.is_running());
        assert_eq!(render_loop.scheduler().requests, 1);
    }

    #[test]
    fn test_tick_renders_and_reschedules() {
        let mut render_loop = RenderLoop::new(CountingScheduler::default());
        let mut renderer = FieldRenderer::new();
        let mut canvas = RecordingCanvas::new();

        render_loop.start();
        let outcome = render_loop.tick(Some(&mut canvas), &mut renderer, &scene());

        assert_eq!(outcome, FrameOutcome::Rendered);
        assert_eq!(render_loop.frame_count(), 1);
        assert_eq!(render_loop.scheduler().requests, 2);
        assert!(!canvas.commands().is_empty());
    }

    #[test]
    fn test_missing_surface_stops_loop() {
        let mut render_loop = RenderLoop::new(CountingScheduler::default());
        let mut renderer = FieldRenderer::new();

        render_loop.start();
        let outcome = render_loop.tick(None, &mut renderer, &scene());
        assert_eq!(outcome, FrameOutcome::NoSurface);
        assert!(!render_loop.is_running());
        assert_eq!(render_loop.scheduler().requests, 1);

        // stays stopped even once a surface shows up
        let mut canvas = RecordingCanvas::new();
        let outcome = render_loop.tick(Some(&mut canvas), &mut renderer, &scene());
        assert_eq!(outcome, FrameOutcome::Stopped);
        assert!(canvas.commands().is_empty());

        render_loop.start();
        let outcome = render_loop.tick(Some(&mut canvas), &mut renderer, &scene());
        assert_eq!(outcome, FrameOutcome::Rendered);
    }

    #[test]
    fn test_stop_cancels_once() {
        let mut render_loop = RenderLoop::new(CountingScheduler::default());
        render_loop.start();
        render_loop.stop();
        render_loop.stop();
        assert!(!render_loop.is_running());
        assert_eq!(render_loop.scheduler().cancels, 1);
    }

    #[test]
    fn test_stopped_loop_draws_nothing() {
        let mut render_loop = RenderLoop::new(CountingScheduler::default());
        let mut renderer = FieldRenderer::new();
        let mut canvas = RecordingCanvas::new();
        assert_eq!(
            render_loop.tick(Some(&mut canvas), &mut renderer, &scene()),
            FrameOutcome::Stopped
        );
        assert_eq!(render_loop.frame_count(), 0);
    }
}
