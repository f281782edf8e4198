//! egui frame scheduling for the render loop

use field_renderer::FrameScheduler;

/// Requests repaints from egui.
///
/// egui has no way to withdraw a repaint request, so `cancel` only drops the
/// local flag; a stopped [`field_renderer::RenderLoop`] draws nothing anyway.
pub struct EguiScheduler {
    ctx: egui::Context,
    pending: bool,
}

impl EguiScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            pending: false,
        }
    }

    /// Whether the render loop still wants frames
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl FrameScheduler for EguiScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.ctx.request_repaint();
    }

    fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_cancel() {
        let mut scheduler = EguiScheduler::new(egui::Context::default());
        scheduler.request_frame();
        assert!(scheduler.is_pending());
        scheduler.cancel();
        scheduler.cancel();
        assert!(!scheduler.is_pending());
    }
}
