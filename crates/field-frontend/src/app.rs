//! Main application

use std::time::Duration;

use field_renderer::{FieldRenderer, FrameOutcome, RenderLoop};
use field_transport::WebSocketTransport;
use glam::Vec2;
use tracing::{debug, info, warn};

use crate::clock::epoch_ms;
use crate::config::{SharedConfig, UiTheme, create_shared_config};
use crate::endpoint::detect_page;
use crate::painter::{EguiCanvas, surface_size};
use crate::panels::{SettingsWindow, StatusAction, StatusBar};
use crate::scheduler::EguiScheduler;
use crate::session::DashboardSession;

/// Field dashboard application
pub struct FieldApp {
    config: SharedConfig,
    session: DashboardSession<WebSocketTransport>,
    renderer: FieldRenderer,
    render_loop: RenderLoop<EguiScheduler>,
    settings: SettingsWindow,
}

impl FieldApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config();
        let (session, renderer) = {
            let manager = config.read();
            let app_config = manager.config();

            apply_ui_config(&cc.egui_ctx, app_config.ui.theme, app_config.ui.font_size);

            let mut session =
                DashboardSession::new(WebSocketTransport::new(), app_config, detect_page());
            if app_config.connection.auto_connect {
                session.connect();
            }

            let mut renderer = FieldRenderer::new();
            renderer.apply_display_options(&app_config.display);
            (session, renderer)
        };

        let mut render_loop = RenderLoop::new(EguiScheduler::new(cc.egui_ctx.clone()));
        render_loop.start();

        Self {
            config,
            session,
            renderer,
            render_loop,
            settings: SettingsWindow::new(),
        }
    }

    fn handle_status_action(&mut self, action: StatusAction) {
        match action {
            StatusAction::Reconnect => self.session.reconnect_now(),
            StatusAction::ClearTarget => self.session.clear_target(),
            StatusAction::ToggleSettings => self.settings.toggle(),
        }
    }

    fn apply_config(&mut self, ctx: &egui::Context) {
        let manager = self.config.read();
        let config = manager.config();
        self.session.apply_config(config);
        self.renderer.apply_display_options(&config.display);
        apply_ui_config(ctx, config.ui.theme, config.ui.font_size);
    }

    fn field_view(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(surface_size(available), egui::Sense::click_and_drag());
        let rect = response.rect;

        self.session
            .state_mut()
            .resize(rect.width() as f64, rect.height() as f64);

        if response.clicked() || response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let selected = self.session.press(
                    Vec2::new(pos.x, pos.y),
                    Vec2::new(rect.min.x, rect.min.y),
                    epoch_ms(),
                );
                if selected.is_none() {
                    debug!("Press at {:?} ignored", pos);
                }
            }
        }

        // A collapsed panel leaves nothing to draw on
        let has_surface = available.x > 0.0 && available.y > 0.0;
        let scene = self.session.state().scene();
        let outcome = if has_surface {
            let mut canvas = EguiCanvas::new(&painter, rect);
            self.render_loop
                .tick(Some(&mut canvas), &mut self.renderer, &scene)
        } else {
            self.render_loop.tick(None, &mut self.renderer, &scene)
        };

        if outcome == FrameOutcome::NoSurface {
            debug!("Field view has no drawing area");
        }
    }
}

fn apply_ui_config(ctx: &egui::Context, theme: UiTheme, font_size: f32) {
    let visuals = match theme {
        UiTheme::Dark => egui::Visuals::dark(),
        UiTheme::Light => egui::Visuals::light(),
    };
    ctx.set_visuals(visuals);
    ctx.set_zoom_factor(font_size.clamp(0.5, 3.0));
}

impl eframe::App for FieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let next_retry = self.session.pump(now);

        let status = StatusBar {
            connection: self.session.connection(),
            endpoint: self.session.endpoint(),
            pose: self.session.state().robot_pose.as_ref(),
            target: self.session.state().current_point.as_ref(),
            reconnect_in: next_retry,
            reconnect_exhausted: self.session.reconnect_exhausted(),
        };
        let action = egui::TopBottomPanel::top("status_bar")
            .show(ctx, |ui| status.ui(ui))
            .inner;
        if let Some(action) = action {
            self.handle_status_action(action);
        }

        if self.settings.show(ctx, &self.config) {
            self.apply_config(ctx);
        }

        // A stopped loop comes back once the window is visible again
        if !self.render_loop.is_running() {
            self.render_loop.start();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.field_view(ui));

        if let Some(secs) = next_retry {
            ctx.request_repaint_after(Duration::from_secs_f64(secs));
        }
    }

    fn on_exit(&mut self) {
        info!("Shutting down field dashboard");
        self.render_loop.stop();
        self.session.shutdown();
        if let Err(e) = self.config.write().save() {
            warn!("Failed to save config on exit: {}", e);
        }
    }
}

impl Drop for FieldApp {
    fn drop(&mut self) {
        self.render_loop.stop();
        self.session.shutdown();
    }
}
