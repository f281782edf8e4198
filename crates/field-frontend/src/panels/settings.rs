//! Settings window

use crate::config::{SharedConfig, TopicConfig, UiTheme};

/// Editor for the persisted configuration
pub struct SettingsWindow {
    open: bool,
    last_error: Option<String>,
    /// Topic names being typed; only committed by "Apply topics"
    topic_draft: Option<TopicConfig>,
    topic_error: Option<String>,
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self {
            open: false,
            last_error: None,
            topic_draft: None,
            topic_error: None,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Show the window. Returns true when the configuration was edited.
    pub fn show(&mut self, ctx: &egui::Context, config: &SharedConfig) -> bool {
        if !self.open {
            return false;
        }

        let mut changed = false;
        let mut open = self.open;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                let mut manager = config.write();
                let mut draft = manager.config().clone();

                ui.heading("Connection");
                ui.horizontal(|ui| {
                    ui.label("Desktop URL:");
                    ui.text_edit_singleline(&mut draft.connection.desktop_url);
                });
                ui.horizontal(|ui| {
                    ui.label("Mobile port:");
                    ui.add(egui::DragValue::new(&mut draft.connection.mobile_port));
                });
                ui.checkbox(&mut draft.connection.auto_connect, "Connect on startup");
                ui.horizontal(|ui| {
                    ui.label("Reconnect attempts:");
                    ui.add(
                        egui::DragValue::new(&mut draft.connection.reconnect.max_attempts)
                            .range(0..=50),
                    );
                });

                ui.separator();
                ui.heading("Topics");
                let topics = self
                    .topic_draft
                    .get_or_insert_with(|| draft.topics.clone());
                for (label, topic) in [
                    ("Odometry:", &mut topics.odometry),
                    ("Target:", &mut topics.target_coordinates),
                    ("Clicked point:", &mut topics.clicked_point),
                ] {
                    ui.horizontal(|ui| {
                        ui.label(label);
                        ui.text_edit_singleline(&mut topic.name);
                    });
                }
                let edited = *topics != draft.topics;
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(edited, egui::Button::new("Apply topics"))
                        .clicked()
                    {
                        match topics.validate() {
                            Ok(()) => {
                                draft.topics = topics.clone();
                                self.topic_error = None;
                            }
                            Err(e) => self.topic_error = Some(e.to_string()),
                        }
                    }
                    if ui.add_enabled(edited, egui::Button::new("Revert")).clicked() {
                        *topics = draft.topics.clone();
                        self.topic_error = None;
                    }
                });
                if let Some(error) = &self.topic_error {
                    ui.colored_label(egui::Color32::from_rgb(230, 80, 70), error);
                }

                ui.separator();
                ui.heading("Interaction");
                ui.checkbox(
                    &mut draft.interaction.require_connection,
                    "Only accept clicks while connected",
                );

                ui.separator();
                ui.heading("Display");
                ui.checkbox(&mut draft.display.show_grid, "Grid");
                ui.checkbox(&mut draft.display.show_field, "Field elements");
                ui.checkbox(&mut draft.display.show_robot, "Robot");
                ui.checkbox(&mut draft.display.show_target, "Target");
                ui.checkbox(&mut draft.display.show_origin, "Origin marker");

                ui.separator();
                ui.heading("Interface");
                ui.horizontal(|ui| {
                    ui.label("Theme:");
                    ui.selectable_value(&mut draft.ui.theme, UiTheme::Dark, "Dark");
                    ui.selectable_value(&mut draft.ui.theme, UiTheme::Light, "Light");
                });
                ui.horizontal(|ui| {
                    ui.label("Font size:");
                    ui.add(egui::Slider::new(&mut draft.ui.font_size, 0.75..=2.0));
                });

                if &draft != manager.config() {
                    *manager.config_mut() = draft;
                    changed = true;
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(manager.is_dirty(), egui::Button::new("Save"))
                        .clicked()
                    {
                        self.last_error = manager.save().err().map(|e| e.to_string());
                    }
                    if ui.button("Reset to defaults").clicked() {
                        manager.reset_to_defaults();
                        self.topic_draft = None;
                        self.topic_error = None;
                        changed = true;
                    }
                });
                ui.weak(manager.config_file_path().display().to_string());
                if let Some(error) = &self.last_error {
                    ui.colored_label(egui::Color32::from_rgb(230, 80, 70), error);
                }
            });
        self.open = open;

        changed
    }
}

impl Default for SettingsWindow {
    fn default() -> Self {
        Self::new()
    }
}
