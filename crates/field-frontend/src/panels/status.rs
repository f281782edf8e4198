//! Connection status bar

use field_core::{ConnectionState, FieldPoint, RobotPose};

/// Something the operator asked for from the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Reconnect,
    ClearTarget,
    ToggleSettings,
}

/// What the status bar shows this frame
pub struct StatusBar<'a> {
    pub connection: &'a ConnectionState,
    pub endpoint: &'a str,
    pub pose: Option<&'a RobotPose>,
    pub target: Option<&'a FieldPoint>,
    /// Seconds until the next automatic reconnect
    pub reconnect_in: Option<f64>,
    pub reconnect_exhausted: bool,
}

/// Badge color for a connection state
pub fn status_color(state: &ConnectionState) -> egui::Color32 {
    match state {
        ConnectionState::Connected => egui::Color32::from_rgb(80, 200, 120),
        ConnectionState::Connecting => egui::Color32::from_rgb(230, 180, 60),
        ConnectionState::Disconnected => egui::Color32::GRAY,
        ConnectionState::Error(_) => egui::Color32::from_rgb(230, 80, 70),
    }
}

impl StatusBar<'_> {
    /// Draw the bar. Returns the action the operator triggered, if any.
    pub fn ui(&self, ui: &mut egui::Ui) -> Option<StatusAction> {
        let mut action = None;

        ui.horizontal_wrapped(|ui| {
            ui.colored_label(status_color(self.connection), "●");
            ui.label(self.connection.label());
            ui.weak(self.endpoint);

            if let Some(secs) = self.reconnect_in {
                ui.weak(format!("retry in {:.0}s", secs.ceil()));
            } else if self.reconnect_exhausted {
                ui.weak("gave up reconnecting");
            }

            if ui
                .add_enabled(
                    self.connection.can_reconnect(),
                    egui::Button::new("Reconnect"),
                )
                .clicked()
            {
                action = Some(StatusAction::Reconnect);
            }

            ui.separator();

            match self.pose {
                Some(pose) => ui.label(format!("Robot {}", pose.label())),
                None => ui.weak("No pose"),
            };

            ui.separator();

            match self.target {
                Some(target) => ui.label(format!("Target ({:.2}, {:.2})", target.x, target.y)),
                None => ui.weak("No target"),
            };
            if ui
                .add_enabled(self.target.is_some(), egui::Button::new("Clear target"))
                .clicked()
            {
                action = Some(StatusAction::ClearTarget);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Settings").clicked() {
                    action = Some(StatusAction::ToggleSettings);
                }
            });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_are_distinct() {
        let states = [
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Connected,
            ConnectionState::Error("x".into()),
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(status_color(a), status_color(b));
            }
        }
    }
}
