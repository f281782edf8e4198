//! Display options for controlling visibility of field view layers.

use serde::{Deserialize, Serialize};

/// Display options for controlling visibility of field view layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Whether the one-meter grid and its labels are visible.
    pub show_grid: bool,
    /// Whether the field schematic (boundary, goals, center line) is visible.
    pub show_field: bool,
    /// Whether the robot marker is visible.
    pub show_robot: bool,
    /// Whether the selected target is visible.
    pub show_target: bool,
    /// Whether the origin marker is visible.
    pub show_origin: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_field: true,
            show_robot: true,
            show_target: true,
            show_origin: true,
        }
    }
}

impl DisplayOptions {
    /// Create new display options with all layers visible.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn show_field(&self) -> bool {
        self.show_field
    }

    pub fn set_show_field(&mut self, show: bool) {
        self.show_field = show;
    }

    pub fn show_robot(&self) -> bool {
        self.show_robot
    }

    pub fn set_show_robot(&mut self, show: bool) {
        self.show_robot = show;
    }

    pub fn show_target(&self) -> bool {
        self.show_target
    }

    pub fn set_show_target(&mut self, show: bool) {
        self.show_target = show;
    }

    pub fn show_origin(&self) -> bool {
        self.show_origin
    }

    pub fn set_show_origin(&mut self, show: bool) {
        self.show_origin = show;
    }
}
