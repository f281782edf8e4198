//! Colors for field view rendering

use glam::Vec4;

pub const BACKGROUND: Vec4 = Vec4::new(0.09, 0.32, 0.16, 1.0); // Field green
pub const GRID_LINE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.15);
pub const GRID_LABEL: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.55);

pub const ROBOT_BODY: Vec4 = Vec4::new(0.15, 0.55, 1.0, 0.9); // Blue
pub const ROBOT_OUTLINE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const ROBOT_HEADING: Vec4 = Vec4::new(1.0, 0.85, 0.1, 1.0); // Yellow
pub const ROBOT_LABEL: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

pub const TARGET: Vec4 = Vec4::new(1.0, 0.3, 0.3, 1.0); // Red
pub const TARGET_LABEL: Vec4 = Vec4::new(1.0, 0.85, 0.85, 1.0);

pub const ORIGIN: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0); // Yellow
