//! Compile-time field and canvas constants

/// Field width in meters (x axis).
pub const FIELD_WIDTH: f64 = 15.0;

/// Field height in meters (y axis).
pub const FIELD_HEIGHT: f64 = 8.0;

/// Spacing between grid lines in meters.
pub const GRID_SPACING: f64 = 1.0;

/// Radius of the robot body marker in meters.
pub const ROBOT_RADIUS: f64 = 0.3;

/// Length of the heading arrow in meters.
pub const HEADING_ARROW_LENGTH: f64 = 0.6;

/// Smallest canvas side in pixels. Geometry is undefined below this.
pub const MIN_CANVAS_SIZE: f64 = 100.0;

/// Frame id stamped on published target points.
pub const MAP_FRAME_ID: &str = "map";
