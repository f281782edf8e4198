//! Built-in layers of the field view.
//!
//! - [`GridRenderer`]: One-meter grid with coordinate labels
//! - [`FieldElementsRenderer`]: Boundary, goal zones and center line
//! - [`RobotRenderer`]: Robot body, heading arrow and pose label
//! - [`TargetRenderer`]: Currently selected target point
//! - [`OriginRenderer`]: Marker at the field origin

pub mod field;
pub mod grid;
pub mod origin;
pub mod robot;
pub mod target;

pub use field::FieldElementsRenderer;
pub use grid::GridRenderer;
pub use origin::OriginRenderer;
pub use robot::RobotRenderer;
pub use target::TargetRenderer;

/// Render priorities for sub-renderers.
///
/// Lower values are rendered first (background), higher values are rendered
/// on top.
pub mod priorities {
    /// Grid is rendered first (background)
    pub const GRID: i32 = 0;
    /// Field schematic sits on the grid
    pub const FIELD: i32 = 50;
    pub const ROBOT: i32 = 200;
    /// Target is drawn over the robot so it stays clickable-looking
    pub const TARGET: i32 = 300;
    pub const ORIGIN: i32 = 1000;
}

/// Registered names of the built-in layers.
pub mod names {
    pub const GRID: &str = "grid";
    pub const FIELD: &str = "field";
    pub const ROBOT: &str = "robot";
    pub const TARGET: &str = "target";
    pub const ORIGIN: &str = "origin";
}
