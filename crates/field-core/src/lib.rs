//! Field Dashboard Core
//!
//! This crate contains the platform-independent pieces of the dashboard:
//! - Field constants and the static field layout
//! - Pixel/meter conversion under the mirrored (top-right) origin
//! - Quaternion to Euler conversion for robot heading
//! - Pose, point and connection state types
//! - Rosbridge message shapes for odometry and published targets

pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod messages;
pub mod types;

pub use constants::*;
pub use error::PoseError;
pub use field::*;
pub use geometry::*;
pub use types::*;
