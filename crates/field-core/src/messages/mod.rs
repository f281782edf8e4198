//! Rosbridge message shapes
//!
//! Field names here are the wire contract with the robot stack and must not
//! be renamed.

mod odometry;
mod point;
mod time;

pub use odometry::*;
pub use point::*;
pub use time::*;
