//! Error types for field-core

use thiserror::Error;

/// Reasons an inbound odometry sample is rejected.
///
/// A rejected sample never touches the displayed pose.
#[derive(Error, Debug)]
pub enum PoseError {
    #[error("Malformed odometry message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Non-finite value in field `{0}`")]
    NonFinite(&'static str),

    #[error("Orientation quaternion has zero length")]
    DegenerateOrientation,
}
