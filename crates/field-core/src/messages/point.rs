//! Outbound target point messages

use serde::{Deserialize, Serialize};

use super::{Header, Time};
use crate::constants::MAP_FRAME_ID;
use crate::types::FieldPoint;

/// `geometry_msgs/Point`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointMsg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `geometry_msgs/PointStamped`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointStampedMsg {
    pub header: Header,
    pub point: PointMsg,
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl PointMsg {
    /// Coordinate-only target: clamped to the field, 2 decimals, z = 0.
    pub fn coordinate(point: FieldPoint) -> Self {
        let p = point.clamped();
        Self {
            x: round_to(p.x, 2),
            y: round_to(p.y, 2),
            z: 0.0,
        }
    }
}

impl PointStampedMsg {
    /// Timestamped target in the map frame: clamped to the field, 3 decimals.
    pub fn target(point: FieldPoint, epoch_ms: u64) -> Self {
        let p = point.clamped();
        Self {
            header: Header {
                stamp: Time::from_epoch_millis(epoch_ms),
                frame_id: MAP_FRAME_ID.to_string(),
            },
            point: PointMsg {
                x: round_to(p.x, 3),
                y: round_to(p.y, 3),
                z: 0.0,
            },
        }
    }
}
