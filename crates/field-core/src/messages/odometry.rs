//! Inbound `nav_msgs/Odometry` feed

use serde::{Deserialize, Serialize};

use crate::error::PoseError;
use crate::geometry::quaternion_to_euler;
use crate::types::{Quaternion, RobotPose};

/// Quaternions shorter than this are rejected as degenerate.
const MIN_QUATERNION_NORM: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseMsg {
    pub position: Position,
    pub orientation: Quaternion,
}

/// Covariance is accepted on the wire and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseWithCovariance {
    pub pose: PoseMsg,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TwistMsg {
    #[serde(default)]
    pub linear: Option<Vector3>,
    #[serde(default)]
    pub angular: Option<Vector3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TwistWithCovariance {
    #[serde(default)]
    pub twist: TwistMsg,
}

/// The subset of `nav_msgs/Odometry` the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdometryMsg {
    pub pose: PoseWithCovariance,
    #[serde(default)]
    pub twist: Option<TwistWithCovariance>,
}

impl OdometryMsg {
    /// Parse a raw rosbridge `msg` payload.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, PoseError> {
        Ok(Self::deserialize(value)?)
    }

    /// Validate the sample and derive the displayed pose.
    ///
    /// Either the whole pose is produced or an error is returned; there is no
    /// partially applied result.
    pub fn to_robot_pose(&self) -> Result<RobotPose, PoseError> {
        let position = self.pose.pose.position;
        let orientation = self.pose.pose.orientation;

        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(PoseError::NonFinite("pose.pose.position"));
        }
        if !orientation.is_finite() {
            return Err(PoseError::NonFinite("pose.pose.orientation"));
        }
        if orientation.norm() < MIN_QUATERNION_NORM {
            return Err(PoseError::DegenerateOrientation);
        }

        let angle = quaternion_to_euler(orientation).yaw;
        let mut pose = RobotPose::new(position.x, position.y, angle);

        if let Some(twist) = &self.twist {
            let linear = twist.twist.linear.map(|v| v.x);
            let angular = twist.twist.angular.map(|v| v.z);
            if linear.is_some_and(|v| !v.is_finite()) {
                return Err(PoseError::NonFinite("twist.twist.linear"));
            }
            if angular.is_some_and(|v| !v.is_finite()) {
                return Err(PoseError::NonFinite("twist.twist.angular"));
            }
            pose.linear_velocity = linear;
            pose.angular_velocity = angular;
        }

        Ok(pose)
    }
}

/// Parse and validate one odometry payload in a single step.
pub fn parse_odometry(value: &serde_json::Value) -> Result<RobotPose, PoseError> {
    OdometryMsg::from_value(value)?.to_robot_pose()
}
