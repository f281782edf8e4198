//! Robot pose and orientation types

use serde::{Deserialize, Serialize};

/// Orientation quaternion as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Roll, pitch, yaw in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Robot pose derived from the latest odometry sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RobotPose {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, counter-clockwise from the field x axis.
    pub angle: f64,
    pub linear_velocity: Option<f64>,
    pub angular_velocity: Option<f64>,
}

impl RobotPose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            angle,
            linear_velocity: None,
            angular_velocity: None,
        }
    }

    pub fn with_velocity(mut self, linear: f64, angular: f64) -> Self {
        self.linear_velocity = Some(linear);
        self.angular_velocity = Some(angular);
        self
    }

    /// Text shown next to the robot marker
    pub fn label(&self) -> String {
        let mut label = format!(
            "({:.2}, {:.2}) m  {:.1}\u{00B0}",
            self.x,
            self.y,
            self.angle.to_degrees()
        );
        if let Some(v) = self.linear_velocity {
            label.push_str(&format!("  v {:.2} m/s", v));
        }
        if let Some(w) = self.angular_velocity {
            label.push_str(&format!("  \u{03C9} {:.2} rad/s", w));
        }
        label
    }
}
