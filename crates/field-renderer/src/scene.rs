//! Per-frame scene snapshot

use field_core::{CanvasDimensions, FieldPoint, RobotPose};

/// Everything a frame needs to read, copied out of the dashboard state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub dims: CanvasDimensions,
    pub robot: Option<RobotPose>,
    pub target: Option<FieldPoint>,
}

impl Scene {
    pub fn new(dims: CanvasDimensions) -> Self {
        Self {
            dims,
            robot: None,
            target: None,
        }
    }

    pub fn with_robot(mut self, robot: Option<RobotPose>) -> Self {
        self.robot = robot;
        self
    }

    pub fn with_target(mut self, target: Option<FieldPoint>) -> Self {
        self.target = target;
        self
    }
}
