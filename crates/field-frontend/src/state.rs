//! Dashboard state shared by the render loop, interaction and pose feed

use field_core::{CanvasDimensions, FieldPoint, RobotPose};
use field_renderer::Scene;

/// Everything the field view shows, owned by the UI thread.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Last selected target, if any
    pub current_point: Option<FieldPoint>,
    /// Latest odometry-derived pose; None until the first valid sample
    pub robot_pose: Option<RobotPose>,
    /// Drawing area of the current frame
    pub dims: CanvasDimensions,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the drawing area. Called every frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.dims = CanvasDimensions::new(width, height);
    }

    pub fn set_target(&mut self, point: FieldPoint) {
        self.current_point = Some(point.clamped());
    }

    pub fn clear_target(&mut self) {
        self.current_point = None;
    }

    /// Replace the pose wholesale
    pub fn set_pose(&mut self, pose: RobotPose) {
        self.robot_pose = Some(pose);
    }

    pub fn clear_pose(&mut self) {
        self.robot_pose = None;
    }

    /// Snapshot for one frame
    pub fn scene(&self) -> Scene {
        Scene::new(self.dims)
            .with_robot(self.robot_pose)
            .with_target(self.current_point)
    }
}
