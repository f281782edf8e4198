//! Applies inbound client events to the dashboard state

use field_core::messages::parse_odometry;
use field_transport::ClientEvent;
use tracing::{debug, warn};

use crate::state::DashboardState;

/// Apply one client event. Returns true when the displayed pose changed.
///
/// A sample that fails validation is dropped whole and the previous pose stays
/// on screen. Losing the connection clears the pose.
pub fn apply_event(event: &ClientEvent, state: &mut DashboardState, odometry_topic: &str) -> bool {
    match event {
        ClientEvent::Message { topic, msg } if topic == odometry_topic => {
            match parse_odometry(msg) {
                Ok(pose) => {
                    state.set_pose(pose);
                    true
                }
                Err(e) => {
                    warn!("Dropping odometry sample: {}", e);
                    false
                }
            }
        }
        ClientEvent::Message { topic, .. } => {
            debug!("No handler for topic {}", topic);
            false
        }
        ClientEvent::Closed | ClientEvent::Error(_) => {
            let had_pose = state.robot_pose.is_some();
            state.clear_pose();
            had_pose
        }
        ClientEvent::Connected => false,
    }
}
