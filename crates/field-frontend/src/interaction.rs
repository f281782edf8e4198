//! Pointer and tap handling on the field view
//!
//! A press inside the canvas becomes a field target: the local selection is
//! updated and the target is published twice, once as a bare coordinate and
//! once stamped in the map frame.

use field_core::messages::{PointMsg, PointStampedMsg};
use field_core::{FieldPoint, pixel_to_meter};
use field_transport::{RosClient, Transport};
use glam::Vec2;
use tracing::{debug, info};

use crate::config::{AppConfig, TopicConfig};
use crate::state::DashboardState;

pub struct InteractionHandler {
    topics: TopicConfig,
    require_connection: bool,
}

impl InteractionHandler {
    pub fn new(topics: TopicConfig, require_connection: bool) -> Self {
        Self {
            topics,
            require_connection,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.topics.clone(),
            config.interaction.require_connection,
        )
    }

    pub fn topics(&self) -> &TopicConfig {
        &self.topics
    }

    /// Announce the target topics so the bridge accepts our publishes.
    pub fn advertise<T: Transport>(&self, client: &mut RosClient<T>) {
        client.advertise(&self.topics.target_coordinates);
        client.advertise(&self.topics.clicked_point);
    }

    /// Handle a press at `pointer` (screen pixels) on a canvas whose top-left
    /// corner is at `canvas_min`.
    ///
    /// Returns the selected point, or None when the press was ignored.
    pub fn handle_pointer<T: Transport>(
        &self,
        pointer: Vec2,
        canvas_min: Vec2,
        state: &mut DashboardState,
        client: &mut RosClient<T>,
        epoch_ms: u64,
    ) -> Option<FieldPoint> {
        let local = pointer - canvas_min;
        let (px, py) = (local.x as f64, local.y as f64);
        if !state.dims.contains(px, py) {
            return None;
        }
        if self.require_connection && !client.is_connected() {
            debug!("Ignoring field press while disconnected");
            return None;
        }

        let point = pixel_to_meter(px, py, state.dims);
        self.select_target(point, state, client, epoch_ms);
        Some(point)
    }

    /// Make `point` the current target and publish it.
    pub fn select_target<T: Transport>(
        &self,
        point: FieldPoint,
        state: &mut DashboardState,
        client: &mut RosClient<T>,
        epoch_ms: u64,
    ) {
        let point = point.clamped();
        info!("Selected target ({:.3}, {:.3})", point.x, point.y);
        state.set_target(point);

        client.publish(
            &self.topics.target_coordinates,
            &PointMsg::coordinate(point),
        );
        client.publish(
            &self.topics.clicked_point,
            &PointStampedMsg::target(point, epoch_ms),
        );
    }

    /// Drop the current selection and tell the robot with the origin sentinel.
    pub fn clear<T: Transport>(&self, state: &mut DashboardState, client: &mut RosClient<T>) {
        info!("Clearing target");
        state.clear_target();
        client.publish(
            &self.topics.target_coordinates,
            &PointMsg::coordinate(FieldPoint::ORIGIN),
        );
    }
}
