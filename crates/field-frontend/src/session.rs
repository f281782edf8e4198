//! Connection lifecycle for one dashboard
//!
//! Owns the rosbridge client, the dashboard state and the reconnect timer.
//! The UI calls [`DashboardSession::pump`] once per frame with the frame clock;
//! everything else happens in response to operator input.

use field_core::{ConnectionState, FieldPoint};
use field_transport::{ClientEvent, ReconnectTimer, RosClient, Transport};
use glam::Vec2;
use tracing::{info, warn};

use crate::config::{AppConfig, TopicConfig};
use crate::endpoint::{PageInfo, select_endpoint};
use crate::interaction::InteractionHandler;
use crate::pose_feed::apply_event;
use crate::state::DashboardState;

pub struct DashboardSession<T: Transport> {
    client: RosClient<T>,
    state: DashboardState,
    interaction: InteractionHandler,
    reconnect: ReconnectTimer,
    page: Option<PageInfo>,
    endpoint: String,
}

impl<T: Transport> DashboardSession<T> {
    pub fn new(transport: T, config: &AppConfig, page: Option<PageInfo>) -> Self {
        let endpoint = select_endpoint(&config.connection, page.as_ref());
        Self {
            client: RosClient::new(transport),
            state: DashboardState::new(),
            interaction: InteractionHandler::from_config(config),
            reconnect: ReconnectTimer::new(config.connection.reconnect),
            page,
            endpoint,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    pub fn client(&self) -> &RosClient<T> {
        &self.client
    }

    pub fn connection(&self) -> &ConnectionState {
        self.client.state()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// True once the backoff policy has given up
    pub fn reconnect_exhausted(&self) -> bool {
        self.reconnect.is_exhausted() && !self.reconnect.is_pending()
    }

    /// Open the connection. The odometry subscription and the target
    /// advertisements are (re)registered first, so they are sent as soon as
    /// the socket opens.
    pub fn connect(&mut self) {
        self.register_topics();
        self.client.connect(&self.endpoint);
    }

    /// Operator-requested reconnect: forget past failures and try now.
    pub fn reconnect_now(&mut self) {
        if !self.client.state().can_reconnect() {
            return;
        }
        self.reconnect.reset();
        self.connect();
    }

    /// Drain transport events and drive automatic reconnection.
    ///
    /// `now` is the frame clock in seconds. Returns the delay until the next
    /// armed reconnect so the caller can wake up for it.
    pub fn pump(&mut self, now: f64) -> Option<f64> {
        let odometry = self.interaction.topics().odometry.name.clone();
        for event in self.client.poll() {
            apply_event(&event, &mut self.state, &odometry);
            match event {
                ClientEvent::Connected => self.reconnect.reset(),
                ClientEvent::Closed => self.schedule_reconnect(now),
                _ => {}
            }
        }

        if self.reconnect.poll(now) {
            info!(
                "Reconnecting to {} (attempt {})",
                self.endpoint,
                self.reconnect.attempts()
            );
            self.connect();
            // An immediate failure produces no close event
            if matches!(self.client.state(), ConnectionState::Error(_)) {
                self.schedule_reconnect(now);
            }
        }

        self.reconnect.remaining(now)
    }

    fn schedule_reconnect(&mut self, now: f64) {
        match self.reconnect.schedule(now) {
            Some(delay) => info!("Reconnecting in {:.1}s", delay.as_secs_f64()),
            None if self.reconnect.is_exhausted() => {
                warn!("Giving up on {} after {} attempts", self.endpoint, self.reconnect.attempts())
            }
            None => {}
        }
    }

    /// Handle a press on the field view. See [`InteractionHandler::handle_pointer`].
    pub fn press(&mut self, pointer: Vec2, canvas_min: Vec2, epoch_ms: u64) -> Option<FieldPoint> {
        self.interaction
            .handle_pointer(pointer, canvas_min, &mut self.state, &mut self.client, epoch_ms)
    }

    pub fn clear_target(&mut self) {
        self.interaction.clear(&mut self.state, &mut self.client);
    }

    /// Pick up edited settings. Changed topics are swapped on the bridge
    /// right away; a topic set with a blank entry is ignored.
    pub fn apply_config(&mut self, config: &AppConfig) {
        let current = self.interaction.topics().clone();
        let topics = match config.topics.validate() {
            Ok(()) => config.topics.clone(),
            Err(e) => {
                warn!("Keeping current topics: {}", e);
                current.clone()
            }
        };
        self.swap_topics(&current, &topics);
        self.interaction = InteractionHandler::new(topics, config.interaction.require_connection);

        self.reconnect.set_policy(config.connection.reconnect);
        let endpoint = select_endpoint(&config.connection, self.page.as_ref());
        if endpoint != self.endpoint {
            info!("Endpoint changed to {}", endpoint);
            self.endpoint = endpoint;
        }
    }

    /// Release topics and close the socket. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.reconnect.reset();
        self.client.close();
        self.state.clear_pose();
    }

    fn register_topics(&mut self) {
        let topics = self.interaction.topics().clone();
        self.client.subscribe(&topics.odometry);
        self.interaction.advertise(&mut self.client);
    }

    /// Replace only the topics that differ between `old` and `new`
    fn swap_topics(&mut self, old: &TopicConfig, new: &TopicConfig) {
        if old.odometry != new.odometry {
            self.client.unsubscribe(&old.odometry);
            self.client.subscribe(&new.odometry);
        }
        for (old, new) in [
            (&old.target_coordinates, &new.target_coordinates),
            (&old.clicked_point, &new.clicked_point),
        ] {
            if old != new {
                self.client.unadvertise(old);
                self.client.advertise(new);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_transport::mock::MockTransport;
    use field_transport::{ReconnectPolicy, TransportEvent};
    use serde_json::json;

    fn session_with(policy: ReconnectPolicy) -> DashboardSession<MockTransport> {
        let mut config = AppConfig::new();
        config.connection.reconnect = policy;
        DashboardSession::new(MockTransport::new(), &config, None)
    }

    fn session() -> DashboardSession<MockTransport> {
        session_with(ReconnectPolicy::default())
    }

    fn open(session: &mut DashboardSession<MockTransport>, now: f64) {
        session
            .client
            .transport_mut()
            .push_event(TransportEvent::Opened);
        session.pump(now);
    }

    fn drop_connection(session: &mut DashboardSession<MockTransport>, now: f64) -> Option<f64> {
        session
            .client
            .transport_mut()
            .push_event(TransportEvent::Closed);
        session.pump(now)
    }

    #[test]
    fn test_topics_sent_when_socket_opens() {
        let mut session = session();
        session.connect();
        assert_eq!(session.endpoint(), "ws://localhost:9090");
        assert!(session.client().transport().sent_ops().is_empty());

        open(&mut session, 0.0);
        assert_eq!(
            session.client().transport().sent_ops(),
            vec![
                json!({"op": "advertise", "topic": "/target_coordinates", "type": "geometry_msgs/Point"}),
                json!({"op": "advertise", "topic": "/clicked_point", "type": "geometry_msgs/PointStamped"}),
                json!({"op": "subscribe", "topic": "/odom", "type": "nav_msgs/Odometry"}),
            ]
        );
    }

    #[test]
    fn test_drop_schedules_backoff_reconnect() {
        let mut session = session();
        session.connect();
        open(&mut session, 0.0);

        let wait = drop_connection(&mut session, 10.0);
        assert_eq!(wait, Some(1.0));
        assert_eq!(session.connection(), &ConnectionState::Disconnected);

        session.pump(10.5);
        assert_eq!(session.client().transport().connect_urls().len(), 1);

        session.pump(11.0);
        assert_eq!(session.client().transport().connect_urls().len(), 2);
        assert_eq!(session.connection(), &ConnectionState::Connecting);

        // second failure waits twice as long
        let wait = drop_connection(&mut session, 12.0);
        assert_eq!(wait, Some(2.0));
    }

    #[test]
    fn test_successful_reconnect_resets_backoff() {
        let mut session = session();
        session.connect();
        drop_connection(&mut session, 0.0);
        session.pump(1.0);
        open(&mut session, 1.5);

        let wait = drop_connection(&mut session, 5.0);
        assert_eq!(wait, Some(1.0));
    }

    #[test]
    fn test_reconnect_gives_up_after_max_attempts() {
        let mut session = session_with(ReconnectPolicy {
            base_delay_ms: 100,
            max_delay_ms: 100,
            max_attempts: 2,
        });
        session.connect();

        let mut now = 0.0;
        drop_connection(&mut session, now);
        for _ in 0..2 {
            now += 0.1;
            session.pump(now);
            drop_connection(&mut session, now);
        }
        assert!(session.reconnect_exhausted());
        assert_eq!(session.pump(now + 10.0), None);
        assert_eq!(session.client().transport().connect_urls().len(), 3);

        // the operator can still force a retry
        session.reconnect_now();
        assert_eq!(session.client().transport().connect_urls().len(), 4);
        assert!(!session.reconnect_exhausted());
    }

    #[test]
    fn test_disconnect_clears_pose() {
        let mut session = session();
        session.connect();
        open(&mut session, 0.0);
        session
            .client
            .transport_mut()
            .push_event(TransportEvent::Message(
                json!({
                    "op": "publish",
                    "topic": "/odom",
                    "msg": {"pose": {"pose": {
                        "position": {"x": 2.0, "y": 3.0},
                        "orientation": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}
                    }}}
                })
                .to_string(),
            ));
        session.pump(0.1);
        assert!(session.state().robot_pose.is_some());

        drop_connection(&mut session, 0.2);
        assert!(session.state().robot_pose.is_none());
    }

    #[test]
    fn test_reconnect_now_requires_idle_connection() {
        let mut session = session();
        session.connect();
        session.reconnect_now();
        assert_eq!(session.client().transport().connect_urls().len(), 1);
    }

    #[test]
    fn test_topic_change_resubscribes() {
        let mut session = session();
        session.connect();
        open(&mut session, 0.0);
        session.client.transport_mut().clear_sent();

        let mut config = AppConfig::new();
        config.topics.odometry.name = "/robot/odom".into();
        session.apply_config(&config);

        assert_eq!(
            session.client().transport().sent_ops(),
            vec![
                json!({"op": "unsubscribe", "topic": "/odom"}),
                json!({"op": "subscribe", "topic": "/robot/odom", "type": "nav_msgs/Odometry"}),
            ]
        );

        // applying the same settings again is silent
        session.client.transport_mut().clear_sent();
        session.apply_config(&config);
        assert!(session.client().transport().sent_ops().is_empty());
    }

    #[test]
    fn test_target_topic_change_readvertises_only_that_topic() {
        let mut session = session();
        session.connect();
        open(&mut session, 0.0);
        session.client.transport_mut().clear_sent();

        let mut config = AppConfig::new();
        config.topics.clicked_point.name = "/goal".into();
        session.apply_config(&config);

        assert_eq!(
            session.client().transport().sent_ops(),
            vec![
                json!({"op": "unadvertise", "topic": "/clicked_point"}),
                json!({"op": "advertise", "topic": "/goal", "type": "geometry_msgs/PointStamped"}),
            ]
        );
    }

    #[test]
    fn test_blank_topic_keeps_current_wiring() {
        let mut session = session();
        session.connect();
        open(&mut session, 0.0);
        session.client.transport_mut().clear_sent();

        for partial in ["", " ", "/"] {
            let mut config = AppConfig::new();
            config.topics.odometry.name = partial.into();
            config.topics.target_coordinates.name = String::new();
            session.apply_config(&config);
        }

        // a blank target name vetoes the whole set
        assert!(session.client().transport().sent_ops().is_empty());
        assert_eq!(session.interaction.topics(), &TopicConfig::default());
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut session = session();
        session.connect();
        open(&mut session, 0.0);
        session.client.transport_mut().clear_sent();

        session.shutdown();
        session.shutdown();
        assert_eq!(session.connection(), &ConnectionState::Disconnected);
        assert_eq!(session.client().transport().sent_ops().len(), 3);
        assert_eq!(session.pump(100.0), None);
    }
}
