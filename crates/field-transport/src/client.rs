//! Rosbridge client
//!
//! Wraps a [`Transport`] with connection state tracking and the topic
//! operations of the rosbridge protocol. Advertisements and subscriptions are
//! remembered and re-issued every time the socket (re)opens.

use field_core::ConnectionState;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::protocol::RosbridgeOp;
use crate::topic::Topic;
use crate::transport::{Transport, TransportEvent};

/// Event produced by [`RosClient::poll`]
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Connected,
    Error(String),
    Closed,
    /// A message published on a subscribed topic
    Message {
        topic: String,
        msg: serde_json::Value,
    },
}

pub struct RosClient<T: Transport> {
    transport: T,
    state: ConnectionState,
    advertised: Vec<Topic>,
    subscribed: Vec<Topic>,
}

impl<T: Transport> RosClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ConnectionState::Disconnected,
            advertised: Vec::new(),
            subscribed: Vec::new(),
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Start connecting. The outcome arrives later as a [`ClientEvent`].
    pub fn connect(&mut self, url: &str) {
        info!("Connecting to rosbridge at {}", url);
        match self.transport.connect(url) {
            Ok(()) => self.state = ConnectionState::Connecting,
            Err(e) => {
                warn!("Failed to start connection: {}", e);
                self.state = ConnectionState::Error(e.to_string());
            }
        }
    }

    /// Release all topics and close the socket. Safe to call repeatedly.
    pub fn close(&mut self) {
        if self.state.is_connected() {
            for topic in std::mem::take(&mut self.subscribed) {
                self.send_op(&RosbridgeOp::Unsubscribe { topic: topic.name });
            }
            for topic in std::mem::take(&mut self.advertised) {
                self.send_op(&RosbridgeOp::Unadvertise { topic: topic.name });
            }
        } else {
            self.subscribed.clear();
            self.advertised.clear();
        }

        if self.state != ConnectionState::Disconnected {
            info!("Closing rosbridge connection");
        }
        self.transport.close();
        self.state = ConnectionState::Disconnected;
    }

    pub fn advertise(&mut self, topic: &Topic) {
        if !self.advertised.contains(topic) {
            self.advertised.push(topic.clone());
        }
        if self.is_connected() {
            self.send_op(&advertise_op(topic));
        }
    }

    pub fn unadvertise(&mut self, topic: &Topic) {
        let before = self.advertised.len();
        self.advertised.retain(|t| t != topic);
        if self.is_connected() && self.advertised.len() != before {
            self.send_op(&RosbridgeOp::Unadvertise {
                topic: topic.name.clone(),
            });
        }
    }

    pub fn subscribe(&mut self, topic: &Topic) {
        if !self.subscribed.contains(topic) {
            self.subscribed.push(topic.clone());
        }
        if self.is_connected() {
            self.send_op(&subscribe_op(topic));
        }
    }

    pub fn unsubscribe(&mut self, topic: &Topic) {
        let before = self.subscribed.len();
        self.subscribed.retain(|t| t != topic);
        if self.is_connected() && self.subscribed.len() != before {
            self.send_op(&RosbridgeOp::Unsubscribe {
                topic: topic.name.clone(),
            });
        }
    }

    /// Publish a message. Returns false when it was dropped because the
    /// client is not connected or the frame could not be sent.
    pub fn publish<M: Serialize>(&mut self, topic: &Topic, msg: &M) -> bool {
        if !self.is_connected() {
            debug!("Dropping publish on {}: not connected", topic.name);
            return false;
        }
        let msg = match serde_json::to_value(msg) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to serialize message for {}: {}", topic.name, e);
                return false;
            }
        };
        self.send_op(&RosbridgeOp::Publish {
            topic: topic.name.clone(),
            msg,
        })
    }

    /// Drain pending transport events, updating the connection state.
    pub fn poll(&mut self) -> Vec<ClientEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.transport.try_recv() {
            match event {
                TransportEvent::Opened => {
                    info!("Connected to rosbridge");
                    self.state = ConnectionState::Connected;
                    self.replay_topics();
                    events.push(ClientEvent::Connected);
                }
                TransportEvent::Error(msg) => {
                    warn!("Rosbridge error: {}", msg);
                    self.state = ConnectionState::Error(msg.clone());
                    events.push(ClientEvent::Error(msg));
                }
                TransportEvent::Closed => {
                    info!("Rosbridge connection closed");
                    // Keep the error text visible if the close was caused by one
                    if !matches!(self.state, ConnectionState::Error(_)) {
                        self.state = ConnectionState::Disconnected;
                    }
                    events.push(ClientEvent::Closed);
                }
                TransportEvent::Message(text) => {
                    if let Some(event) = self.handle_frame(&text) {
                        events.push(event);
                    }
                }
            }
        }
        events
    }

    fn handle_frame(&self, text: &str) -> Option<ClientEvent> {
        match RosbridgeOp::from_json(text) {
            Ok(RosbridgeOp::Publish { topic, msg }) => {
                if self.subscribed.iter().any(|t| t.name == topic) {
                    Some(ClientEvent::Message { topic, msg })
                } else {
                    debug!("Ignoring message on unsubscribed topic {}", topic);
                    None
                }
            }
            Ok(RosbridgeOp::Status { level, msg }) => {
                warn!("Rosbridge status [{}]: {}", level, msg);
                None
            }
            Ok(op) => {
                debug!("Ignoring rosbridge op {:?}", op);
                None
            }
            Err(e) => {
                warn!("Malformed rosbridge frame: {}", e);
                None
            }
        }
    }

    fn replay_topics(&mut self) {
        let ops: Vec<RosbridgeOp> = self
            .advertised
            .iter()
            .map(advertise_op)
            .chain(self.subscribed.iter().map(subscribe_op))
            .collect();
        for op in &ops {
            self.send_op(op);
        }
    }

    fn send_op(&mut self, op: &RosbridgeOp) -> bool {
        match self.try_send_op(op) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send rosbridge op: {}", e);
                false
            }
        }
    }

    fn try_send_op(&mut self, op: &RosbridgeOp) -> Result<()> {
        let text = op.to_json()?;
        self.transport.send(text)
    }
}

impl<T: Transport> Drop for RosClient<T> {
    fn drop(&mut self) {
        self.close();
    }
}

fn advertise_op(topic: &Topic) -> RosbridgeOp {
    RosbridgeOp::Advertise {
        topic: topic.name.clone(),
        message_type: topic.message_type.clone(),
    }
}

fn subscribe_op(topic: &Topic) -> RosbridgeOp {
    RosbridgeOp::Subscribe {
        topic: topic.name.clone(),
        message_type: topic.message_type.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;

    fn odom() -> Topic {
        Topic::new("/odom", "nav_msgs/Odometry")
    }

    fn target() -> Topic {
        Topic::new("/target_coordinates", "geometry_msgs/Point")
    }

    fn connected_client() -> RosClient<MockTransport> {
        let mut client = RosClient::new(MockTransport::new());
        client.connect("ws://localhost:9090");
        client.transport_mut().push_event(TransportEvent::Opened);
        assert_eq!(client.poll(), vec![ClientEvent::Connected]);
        client
    }

    #[test]
    fn test_connect_sets_connecting_then_connected() {
        let mut client = RosClient::new(MockTransport::new());
        client.connect("ws://localhost:9090");
        assert_eq!(client.state(), &ConnectionState::Connecting);
        assert_eq!(
            client.transport().connect_urls(),
            vec!["ws://localhost:9090".to_string()]
        );

        client.transport_mut().push_event(TransportEvent::Opened);
        client.poll();
        assert!(client.is_connected());
    }

    #[test]
    fn test_connect_failure_surfaces_error_state() {
        let mut transport = MockTransport::new();
        transport.fail_next_connect("bad url");
        let mut client = RosClient::new(transport);
        client.connect("nonsense");
        assert!(matches!(client.state(), ConnectionState::Error(_)));
    }

    #[test]
    fn test_topics_are_replayed_on_open() {
        let mut client = RosClient::new(MockTransport::new());
        client.advertise(&target());
        client.subscribe(&odom());
        assert!(client.transport().sent_ops().is_empty());

        client.connect("ws://localhost:9090");
        client.transport_mut().push_event(TransportEvent::Opened);
        client.poll();

        assert_eq!(
            client.transport().sent_ops(),
            vec![
                json!({"op": "advertise", "topic": "/target_coordinates", "type": "geometry_msgs/Point"}),
                json!({"op": "subscribe", "topic": "/odom", "type": "nav_msgs/Odometry"}),
            ]
        );
    }

    #[test]
    fn test_publish_while_disconnected_is_dropped() {
        let mut client = RosClient::new(MockTransport::new());
        assert!(!client.publish(&target(), &json!({"x": 1.0})));
        assert!(client.transport().sent_ops().is_empty());
    }

    #[test]
    fn test_publish_while_connected() {
        let mut client = connected_client();
        assert!(client.publish(&target(), &json!({"x": 1.0, "y": 2.0, "z": 0.0})));
        assert_eq!(
            client.transport().sent_ops().last().unwrap(),
            &json!({"op": "publish", "topic": "/target_coordinates", "msg": {"x": 1.0, "y": 2.0, "z": 0.0}})
        );
    }

    #[test]
    fn test_messages_only_for_subscribed_topics() {
        let mut client = connected_client();
        client.subscribe(&odom());
        client.transport_mut().push_event(TransportEvent::Message(
            r#"{"op":"publish","topic":"/odom","msg":{"a":1}}"#.into(),
        ));
        client.transport_mut().push_event(TransportEvent::Message(
            r#"{"op":"publish","topic":"/other","msg":{"a":2}}"#.into(),
        ));
        client
            .transport_mut()
            .push_event(TransportEvent::Message("not json".into()));

        assert_eq!(
            client.poll(),
            vec![ClientEvent::Message {
                topic: "/odom".into(),
                msg: json!({"a": 1})
            }]
        );
    }

    #[test]
    fn test_error_then_close_keeps_error_text() {
        let mut client = connected_client();
        client
            .transport_mut()
            .push_event(TransportEvent::Error("reset by peer".into()));
        client.transport_mut().push_event(TransportEvent::Closed);
        let events = client.poll();
        assert_eq!(
            events,
            vec![ClientEvent::Error("reset by peer".into()), ClientEvent::Closed]
        );
        assert_eq!(
            client.state(),
            &ConnectionState::Error("reset by peer".into())
        );
    }

    #[test]
    fn test_close_releases_topics_once() {
        let mut client = connected_client();
        client.advertise(&target());
        client.subscribe(&odom());
        client.transport_mut().clear_sent();

        client.close();
        client.close();

        assert_eq!(
            client.transport().sent_ops(),
            vec![
                json!({"op": "unsubscribe", "topic": "/odom"}),
                json!({"op": "unadvertise", "topic": "/target_coordinates"}),
            ]
        );
        assert_eq!(client.state(), &ConnectionState::Disconnected);
        assert!(client.transport().close_count() >= 2);
    }
}
