//! Application configuration module
//!
//! Connection endpoints, topic wiring, interaction gating, layer visibility
//! and UI preferences, persisted as RON.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use field_renderer::DisplayOptions;
use field_transport::{ReconnectPolicy, Topic};
use serde::{Deserialize, Serialize};

/// Where and how to reach the rosbridge server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Endpoint used by desktop clients
    pub desktop_url: String,
    /// Port used with the page host on mobile clients
    pub mobile_port: u16,
    /// Connect as soon as the dashboard opens
    pub auto_connect: bool,
    /// Backoff after a dropped connection
    pub reconnect: ReconnectPolicy,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            desktop_url: "ws://localhost:9090".to_string(),
            mobile_port: 9090,
            auto_connect: true,
            reconnect: ReconnectPolicy::default(),
        }
    }
}

/// Topic names and message types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopicConfig {
    /// Inbound odometry feed
    pub odometry: Topic,
    /// Coordinate-only target, published on every selection
    pub target_coordinates: Topic,
    /// Timestamped target in the map frame
    pub clicked_point: Topic,
}

impl TopicConfig {
    /// Reject topics with a blank name or message type
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, topic) in [
            ("Odometry", &self.odometry),
            ("Target", &self.target_coordinates),
            ("Clicked point", &self.clicked_point),
        ] {
            if topic.name.trim().is_empty() || topic.message_type.trim().is_empty() {
                return Err(ConfigError::BlankTopic(label));
            }
        }
        Ok(())
    }
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            odometry: Topic::new("/odom", "nav_msgs/Odometry"),
            target_coordinates: Topic::new("/target_coordinates", "geometry_msgs/Point"),
            clicked_point: Topic::new("/clicked_point", "geometry_msgs/PointStamped"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Ignore field clicks while not connected
    pub require_connection: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            require_connection: true,
        }
    }
}

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: UiTheme,
    /// Font size multiplier
    pub font_size: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Dark,
            font_size: 1.0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub topics: TopicConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    /// Layer visibility
    #[serde(default)]
    pub display: DisplayOptions,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
