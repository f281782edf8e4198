//! Rosbridge v2 JSON envelope

use serde::{Deserialize, Serialize};

/// One rosbridge operation, tagged by its `op` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RosbridgeOp {
    Advertise {
        topic: String,
        #[serde(rename = "type")]
        message_type: String,
    },
    Unadvertise {
        topic: String,
    },
    Publish {
        topic: String,
        msg: serde_json::Value,
    },
    Subscribe {
        topic: String,
        #[serde(rename = "type")]
        message_type: String,
    },
    Unsubscribe {
        topic: String,
    },
    /// Bridge status report (warnings, errors on our requests).
    Status {
        #[serde(default)]
        level: String,
        #[serde(default)]
        msg: String,
    },
    /// Any op the dashboard does not handle.
    #[serde(other)]
    Unknown,
}

impl RosbridgeOp {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
