//! Topic descriptors

use serde::{Deserialize, Serialize};

/// A named, typed pub/sub channel on the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub message_type: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, message_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_type: message_type.into(),
        }
    }
}
