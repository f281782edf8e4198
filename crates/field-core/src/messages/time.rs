//! ROS time stamps

use serde::{Deserialize, Serialize};

/// ROS1-style time stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Time {
    pub secs: u64,
    pub nsecs: u32,
}

impl Time {
    /// Build a stamp from milliseconds since the Unix epoch.
    pub fn from_epoch_millis(epoch_ms: u64) -> Self {
        Self {
            secs: epoch_ms / 1000,
            nsecs: (epoch_ms % 1000) as u32 * 1_000_000,
        }
    }
}

/// Standard message header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_from_epoch_millis() {
        let t = Time::from_epoch_millis(1_700_000_123_456);
        assert_eq!(t.secs, 1_700_000_123);
        assert_eq!(t.nsecs, 456_000_000);
    }

    #[test]
    fn test_stamp_on_whole_second() {
        let t = Time::from_epoch_millis(5_000);
        assert_eq!(t, Time { secs: 5, nsecs: 0 });
    }
}
