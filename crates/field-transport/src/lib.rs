//! Rosbridge transport for the field dashboard
//!
//! # Architecture
//!
//! - [`Transport`] - Raw text-frame socket abstraction (connect/send/poll/close)
//! - [`RosClient`] - Rosbridge v2 topic operations on top of any transport
//! - [`WebSocketTransport`] - Native (tungstenite worker thread) or browser
//!   (web-sys) WebSocket, selected by target
//! - [`mock::MockTransport`] - In-memory transport for tests
//! - [`Backoff`] / [`ReconnectTimer`] - Exponential reconnect policy

pub mod backoff;
pub mod client;
pub mod error;
pub mod mock;
pub mod protocol;
pub mod topic;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

pub use backoff::{Backoff, ReconnectPolicy, ReconnectTimer};
pub use client::{ClientEvent, RosClient};
pub use error::{Result, TransportError};
pub use protocol::RosbridgeOp;
pub use topic::Topic;
pub use transport::{Transport, TransportEvent};

#[cfg(not(target_arch = "wasm32"))]
pub use native::WebSocketTransport;
#[cfg(target_arch = "wasm32")]
pub use web::WebSocketTransport;
