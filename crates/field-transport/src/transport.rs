//! Raw socket abstraction

use crate::error::Result;

/// Event surfaced by a transport, drained by the owner once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The socket finished opening.
    Opened,
    /// A text frame arrived.
    Message(String),
    /// The socket reported an error. A `Closed` usually follows.
    Error(String),
    /// The socket is gone.
    Closed,
}

/// A text-frame socket.
///
/// All calls return immediately. Success or failure of `connect` and `send`
/// is reported later through [`Transport::try_recv`]; an `Err` here only
/// means the request could not even be issued.
pub trait Transport {
    /// Start opening a connection, dropping any previous one.
    fn connect(&mut self, url: &str) -> Result<()>;

    /// Queue a text frame for sending.
    fn send(&mut self, text: String) -> Result<()>;

    /// Take the next pending event, if any.
    fn try_recv(&mut self) -> Option<TransportEvent>;

    /// Close the connection and discard pending events. Idempotent.
    fn close(&mut self);
}
