//! Native WebSocket transport
//!
//! A worker thread owns the blocking tungstenite socket. The UI thread talks
//! to it only through channels, so nothing on the UI side ever blocks.

use std::io::ErrorKind;
use std::net::TcpStream;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use tracing::{debug, warn};
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

use crate::error::{Result, TransportError};
use crate::transport::{Transport, TransportEvent};

/// How long a socket read may block before the worker checks for outgoing frames.
const READ_POLL_INTERVAL: Duration = Duration::from_millis(20);

enum Command {
    Send(String),
    Close,
}

pub struct WebSocketTransport {
    commands: Option<Sender<Command>>,
    events: Option<Receiver<TransportEvent>>,
}

impl WebSocketTransport {
    pub fn new() -> Self {
        Self {
            commands: None,
            events: None,
        }
    }
}

impl Default for WebSocketTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for WebSocketTransport {
    fn connect(&mut self, url: &str) -> Result<()> {
        self.close();

        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let url = url.to_string();

        std::thread::Builder::new()
            .name("rosbridge-io".to_string())
            .spawn(move || run_socket(&url, command_rx, event_tx))
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        self.commands = Some(command_tx);
        self.events = Some(event_rx);
        Ok(())
    }

    fn send(&mut self, text: String) -> Result<()> {
        let commands = self.commands.as_ref().ok_or(TransportError::NotConnected)?;
        commands
            .send(Command::Send(text))
            .map_err(|_| TransportError::Send("socket worker has exited".to_string()))
    }

    fn try_recv(&mut self) -> Option<TransportEvent> {
        self.events.as_ref()?.try_recv().ok()
    }

    fn close(&mut self) {
        if let Some(commands) = self.commands.take() {
            // The worker may already be gone
            let _ = commands.send(Command::Close);
        }
        self.events = None;
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.close();
    }
}

fn run_socket(url: &str, commands: Receiver<Command>, events: Sender<TransportEvent>) {
    let (mut socket, _response) = match tungstenite::connect(url) {
        Ok(pair) => pair,
        Err(e) => {
            let _ = events.send(TransportEvent::Error(e.to_string()));
            let _ = events.send(TransportEvent::Closed);
            return;
        }
    };

    if let Err(e) = set_read_timeout(&socket, READ_POLL_INTERVAL) {
        warn!("Failed to set socket read timeout: {}", e);
    }
    if events.send(TransportEvent::Opened).is_err() {
        return;
    }
    debug!("Socket worker running for {}", url);

    loop {
        loop {
            match commands.try_recv() {
                Ok(Command::Send(text)) => {
                    if let Err(e) = socket.send(Message::Text(text)) {
                        let _ = events.send(TransportEvent::Error(e.to_string()));
                        let _ = events.send(TransportEvent::Closed);
                        return;
                    }
                }
                Ok(Command::Close) | Err(TryRecvError::Disconnected) => {
                    let _ = socket.close(None);
                    let _ = socket.flush();
                    debug!("Socket worker for {} closed by owner", url);
                    return;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        match socket.read() {
            Ok(Message::Text(text)) => {
                if events.send(TransportEvent::Message(text)).is_err() {
                    let _ = socket.close(None);
                    return;
                }
            }
            Ok(Message::Close(_)) => {
                let _ = events.send(TransportEvent::Closed);
                return;
            }
            // Pings are answered by tungstenite itself
            Ok(_) => {}
            Err(tungstenite::Error::Io(e))
                if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                let _ = events.send(TransportEvent::Closed);
                return;
            }
            Err(e) => {
                let _ = events.send(TransportEvent::Error(e.to_string()));
                let _ = events.send(TransportEvent::Closed);
                return;
            }
        }
    }
}

fn set_read_timeout(
    socket: &WebSocket<MaybeTlsStream<TcpStream>>,
    timeout: Duration,
) -> std::io::Result<()> {
    match socket.get_ref() {
        MaybeTlsStream::Plain(stream) => stream.set_read_timeout(Some(timeout)),
        #[allow(unreachable_patterns)]
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_before_connect_fails() {
        let mut transport = WebSocketTransport::new();
        assert!(matches!(
            transport.send("{}".to_string()),
            Err(TransportError::NotConnected)
        ));
        assert_eq!(transport.try_recv(), None);
    }

    #[test]
    fn test_unreachable_host_reports_error_then_closed() {
        let mut transport = WebSocketTransport::new();
        // Port 1 on loopback refuses connections
        transport.connect("ws://127.0.0.1:1").unwrap();

        let received = wait_for_events(&mut transport, 2);

        assert!(matches!(received.first(), Some(TransportEvent::Error(_))));
        assert_eq!(received.get(1), Some(&TransportEvent::Closed));
    }

    fn wait_for_events(transport: &mut WebSocketTransport, count: usize) -> Vec<TransportEvent> {
        let mut received = Vec::new();
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while received.len() < count && std::time::Instant::now() < deadline {
            match transport.try_recv() {
                Some(event) => received.push(event),
                None => std::thread::sleep(Duration::from_millis(10)),
            }
        }
        received
    }

    #[test]
    fn test_loopback_round_trip_and_owner_close() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (seen_tx, seen_rx) = mpsc::channel();

        let server = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut socket = tungstenite::accept(stream).unwrap();
            loop {
                match socket.read() {
                    Ok(Message::Text(text)) => {
                        seen_tx.send(Some(text.clone())).unwrap();
                        socket.send(Message::Text(format!("echo:{}", text))).unwrap();
                    }
                    Ok(Message::Close(_)) | Err(_) => {
                        seen_tx.send(None).unwrap();
                        return;
                    }
                    Ok(_) => {}
                }
            }
        });

        let mut transport = WebSocketTransport::new();
        transport.connect(&format!("ws://127.0.0.1:{}", port)).unwrap();
        assert_eq!(wait_for_events(&mut transport, 1), vec![TransportEvent::Opened]);

        transport.send("hi".to_string()).unwrap();
        assert_eq!(
            seen_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            Some("hi".to_string())
        );
        assert_eq!(
            wait_for_events(&mut transport, 1),
            vec![TransportEvent::Message("echo:hi".to_string())]
        );

        // closing from our side reaches the server and silences the transport
        transport.close();
        assert_eq!(seen_rx.recv_timeout(Duration::from_secs(5)).unwrap(), None);
        assert_eq!(transport.try_recv(), None);
        assert!(matches!(
            transport.send("late".to_string()),
            Err(TransportError::NotConnected)
        ));
        server.join().unwrap();
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut transport = WebSocketTransport::new();
        transport.close();
        transport.close();
        assert_eq!(transport.try_recv(), None);
    }
}
