//! In-memory transport for tests
//!
//! Records every frame sent through it and replays events pushed by the test.

use std::collections::VecDeque;

use crate::error::{Result, TransportError};
use crate::transport::{Transport, TransportEvent};

#[derive(Debug, Default)]
pub struct MockTransport {
    sent: Vec<String>,
    events: VecDeque<TransportEvent>,
    connect_urls: Vec<String>,
    close_count: usize,
    connect_failure: Option<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next `try_recv`
    pub fn push_event(&mut self, event: TransportEvent) {
        self.events.push_back(event);
    }

    /// Make the next `connect` call fail immediately
    pub fn fail_next_connect(&mut self, reason: impl Into<String>) {
        self.connect_failure = Some(reason.into());
    }

    /// Raw frames sent so far
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    /// Sent frames parsed as JSON. Frames that are not JSON are skipped.
    pub fn sent_ops(&self) -> Vec<serde_json::Value> {
        self.sent
            .iter()
            .filter_map(|s| serde_json::from_str(s).ok())
            .collect()
    }

    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    pub fn connect_urls(&self) -> &[String] {
        &self.connect_urls
    }

    pub fn close_count(&self) -> usize {
        self.close_count
    }
}

impl Transport for MockTransport {
    fn connect(&mut self, url: &str) -> Result<()> {
        if let Some(reason) = self.connect_failure.take() {
            return Err(TransportError::Connect(reason));
        }
        self.connect_urls.push(url.to_string());
        Ok(())
    }

    fn send(&mut self, text: String) -> Result<()> {
        self.sent.push(text);
        Ok(())
    }

    fn try_recv(&mut self) -> Option<TransportEvent> {
        self.events.pop_front()
    }

    fn close(&mut self) {
        self.close_count += 1;
        self.events.clear();
    }
}
