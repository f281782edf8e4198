//! Browser WebSocket transport
//!
//! Socket callbacks push into a queue that the UI drains once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::error::{Result, TransportError};
use crate::transport::{Transport, TransportEvent};

type EventQueue = Rc<RefCell<VecDeque<TransportEvent>>>;

/// Closures must outlive the socket callbacks that reference them.
struct Handlers {
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

pub struct WebSocketTransport {
    socket: Option<WebSocket>,
    handlers: Option<Handlers>,
    queue: EventQueue,
}

impl WebSocketTransport {
    pub fn new() -> Self {
        Self {
            socket: None,
            handlers: None,
            queue: Rc::new(RefCell::new(VecDeque::new())),
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

        let socket =
            WebSocket::new(url).map_err(|e| TransportError::Connect(format!("{:?}", e)))?;

        let queue = Rc::clone(&self.queue);
        let on_open = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            queue.borrow_mut().push_back(TransportEvent::Opened);
        });

        let queue = Rc::clone(&self.queue);
        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if let Some(text) = event.data().as_string() {
                queue.borrow_mut().push_back(TransportEvent::Message(text));
            }
        });

        let queue = Rc::clone(&self.queue);
        let on_error = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            queue
                .borrow_mut()
                .push_back(TransportEvent::Error("WebSocket error".to_string()));
        });

        let queue = Rc::clone(&self.queue);
        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            debug!("WebSocket closed: code {} {}", event.code(), event.reason());
            queue.borrow_mut().push_back(TransportEvent::Closed);
        });

        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        self.socket = Some(socket);
        self.handlers = Some(Handlers {
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        });
        Ok(())
    }

    fn send(&mut self, text: String) -> Result<()> {
        let socket = self.socket.as_ref().ok_or(TransportError::NotConnected)?;
        if socket.ready_state() != WebSocket::OPEN {
            return Err(TransportError::NotConnected);
        }
        socket
            .send_with_str(&text)
            .map_err(|e| TransportError::Send(format!("{:?}", e)))
    }

    fn try_recv(&mut self) -> Option<TransportEvent> {
        self.queue.borrow_mut().pop_front()
    }

    fn close(&mut self) {
        if let Some(socket) = self.socket.take() {
            socket.set_onopen(None);
            socket.set_onmessage(None);
            socket.set_onerror(None);
            socket.set_onclose(None);
            let _ = socket.close();
        }
        self.handlers = None;
        self.queue.borrow_mut().clear();
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.close();
    }
}
