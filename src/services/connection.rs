// src/services/connection.rs
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::errors::ConnectionError;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Receives each inbound text frame, one at a time, in arrival order.
///
/// Implementations must swallow their own per-frame failures; returning is
/// the only way to keep the connection alive, so the pump never hears
/// about a bad frame.
pub trait FrameHandler {
    fn on_frame(&mut self, raw: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Open,
    Closed,
}

/// Owns the notification socket's lifecycle. The raw handle never leaves
/// this struct; callers get lifecycle operations and the `FrameHandler`
/// seam, nothing else.
///
/// There is no automatic retry: after `run` returns the state is
/// `Disconnected` and re-establishing is the caller's move, via another
/// `connect()`.
pub struct ConnectionManager {
    endpoint: Url,
    state: ConnectionState,
    socket: Option<Socket>,
}

impl ConnectionManager {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            state: ConnectionState::Disconnected,
            socket: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Every state change goes through here, so each transition is logged
    /// and fires exactly once regardless of call timing.
    fn transition(&mut self, next: ConnectionState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "connection state");
            self.state = next;
        }
    }

    /// Opens the persistent connection. Idempotent while Connecting/Open;
    /// callable again from Disconnected or Closed.
    pub async fn connect(&mut self) -> Result<(), ConnectionError> {
        if matches!(
            self.state,
            ConnectionState::Connecting | ConnectionState::Open
        ) {
            return Ok(());
        }

        self.transition(ConnectionState::Connecting);
        match connect_async(self.endpoint.as_str()).await {
            Ok((socket, _response)) => {
                self.socket = Some(socket);
                self.transition(ConnectionState::Open);
                tracing::info!(endpoint = %self.endpoint, "notification socket open");
                Ok(())
            }
            Err(source) => {
                self.transition(ConnectionState::Disconnected);
                Err(ConnectionError::Handshake {
                    endpoint: self.endpoint.to_string(),
                    source,
                })
            }
        }
    }

    /// Pumps inbound frames to the handler until the peer closes or the
    /// transport fails. Frames are handled run-to-completion, in strict
    /// arrival order; only text frames reach the handler.
    pub async fn run<H: FrameHandler>(&mut self, handler: &mut H) -> Result<(), ConnectionError> {
        let mut socket = self.socket.take().ok_or(ConnectionError::NotConnected)?;

        let outcome = loop {
            match socket.next().await {
                Some(Ok(Message::Text(text))) => handler.on_frame(&text),
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("notification socket closed by peer");
                    break Ok(());
                }
                Some(Ok(_)) => {} // ping/pong/binary: nothing to render
                Some(Err(source)) => {
                    tracing::warn!(error = %source, "notification socket failed");
                    break Err(ConnectionError::Transport(source));
                }
            }
        };

        self.transition(ConnectionState::Disconnected);
        outcome
    }

    /// Closes the socket if one is held. Terminal until the next
    /// `connect()`.
    pub async fn close(&mut self) -> Result<(), ConnectionError> {
        if let Some(mut socket) = self.socket.take() {
            socket.close(None).await?;
        }
        self.transition(ConnectionState::Closed);
        Ok(())
    }
}
