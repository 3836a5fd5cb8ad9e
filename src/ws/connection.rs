//! WebSocket session state machine.
//!
//! Each connection moves through two states: SYNCING (full-state replay,
//! finished by the init-complete frame) and LIVE (relaying frames until
//! disconnect). The session owns two halves: a reader loop processing
//! inbound frames strictly in order, and a writer task draining the
//! connection's outbound queue into the socket.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::service::RelayService;

/// Runs one WebSocket session from accept to disconnect.
///
/// Registration, replay, and the init-complete marker happen inside
/// [`RelayService::join`] before any live frame can be enqueued for this
/// client. Whatever way the session ends (clean close, stream end,
/// transport error, or the peer vanishing under the writer), the connection
/// is unregistered exactly once on the way out.
pub async fn run_connection(socket: WebSocket, relay: Arc<RelayService>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (queue_tx, mut queue_rx) = mpsc::unbounded_channel::<String>();

    let id = relay.join(queue_tx).await;

    // Writer half: everything the relay enqueues goes out in FIFO order.
    let mut writer = tokio::spawn(async move {
        while let Some(frame) = queue_rx.recv().await {
            if ws_tx.send(Message::text(frame)).await.is_err() {
                break;
            }
        }
    });

    // Reader half: one frame at a time, so the broadcast for a frame is
    // enqueued before this client's next frame is processed.
    loop {
        tokio::select! {
            inbound = ws_rx.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    relay.apply(id, text.as_str()).await;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Err(err)) => {
                    tracing::warn!(%id, error = %err, "websocket transport error");
                    break;
                }
                // Binary, ping, and pong frames are not part of the protocol.
                Some(Ok(_)) => {}
            },
            // Writer ended: the socket sink rejected a send, peer is gone.
            _ = &mut writer => break,
        }
    }

    relay.leave(id).await;
    writer.abort();
}
