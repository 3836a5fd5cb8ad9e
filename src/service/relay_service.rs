//! Relay service: accepts client frames, applies them to the shared state,
//! and fans them out to every other connection.
//!
//! [`RelayService`] is the single synchronization boundary of the process.
//! The annotation store and the connection registry live together behind one
//! `RwLock`, which is what makes the join handshake atomic: a joiner's
//! replay, its init-complete marker, and its registration happen under one
//! write-lock acquisition, so no accepted frame is ever missed by or
//! duplicated for a late joiner.
//!
//! Fan-out copies a snapshot of the recipient senders under the lock and
//! enqueues after releasing it. Connections leaving mid-broadcast just fail
//! their enqueue and are skipped.

use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::{Annotation, AnnotationStore, ClientSender, ConnectionId, ConnectionRegistry};
use crate::ws::messages::{Directive, init_complete_frame};

/// How the relay disposed of one inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Appended to the store and rebroadcast.
    Placed,
    /// Store emptied and the clear frame rebroadcast.
    Cleared,
    /// Dropped without state change, broadcast, or reply.
    Ignored,
}

/// Live counters reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelayStats {
    /// Currently registered connections.
    pub connections: usize,
    /// Annotations currently in the store.
    pub annotations: usize,
}

/// Shared state guarded by the relay's single lock.
#[derive(Debug, Default)]
struct RelayState {
    store: AnnotationStore,
    registry: ConnectionRegistry,
}

/// The shared-state broadcast engine.
///
/// One instance exists per process, wrapped in an `Arc` and injected into
/// every connection handler through
/// [`AppState`](crate::app_state::AppState).
#[derive(Debug, Default)]
pub struct RelayService {
    state: RwLock<RelayState>,
}

impl RelayService {
    /// Creates a relay with an empty store and registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection and performs the join handshake.
    ///
    /// Under one write-lock acquisition: every stored annotation is enqueued
    /// to the new client verbatim, in store order, followed by exactly one
    /// init-complete frame; only then is the connection registered. Frames
    /// broadcast after this call returns are therefore delivered strictly
    /// after the init-complete marker.
    pub async fn join(&self, sender: ClientSender) -> ConnectionId {
        let id = ConnectionId::new();

        let (replayed, connections) = {
            let mut state = self.state.write().await;
            for annotation in state.store.iter() {
                let _ = sender.send(annotation.raw().to_owned());
            }
            let _ = sender.send(init_complete_frame());
            state.registry.register(id, sender);
            (state.store.len(), state.registry.len())
        };

        tracing::debug!(%id, replayed, connections, "connection joined");
        id
    }

    /// Removes a connection from the registry. The store is unaffected by a
    /// departure; annotations persist for remaining and future connections.
    pub async fn leave(&self, id: ConnectionId) {
        let removed = self.state.write().await.registry.unregister(id);
        if removed {
            tracing::debug!(%id, "connection left");
        }
    }

    /// Applies one inbound text frame from `sender`.
    ///
    /// Recognized frames mutate the store under the write lock and are then
    /// fanned out verbatim to every other registered connection. Anything
    /// unrecognized is dropped silently, with no state change, no broadcast,
    /// and no reply to the sender.
    pub async fn apply(&self, sender: ConnectionId, raw: &str) -> ApplyOutcome {
        match Directive::parse(raw) {
            Directive::Invalid => {
                tracing::trace!(%sender, "dropping unrecognized frame");
                ApplyOutcome::Ignored
            }
            Directive::ClearAll => {
                let (dropped, peers) = {
                    let mut state = self.state.write().await;
                    let dropped = state.store.clear();
                    (dropped, state.registry.snapshot_except(sender))
                };
                let recipients = fan_out(&peers, raw);
                tracing::info!(%sender, dropped, recipients, "board cleared");
                ApplyOutcome::Cleared
            }
            Directive::Place { number } => {
                let peers = {
                    let mut state = self.state.write().await;
                    state.store.append(Annotation::new(raw, number));
                    state.registry.snapshot_except(sender)
                };
                let recipients = fan_out(&peers, raw);
                tracing::debug!(%sender, number, recipients, "annotation placed");
                ApplyOutcome::Placed
            }
        }
    }

    /// Returns the current connection and annotation counts.
    pub async fn stats(&self) -> RelayStats {
        let state = self.state.read().await;
        RelayStats {
            connections: state.registry.len(),
            annotations: state.store.len(),
        }
    }
}

/// Enqueues `raw` to every sender in the snapshot, skipping recipients whose
/// queue is gone. Returns how many enqueues succeeded.
fn fan_out(peers: &[ClientSender], raw: &str) -> usize {
    peers
        .iter()
        .filter(|peer| peer.send(raw.to_owned()).is_ok())
        .count()
}
