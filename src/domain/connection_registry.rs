//! Registry of live client connections.
//!
//! Each registered connection is represented by the sending half of its
//! outbound queue. Broadcast never touches a socket directly: it enqueues
//! the frame text onto each recipient's queue, and the recipient's writer
//! task drains the queue into its socket. A send to a connection whose
//! receiving half is gone simply fails, which isolates per-recipient
//! failure during fan-out; the dead connection removes itself through its
//! own termination path.

use std::collections::HashMap;

use tokio::sync::mpsc;

use super::ConnectionId;

/// Sending half of one connection's outbound frame queue.
pub type ClientSender = mpsc::UnboundedSender<String>;

/// Set of currently-open client connections, keyed by [`ConnectionId`].
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    clients: HashMap<ConnectionId, ClientSender>,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection to the active set. Set semantics: registering an
    /// id that is already present replaces the previous sender.
    pub fn register(&mut self, id: ConnectionId, sender: ClientSender) {
        self.clients.insert(id, sender);
    }

    /// Removes a connection from the active set. Idempotent; returns `true`
    /// if the connection was present.
    pub fn unregister(&mut self, id: ConnectionId) -> bool {
        self.clients.remove(&id).is_some()
    }

    /// Returns a snapshot of every sender except the given one.
    ///
    /// Callers iterate the snapshot after releasing whatever lock guards the
    /// registry, so connections joining or leaving mid-broadcast never
    /// invalidate the iteration.
    #[must_use]
    pub fn snapshot_except(&self, sender: ConnectionId) -> Vec<ClientSender> {
        self.clients
            .iter()
            .filter(|(id, _)| **id != sender)
            .map(|(_, tx)| tx.clone())
            .collect()
    }

    /// Returns `true` if the given connection is registered.
    #[must_use]
    pub fn contains(&self, id: ConnectionId) -> bool {
        self.clients.contains_key(&id)
    }

    /// Returns the number of registered connections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` if no connections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> (ClientSender, mpsc::UnboundedReceiver<String>) {
        mpsc::unbounded_channel()
    }

    #[test]
    fn register_and_unregister() {
        let mut registry = ConnectionRegistry::new();
        let id = ConnectionId::new();
        let (tx, _rx) = channel();

        registry.register(id, tx);
        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn unregister_missing_is_idempotent() {
        let mut registry = ConnectionRegistry::new();
        assert!(!registry.unregister(ConnectionId::new()));
    }

    #[test]
    fn reregister_replaces_sender() {
        let mut registry = ConnectionRegistry::new();
        let id = ConnectionId::new();
        let (tx1, _rx1) = channel();
        let (tx2, mut rx2) = channel();

        registry.register(id, tx1);
        registry.register(id, tx2);
        assert_eq!(registry.len(), 1);

        // The snapshot for some other sender must hold the replacement.
        for peer in registry.snapshot_except(ConnectionId::new()) {
            let _ = peer.send("hello".to_string());
        }
        assert_eq!(rx2.try_recv().ok(), Some("hello".to_string()));
    }

    #[test]
    fn snapshot_excludes_the_sender() {
        let mut registry = ConnectionRegistry::new();
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        let (tx_a, mut rx_a) = channel();
        let (tx_b, mut rx_b) = channel();

        registry.register(a, tx_a);
        registry.register(b, tx_b);

        let snapshot = registry.snapshot_except(a);
        assert_eq!(snapshot.len(), 1);
        for peer in snapshot {
            let _ = peer.send("payload".to_string());
        }

        assert!(rx_a.try_recv().is_err());
        assert_eq!(rx_b.try_recv().ok(), Some("payload".to_string()));
    }

    #[test]
    fn snapshot_of_empty_registry_is_empty() {
        let registry = ConnectionRegistry::new();
        assert!(registry.snapshot_except(ConnectionId::new()).is_empty());
    }
}
