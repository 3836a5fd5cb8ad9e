//! Domain layer: connection identity, annotations, the annotation store,
//! and the connection registry.
//!
//! Types here are plain data structures with no locking of their own; the
//! service layer owns the single synchronization boundary around them.

pub mod annotation;
pub mod annotation_store;
pub mod connection_id;
pub mod connection_registry;

pub use annotation::Annotation;
pub use annotation_store::AnnotationStore;
pub use connection_id::ConnectionId;
pub use connection_registry::{ClientSender, ConnectionRegistry};
