//! WebSocket layer: session protocol, frame classification, upgrade handler.
//!
//! The endpoint at `/ws` carries the whole sync protocol: full-state replay
//! on join, then live relay of annotation frames between clients.

pub mod connection;
pub mod handler;
pub mod messages;
