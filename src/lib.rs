//! # grid-relay
//!
//! Real-time WebSocket relay for a shared annotated number grid.
//!
//! Every connected client sees the same grid of numbered cells. A client
//! placing an annotation (or clearing the board) is relayed to all other
//! clients, and a late joiner receives a full replay of the current state
//! before entering live sync. All state is in-memory and volatile; this
//! service is a synchronization layer, not a store of record.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket)
//!     │
//!     ├── HTTP surface (api/): static page, health
//!     ├── WS session loop (ws/)
//!     │
//!     ├── RelayService (service/)
//!     │
//!     ├── AnnotationStore (domain/)
//!     └── ConnectionRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
