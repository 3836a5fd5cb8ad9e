//! Service layer: the relay engine coordinating store and registry.

pub mod relay_service;

pub use relay_service::{ApplyOutcome, RelayService, RelayStats};
