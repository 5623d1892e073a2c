//! ConfPulse Core - Conference Event Simulation Engine
//!
//! Generates a synthetic but internally consistent conference dataset
//! (sessions, speakers, attendees, feedback) and mutates it on a fixed
//! cadence to emulate a live event. Consumers subscribe for timestamped
//! snapshots; the canonical state never leaves the engine.
//!
//! # Architecture
//!
//! - **Model**: plain serde records in indexed tables, cross-referenced
//!   by id (`model`)
//! - **Generation**: builds the initial dataset from fixed reference
//!   lists plus randomized parameters (`generation`)
//! - **Passes**: the five per-tick mutation passes (`passes`)
//! - **Engine / Service**: tick orchestration and subscriber fan-out,
//!   with an optional timer thread (`engine`, `service`)
//!
//! # Example
//!
//! ```rust,no_run
//! use confpulse_core::prelude::*;
//! use std::time::Duration;
//!
//! let mut service = SimulatorService::new();
//! let subscription = service.subscribe(|snapshot| {
//!     println!("tick {}: {} active sessions",
//!         snapshot.update_count, snapshot.metrics.active_sessions);
//! });
//! service.start(Duration::from_secs(5));
//! // ... later
//! service.stop();
//! service.unsubscribe(subscription);
//! ```

pub mod clock;
pub mod engine;
pub mod generation;
pub mod model;
pub mod passes;
pub mod service;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::WallTime;
    pub use crate::engine::{SimEngine, SubscriberId};
    pub use crate::model::*;
    pub use crate::service::{SimulatorService, DEFAULT_TICK_INTERVAL};
}
