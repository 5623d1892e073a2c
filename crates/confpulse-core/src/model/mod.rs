//! Entity model - plain data records for the simulated conference event.

mod session;
mod people;
mod feedback;
mod metrics;

pub use session::*;
pub use people::*;
pub use feedback::*;
pub use metrics::*;

use serde::{Deserialize, Serialize};

/// The canonical mutable dataset. Owned exclusively by the simulation
/// engine; everything outside the engine sees [`Snapshot`] clones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
    pub attendees: Vec<Attendee>,
    pub feedback: Vec<Feedback>,
    pub metrics: EventMetrics,
    /// Next id handed to an attendee created mid-simulation.
    pub next_attendee_id: u32,
    /// Next id handed to a feedback record created mid-simulation.
    pub next_feedback_id: u32,
}

impl Dataset {
    /// Recompute the derived metrics from the entity tables.
    pub fn refresh_metrics(&mut self) {
        self.metrics = compute_metrics(&self.sessions, &self.attendees, &self.feedback);
    }
}

/// A timestamped, read-only view of the dataset handed to subscribers
/// and synchronous getters. Cloned from the canonical state, so holders
/// can never mutate the engine's copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
    pub attendees: Vec<Attendee>,
    pub feedback: Vec<Feedback>,
    pub metrics: EventMetrics,
    /// RFC 3339 timestamp of the tick that produced this snapshot.
    pub last_updated: String,
    /// Number of ticks applied since generation (0 = freshly generated).
    pub update_count: u64,
}

impl Snapshot {
    /// Serialize for handoff across the process boundary; JSON is the
    /// shape the embedding dashboard consumes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
