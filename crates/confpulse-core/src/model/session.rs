//! Session records and the status state machine.

use serde::{Deserialize, Serialize};

pub type SessionId = u32;
pub type SpeakerId = u32;

/// Lifecycle of a session. Transitions only move forward
/// (Upcoming → Active → Completed); regeneration is the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    Upcoming,
    Active,
    Completed,
}

impl SessionStatus {
    /// Ordering rank along the lifecycle.
    pub fn rank(self) -> u8 {
        match self {
            SessionStatus::Upcoming => 0,
            SessionStatus::Active => 1,
            SessionStatus::Completed => 2,
        }
    }

    /// Whether moving to `next` respects the forward-only state machine.
    pub fn can_advance_to(self, next: SessionStatus) -> bool {
        next.rank() > self.rank()
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

/// A scheduled talk. Capacity is fixed at creation; attendance,
/// engagement and status mutate over the simulation's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    /// Speaker reference by id only; the display name is resolved against
    /// the speaker table at read time so the two can never diverge.
    pub speaker_id: SpeakerId,
    pub room: String,
    /// Scheduled start, half-hour granularity.
    pub start_hour: u32,
    pub start_minute: u32,
    pub capacity: u32,
    pub current_attendance: u32,
    /// Engagement score, 0..=100.
    pub engagement: u8,
    pub status: SessionStatus,
    pub tags: Vec<String>,
    /// Average audience rating, 0..5.
    pub rating: f32,
}

impl Session {
    /// Fill rate as a percentage. A zero-capacity session rates 0 rather
    /// than dividing by zero.
    pub fn attendance_rate(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.current_attendance as f32 / self.capacity as f32 * 100.0
        }
    }

    /// Scheduled start expressed in minutes since midnight.
    pub fn start_in_minutes(&self) -> u32 {
        self.start_hour * 60 + self.start_minute
    }

    /// Seats still open.
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.current_attendance)
    }
}
