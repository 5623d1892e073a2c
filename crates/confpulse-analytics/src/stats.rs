//! Headline statistics over a sessions table.

use confpulse_core::model::{Session, SessionStatus};
use serde::{Deserialize, Serialize};

/// The overview block most dashboard cards render from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total: u32,
    pub active: u32,
    pub upcoming: u32,
    pub completed: u32,
    pub average_attendance: f32,
    pub average_engagement: f32,
    pub total_capacity: u32,
    pub total_attendees: u32,
}

/// Compute the overview block. An empty input yields the all-zero
/// record rather than an error.
pub fn session_stats(sessions: &[Session]) -> SessionStats {
    if sessions.is_empty() {
        return SessionStats::default();
    }
    let n = sessions.len() as f32;
    let total_attendees: u32 = sessions.iter().map(|s| s.current_attendance).sum();
    let engagement_sum: f32 = sessions.iter().map(|s| s.engagement as f32).sum();
    let count = |status: SessionStatus| {
        sessions.iter().filter(|s| s.status == status).count() as u32
    };

    SessionStats {
        total: sessions.len() as u32,
        active: count(SessionStatus::Active),
        upcoming: count(SessionStatus::Upcoming),
        completed: count(SessionStatus::Completed),
        average_attendance: total_attendees as f32 / n,
        average_engagement: engagement_sum / n,
        total_capacity: sessions.iter().map(|s| s.capacity).sum(),
        total_attendees,
    }
}
