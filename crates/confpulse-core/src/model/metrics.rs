//! Event-wide derived metrics.

use serde::{Deserialize, Serialize};

use super::{Attendee, Feedback, Session, SessionStatus};

/// Aggregate counters over the whole dataset. Always recomputed from the
/// entity tables after a mutation pass, never authoritative on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventMetrics {
    pub total_sessions: u32,
    pub active_sessions: u32,
    pub completed_sessions: u32,
    pub upcoming_sessions: u32,
    pub total_attendees: u32,
    /// Mean engagement over active sessions only.
    pub average_engagement: f32,
    pub total_feedback: u32,
    /// Mean overall rating over all feedback.
    pub average_rating: f32,
}

/// Compute metrics from the entity tables. Every ratio is guarded so an
/// empty table yields 0, never NaN.
pub fn compute_metrics(
    sessions: &[Session],
    attendees: &[Attendee],
    feedback: &[Feedback],
) -> EventMetrics {
    let count_status =
        |status: SessionStatus| sessions.iter().filter(|s| s.status == status).count() as u32;

    let active: Vec<&Session> =
        sessions.iter().filter(|s| s.status == SessionStatus::Active).collect();
    let engagement_sum: f32 = active.iter().map(|s| s.engagement as f32).sum();
    let average_engagement = engagement_sum / active.len().max(1) as f32;

    let rating_sum: f32 = feedback.iter().map(|f| f.ratings.overall as f32).sum();
    let average_rating = rating_sum / feedback.len().max(1) as f32;

    EventMetrics {
        total_sessions: sessions.len() as u32,
        active_sessions: count_status(SessionStatus::Active),
        completed_sessions: count_status(SessionStatus::Completed),
        upcoming_sessions: count_status(SessionStatus::Upcoming),
        total_attendees: attendees.len() as u32,
        average_engagement,
        total_feedback: feedback.len() as u32,
        average_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tables_yield_zeroed_metrics() {
        let m = compute_metrics(&[], &[], &[]);
        assert_eq!(m.total_sessions, 0);
        assert_eq!(m.average_engagement, 0.0);
        assert_eq!(m.average_rating, 0.0);
    }

    #[test]
    fn engagement_averages_over_active_only() {
        let mut a = Session {
            id: 1,
            title: "A".into(),
            speaker_id: 1,
            room: "R".into(),
            start_hour: 9,
            start_minute: 0,
            capacity: 100,
            current_attendance: 50,
            engagement: 80,
            status: SessionStatus::Active,
            tags: vec![],
            rating: 4.0,
        };
        let mut b = a.clone();
        b.id = 2;
        b.engagement = 20;
        b.status = SessionStatus::Completed;

        let m = compute_metrics(&[a.clone(), b], &[], &[]);
        assert_eq!(m.average_engagement, 80.0);
        assert_eq!(m.active_sessions, 1);
        assert_eq!(m.completed_sessions, 1);

        a.status = SessionStatus::Completed;
        let m = compute_metrics(&[a], &[], &[]);
        assert_eq!(m.average_engagement, 0.0);
    }
}
