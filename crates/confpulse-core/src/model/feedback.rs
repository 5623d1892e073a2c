//! Feedback records and the recent-feedback projection.

use serde::{Deserialize, Serialize};

use super::{AttendeeId, SessionId};

pub type FeedbackId = u32;

/// How many feedback entries a session surfaces in dashboard views.
pub const RECENT_FEEDBACK_CAP: usize = 5;

/// Sub-ratings for one feedback submission, each 1..=5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedbackRatings {
    pub content: u8,
    pub presentation: u8,
    pub relevance: u8,
    pub overall: u8,
}

/// One attendee's feedback on one session. The global feedback list is
/// the canonical store; per-session views are projected on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub session_id: SessionId,
    pub attendee_id: AttendeeId,
    pub attendee_name: String,
    pub ratings: FeedbackRatings,
    pub comment: String,
    /// RFC 3339 submission timestamp.
    pub submitted_at: String,
    pub helpful_count: u32,
    pub verified: bool,
}

/// The capped most-recent-first feedback view for one session, projected
/// from the canonical list. Feedback ids are monotonic, so recency order
/// is id order.
pub fn recent_feedback(session_id: SessionId, feedback: &[Feedback]) -> Vec<&Feedback> {
    feedback
        .iter()
        .rev()
        .filter(|f| f.session_id == session_id)
        .take(RECENT_FEEDBACK_CAP)
        .collect()
}
