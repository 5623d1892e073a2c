//! Speakers and attendees.

use serde::{Deserialize, Serialize};

use super::{Session, SessionId, SpeakerId};

pub type AttendeeId = u32;

/// A conference speaker. Per-speaker aggregates are not stored here;
/// they are derived from the session table via [`speaker_rollup`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    pub id: SpeakerId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub avatar: String,
    pub expertise: Vec<String>,
    pub social: SocialHandles,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialHandles {
    pub twitter: String,
    pub linkedin: String,
}

/// Derived per-speaker statistics over their sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakerRollup {
    pub session_count: u32,
    pub total_attendance: u32,
    pub average_engagement: f32,
    pub average_rating: f32,
}

/// Roll a speaker's sessions up into aggregate statistics. Computed at
/// read time so the rollup can never drift from the session table.
pub fn speaker_rollup(speaker_id: SpeakerId, sessions: &[Session]) -> SpeakerRollup {
    let theirs: Vec<&Session> = sessions.iter().filter(|s| s.speaker_id == speaker_id).collect();
    if theirs.is_empty() {
        return SpeakerRollup::default();
    }
    let n = theirs.len() as f32;
    SpeakerRollup {
        session_count: theirs.len() as u32,
        total_attendance: theirs.iter().map(|s| s.current_attendance).sum(),
        average_engagement: theirs.iter().map(|s| s.engagement as f32).sum::<f32>() / n,
        average_rating: theirs.iter().map(|s| s.rating).sum::<f32>() / n,
    }
}

/// Resolve a session's speaker name against the speaker table.
pub fn speaker_name(speaker_id: SpeakerId, speakers: &[Speaker]) -> &str {
    speakers
        .iter()
        .find(|sp| sp.id == speaker_id)
        .map(|sp| sp.name.as_str())
        .unwrap_or("Unknown speaker")
}

/// A registered conference attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub registered_sessions: Vec<SessionId>,
    /// Subset of `registered_sessions`; only completed sessions appear here.
    pub attended_sessions: Vec<SessionId>,
    /// Engagement score, 0..=100.
    pub engagement_score: u8,
    /// RFC 3339 registration timestamp.
    pub joined_at: String,
}

impl Attendee {
    pub fn is_registered_for(&self, session: SessionId) -> bool {
        self.registered_sessions.contains(&session)
    }

    pub fn has_attended(&self, session: SessionId) -> bool {
        self.attended_sessions.contains(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionStatus;

    fn session(id: SessionId, speaker_id: SpeakerId, attendance: u32, engagement: u8) -> Session {
        Session {
            id,
            title: format!("Session {id}"),
            speaker_id,
            room: "Hall A".into(),
            start_hour: 10,
            start_minute: 0,
            capacity: 100,
            current_attendance: attendance,
            engagement,
            status: SessionStatus::Active,
            tags: vec![],
            rating: 4.0,
        }
    }

    #[test]
    fn rollup_aggregates_only_own_sessions() {
        let sessions = vec![session(1, 7, 50, 60), session(2, 7, 30, 80), session(3, 9, 99, 10)];
        let rollup = speaker_rollup(7, &sessions);
        assert_eq!(rollup.session_count, 2);
        assert_eq!(rollup.total_attendance, 80);
        assert!((rollup.average_engagement - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rollup_empty_for_unknown_speaker() {
        let rollup = speaker_rollup(42, &[]);
        assert_eq!(rollup.session_count, 0);
        assert_eq!(rollup.average_rating, 0.0);
    }
}
