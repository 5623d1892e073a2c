//! Feedback injection - completed sessions occasionally collect a new review.

use rand::Rng;

use crate::generation::{generate_comment, generate_person_name};
use crate::model::{Attendee, Feedback, FeedbackRatings, Session, SessionStatus};

/// Chance per tick that any feedback arrives at all.
const INJECTION_CHANCE: f64 = 0.3;

/// With probability 0.3, append one new feedback record for a random
/// completed session to the canonical feedback list. The submitter is an
/// existing attendee when one is available, a synthesized name otherwise.
pub fn tick_feedback(
    sessions: &[Session],
    attendees: &[Attendee],
    feedback: &mut Vec<Feedback>,
    next_feedback_id: &mut u32,
    now: &str,
    rng: &mut impl Rng,
) {
    if !rng.gen_bool(INJECTION_CHANCE) {
        return;
    }
    let completed: Vec<&Session> =
        sessions.iter().filter(|s| s.status == SessionStatus::Completed).collect();
    if completed.is_empty() {
        return;
    }
    let session = completed[rng.gen_range(0..completed.len())];

    let (attendee_id, attendee_name) = if attendees.is_empty() {
        (0, generate_person_name(rng))
    } else {
        let attendee = &attendees[rng.gen_range(0..attendees.len())];
        (attendee.id, attendee.name.clone())
    };

    feedback.push(Feedback {
        id: *next_feedback_id,
        session_id: session.id,
        attendee_id,
        attendee_name,
        ratings: FeedbackRatings {
            content: rng.gen_range(3..=5),
            presentation: rng.gen_range(3..=5),
            relevance: rng.gen_range(3..=5),
            overall: rng.gen_range(3..=5),
        },
        comment: generate_comment(&session.title, rng),
        submitted_at: now.to_string(),
        helpful_count: 0,
        verified: rng.gen_bool(0.7),
    });
    *next_feedback_id += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(id: u32, status: SessionStatus) -> Session {
        Session {
            id,
            title: "T".into(),
            speaker_id: 1,
            room: "R".into(),
            start_hour: 9,
            start_minute: 0,
            capacity: 100,
            current_attendance: 50,
            engagement: 70,
            status,
            tags: vec![],
            rating: 4.0,
        }
    }

    #[test]
    fn only_completed_sessions_collect_feedback() {
        let mut rng = StdRng::seed_from_u64(11);
        let sessions = vec![session(1, SessionStatus::Completed), session(2, SessionStatus::Active)];
        let mut feedback = Vec::new();
        let mut next_id = 1;
        for _ in 0..200 {
            tick_feedback(&sessions, &[], &mut feedback, &mut next_id, "2026-08-07T12:00:00Z", &mut rng);
        }
        assert!(!feedback.is_empty());
        assert!(feedback.iter().all(|f| f.session_id == 1));
    }

    #[test]
    fn no_completed_sessions_means_no_feedback() {
        let mut rng = StdRng::seed_from_u64(11);
        let sessions = vec![session(1, SessionStatus::Upcoming)];
        let mut feedback = Vec::new();
        let mut next_id = 1;
        for _ in 0..100 {
            tick_feedback(&sessions, &[], &mut feedback, &mut next_id, "2026-08-07T12:00:00Z", &mut rng);
        }
        assert!(feedback.is_empty());
        assert_eq!(next_id, 1);
    }

    #[test]
    fn ids_stay_monotonic() {
        let mut rng = StdRng::seed_from_u64(4);
        let sessions = vec![session(1, SessionStatus::Completed)];
        let mut feedback = Vec::new();
        let mut next_id = 10;
        for _ in 0..300 {
            tick_feedback(&sessions, &[], &mut feedback, &mut next_id, "2026-08-07T12:00:00Z", &mut rng);
        }
        let ids: Vec<u32> = feedback.iter().map(|f| f.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}
