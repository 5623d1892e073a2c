//! Generation - builds the initial consistent conference dataset.
//!
//! Everything here is deterministic given the RNG: fixed reference lists
//! drive titles and names, randomized parameters drive capacities,
//! registrations and feedback. The generator never fails; it takes no
//! input beyond the RNG and returns a fresh object graph.

mod names;

pub use names::*;

use chrono::Utc;
use rand::Rng;

use crate::model::{
    compute_metrics, Attendee, Dataset, Feedback, FeedbackRatings, Session, SessionStatus,
    SocialHandles, Speaker,
};

/// Sessions generated for the event.
pub const SESSION_COUNT: usize = 15;
/// Attendees registered at generation time.
pub const ATTENDEE_COUNT: usize = 847;
/// Sessions marked completed at generation (indices below this).
const COMPLETED_BELOW: usize = 4;
/// Sessions marked active at generation (indices below this, above completed).
const ACTIVE_BELOW: usize = 8;

/// Build the full initial dataset: sessions, speakers, attendees,
/// feedback and derived metrics.
pub fn generate_initial_data(rng: &mut impl Rng) -> Dataset {
    let now = Utc::now().to_rfc3339();

    let speakers = generate_speakers(rng);
    let sessions = generate_sessions(rng);
    let (attendees, feedback) = generate_attendees(&sessions, &now, rng);

    let metrics = compute_metrics(&sessions, &attendees, &feedback);
    let next_attendee_id = attendees.len() as u32 + 1;
    let next_feedback_id = feedback.len() as u32 + 1;

    Dataset {
        sessions,
        speakers,
        attendees,
        feedback,
        metrics,
        next_attendee_id,
        next_feedback_id,
    }
}

/// Sessions cycle the topic list; each index gets a deterministic
/// half-hour slot (two sessions per slot group, first slot 09:00) and an
/// index-derived starting status.
fn generate_sessions(rng: &mut impl Rng) -> Vec<Session> {
    (0..SESSION_COUNT)
        .map(|i| {
            let capacity = rng.gen_range(50..200);
            let current_attendance = (capacity as f32 * rng.gen_range(0.5..1.0)) as u32;
            let status = if i < COMPLETED_BELOW {
                SessionStatus::Completed
            } else if i < ACTIVE_BELOW {
                SessionStatus::Active
            } else {
                SessionStatus::Upcoming
            };

            Session {
                id: i as u32 + 1,
                title: SESSION_TOPICS[i % SESSION_TOPICS.len()].to_string(),
                speaker_id: (i % SPEAKER_NAMES.len()) as u32 + 1,
                room: ROOMS[i % ROOMS.len()].to_string(),
                start_hour: 9 + (i as u32) / 2,
                start_minute: (i as u32 % 2) * 30,
                capacity,
                current_attendance,
                engagement: rng.gen_range(55..=95),
                status,
                tags: pick_tags(rng),
                rating: rng.gen_range(3.5..5.0),
            }
        })
        .collect()
}

/// One speaker per entry in the fixed name list, independent of the
/// session count.
fn generate_speakers(rng: &mut impl Rng) -> Vec<Speaker> {
    SPEAKER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let title = SPEAKER_TITLES[rng.gen_range(0..SPEAKER_TITLES.len())];
            let company = COMPANIES[rng.gen_range(0..COMPANIES.len())];
            let expertise = pick_tags(rng);
            let handle: String =
                name.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();

            Speaker {
                id: i as u32 + 1,
                name: name.to_string(),
                title: title.to_string(),
                company: company.to_string(),
                bio: format!("{name} is a {title} at {company} speaking on {}.", expertise.join(", ")),
                avatar: format!("/avatars/speaker-{}.png", i + 1),
                expertise,
                social: SocialHandles {
                    twitter: format!("@{handle}"),
                    linkedin: format!("linkedin.com/in/{handle}"),
                },
            }
        })
        .collect()
}

/// Attendees register for 2-5 distinct sessions. Registrations for
/// already-completed sessions usually become attendances, and attended
/// sessions often leave a feedback record behind.
fn generate_attendees(
    sessions: &[Session],
    now: &str,
    rng: &mut impl Rng,
) -> (Vec<Attendee>, Vec<Feedback>) {
    let mut attendees = Vec::with_capacity(ATTENDEE_COUNT);
    let mut feedback = Vec::new();
    let mut next_feedback_id = 1u32;

    for i in 0..ATTENDEE_COUNT {
        let id = i as u32 + 1;
        let name = generate_person_name(rng);
        let registration_count = rng.gen_range(2..=5);

        let mut registered_sessions: Vec<u32> = Vec::with_capacity(registration_count);
        while registered_sessions.len() < registration_count {
            let pick = sessions[rng.gen_range(0..sessions.len())].id;
            if !registered_sessions.contains(&pick) {
                registered_sessions.push(pick);
            }
        }

        let mut attended_sessions = Vec::new();
        for &session_id in &registered_sessions {
            let session = &sessions[(session_id - 1) as usize];
            if session.status != SessionStatus::Completed || !rng.gen_bool(0.8) {
                continue;
            }
            attended_sessions.push(session_id);
            if rng.gen_bool(0.4) {
                feedback.push(generate_feedback(next_feedback_id, session, id, &name, now, rng));
                next_feedback_id += 1;
            }
        }

        let email_local: String =
            name.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();
        attendees.push(Attendee {
            id,
            name,
            email: format!("{email_local}{id}@example.com"),
            company: COMPANIES[rng.gen_range(0..COMPANIES.len())].to_string(),
            role: ATTENDEE_ROLES[rng.gen_range(0..ATTENDEE_ROLES.len())].to_string(),
            registered_sessions,
            attended_sessions,
            engagement_score: rng.gen_range(30..=100),
            joined_at: now.to_string(),
        });
    }

    (attendees, feedback)
}

fn generate_feedback(
    id: u32,
    session: &Session,
    attendee_id: u32,
    attendee_name: &str,
    now: &str,
    rng: &mut impl Rng,
) -> Feedback {
    Feedback {
        id,
        session_id: session.id,
        attendee_id,
        attendee_name: attendee_name.to_string(),
        ratings: FeedbackRatings {
            content: rng.gen_range(3..=5),
            presentation: rng.gen_range(3..=5),
            relevance: rng.gen_range(3..=5),
            overall: rng.gen_range(3..=5),
        },
        comment: generate_comment(&session.title, rng),
        submitted_at: now.to_string(),
        helpful_count: rng.gen_range(0..20),
        verified: rng.gen_bool(0.7),
    }
}

/// 2-3 distinct tags from the fixed tag list.
fn pick_tags(rng: &mut impl Rng) -> Vec<String> {
    let count = rng.gen_range(2..=3);
    let mut tags: Vec<String> = Vec::with_capacity(count);
    while tags.len() < count {
        let tag = TAGS[rng.gen_range(0..TAGS.len())];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_exact_entity_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate_initial_data(&mut rng);
        assert_eq!(data.sessions.len(), SESSION_COUNT);
        assert_eq!(data.speakers.len(), SPEAKER_NAMES.len());
        assert_eq!(data.attendees.len(), ATTENDEE_COUNT);
    }

    #[test]
    fn status_split_by_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate_initial_data(&mut rng);
        let completed =
            data.sessions.iter().filter(|s| s.status == SessionStatus::Completed).count();
        let active = data.sessions.iter().filter(|s| s.status == SessionStatus::Active).count();
        assert_eq!(completed, 4);
        assert_eq!(active, 4);
        assert_eq!(data.sessions.len() - completed - active, 7);
    }

    #[test]
    fn sessions_get_half_hour_slots_from_nine() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate_initial_data(&mut rng);
        assert_eq!((data.sessions[0].start_hour, data.sessions[0].start_minute), (9, 0));
        assert_eq!((data.sessions[1].start_hour, data.sessions[1].start_minute), (9, 30));
        assert_eq!((data.sessions[14].start_hour, data.sessions[14].start_minute), (16, 0));
    }

    #[test]
    fn attendance_within_capacity() {
        let mut rng = StdRng::seed_from_u64(99);
        let data = generate_initial_data(&mut rng);
        for s in &data.sessions {
            assert!(s.current_attendance <= s.capacity, "session {} overfull", s.id);
            assert!((50..200).contains(&s.capacity));
            assert!(s.current_attendance >= s.capacity / 2);
        }
    }

    #[test]
    fn attended_is_subset_of_registered_and_completed_only() {
        let mut rng = StdRng::seed_from_u64(13);
        let data = generate_initial_data(&mut rng);
        for a in &data.attendees {
            let distinct: std::collections::HashSet<_> = a.registered_sessions.iter().collect();
            assert_eq!(distinct.len(), a.registered_sessions.len());
            assert!((2..=5).contains(&a.registered_sessions.len()));
            for sid in &a.attended_sessions {
                assert!(a.registered_sessions.contains(sid));
                let session = &data.sessions[(*sid - 1) as usize];
                assert_eq!(session.status, SessionStatus::Completed);
            }
        }
    }

    #[test]
    fn feedback_references_resolve() {
        let mut rng = StdRng::seed_from_u64(13);
        let data = generate_initial_data(&mut rng);
        assert!(!data.feedback.is_empty());
        for f in &data.feedback {
            assert!(data.sessions.iter().any(|s| s.id == f.session_id));
            assert!(data.attendees.iter().any(|a| a.id == f.attendee_id));
            for r in [f.ratings.content, f.ratings.presentation, f.ratings.relevance, f.ratings.overall] {
                assert!((1..=5).contains(&r));
            }
        }
    }

    #[test]
    fn metrics_match_generated_tables() {
        let mut rng = StdRng::seed_from_u64(21);
        let data = generate_initial_data(&mut rng);
        assert_eq!(data.metrics.total_sessions, 15);
        assert_eq!(data.metrics.active_sessions, 4);
        assert_eq!(data.metrics.total_attendees, 847);
        assert_eq!(data.metrics.total_feedback, data.feedback.len() as u32);
    }
}
