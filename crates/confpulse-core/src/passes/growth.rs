//! Attendee growth - new registrations trickle in while the event runs.

use rand::Rng;

use crate::generation::{generate_person_name, ATTENDEE_ROLES, COMPANIES};
use crate::model::{Attendee, Session, SessionStatus};

/// Chance per tick that a new attendee registers.
const GROWTH_CHANCE: f64 = 0.1;

/// With probability 0.1, synthesize one new attendee, registered for one
/// random upcoming session half the time and unregistered otherwise.
pub fn tick_growth(
    attendees: &mut Vec<Attendee>,
    sessions: &[Session],
    next_attendee_id: &mut u32,
    now: &str,
    rng: &mut impl Rng,
) {
    if !rng.gen_bool(GROWTH_CHANCE) {
        return;
    }

    let mut registered_sessions = Vec::new();
    let upcoming: Vec<&Session> =
        sessions.iter().filter(|s| s.status == SessionStatus::Upcoming).collect();
    if !upcoming.is_empty() && rng.gen_bool(0.5) {
        registered_sessions.push(upcoming[rng.gen_range(0..upcoming.len())].id);
    }

    let id = *next_attendee_id;
    let name = generate_person_name(rng);
    let email_local: String =
        name.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();

    attendees.push(Attendee {
        id,
        name,
        email: format!("{email_local}{id}@example.com"),
        company: COMPANIES[rng.gen_range(0..COMPANIES.len())].to_string(),
        role: ATTENDEE_ROLES[rng.gen_range(0..ATTENDEE_ROLES.len())].to_string(),
        registered_sessions,
        attended_sessions: Vec::new(),
        engagement_score: rng.gen_range(30..=100),
        joined_at: now.to_string(),
    });
    *next_attendee_id += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn growth_is_occasional_and_ids_advance() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut attendees = Vec::new();
        let mut next_id = 848;
        for _ in 0..500 {
            tick_growth(&mut attendees, &[], &mut next_id, "2026-08-07T12:00:00Z", &mut rng);
        }
        // Around 10% of ticks should mint an attendee.
        assert!(!attendees.is_empty());
        assert!(attendees.len() < 150);
        assert_eq!(next_id as usize, 848 + attendees.len());
        assert_eq!(attendees[0].id, 848);
    }

    #[test]
    fn new_attendees_only_register_for_upcoming() {
        let mut rng = StdRng::seed_from_u64(2);
        let session = Session {
            id: 9,
            title: "T".into(),
            speaker_id: 1,
            room: "R".into(),
            start_hour: 15,
            start_minute: 0,
            capacity: 100,
            current_attendance: 0,
            engagement: 70,
            status: SessionStatus::Upcoming,
            tags: vec![],
            rating: 4.0,
        };
        let mut completed = session.clone();
        completed.id = 1;
        completed.status = SessionStatus::Completed;

        let mut attendees = Vec::new();
        let mut next_id = 1;
        for _ in 0..500 {
            tick_growth(
                &mut attendees,
                &[completed.clone(), session.clone()],
                &mut next_id,
                "2026-08-07T12:00:00Z",
                &mut rng,
            );
        }
        for a in &attendees {
            assert!(a.attended_sessions.is_empty());
            assert!(a.registered_sessions.iter().all(|&sid| sid == 9));
        }
        assert!(attendees.iter().any(|a| !a.registered_sessions.is_empty()));
    }
}
