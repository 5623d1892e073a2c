//! Attendance drift - active sessions gain or lose a few attendees.

use rand::Rng;

use crate::model::{Session, SessionStatus};

/// Largest per-tick attendance gain.
const MAX_GAIN: u32 = 5;
/// Largest per-tick attendance loss.
const MAX_LOSS: u32 = 3;

/// Drift attendance on every active session. 60% of the time a session
/// gains up to `min(5, remaining capacity)` attendees, 20% of the time
/// it loses up to `min(3, current attendance)`, otherwise it holds.
pub fn tick_attendance(sessions: &mut [Session], rng: &mut impl Rng) {
    for session in sessions.iter_mut().filter(|s| s.status == SessionStatus::Active) {
        let roll: f32 = rng.gen();
        if roll < 0.6 {
            let headroom = session.remaining_capacity().min(MAX_GAIN);
            if headroom > 0 {
                session.current_attendance += rng.gen_range(1..=headroom);
            }
        } else if roll < 0.8 {
            let floor = session.current_attendance.min(MAX_LOSS);
            if floor > 0 {
                session.current_attendance -= rng.gen_range(1..=floor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn active_session(capacity: u32, attendance: u32) -> Session {
        Session {
            id: 1,
            title: "T".into(),
            speaker_id: 1,
            room: "R".into(),
            start_hour: 10,
            start_minute: 0,
            capacity,
            current_attendance: attendance,
            engagement: 70,
            status: SessionStatus::Active,
            tags: vec![],
            rating: 4.0,
        }
    }

    #[test]
    fn attendance_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sessions = vec![active_session(100, 98), active_session(100, 1)];
        for _ in 0..500 {
            tick_attendance(&mut sessions, &mut rng);
            for s in &sessions {
                assert!(s.current_attendance <= s.capacity);
            }
        }
    }

    #[test]
    fn full_session_never_overflows() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sessions = vec![active_session(10, 10)];
        for _ in 0..100 {
            tick_attendance(&mut sessions, &mut rng);
            assert!(sessions[0].current_attendance <= 10);
        }
    }

    #[test]
    fn non_active_sessions_untouched() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sessions = vec![active_session(100, 50)];
        sessions[0].status = SessionStatus::Completed;
        for _ in 0..50 {
            tick_attendance(&mut sessions, &mut rng);
        }
        assert_eq!(sessions[0].current_attendance, 50);
    }
}
