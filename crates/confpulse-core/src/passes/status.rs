//! Status transitions - sessions advance along the schedule.

use crate::clock::WallTime;
use crate::model::{Session, SessionStatus};

/// Minutes a session runs before it is considered over.
const SESSION_LENGTH_MINUTES: u32 = 60;
/// Fraction of capacity seated when a session goes live.
const OPENING_FILL: f32 = 0.3;

/// Advance session status against the clock. An upcoming session goes
/// active once `now` reaches its start (seeded with ~30% of capacity);
/// an active session completes one hour after its start. Transitions
/// never move backward.
pub fn tick_status(sessions: &mut [Session], now: WallTime) {
    let now_minutes = now.in_minutes();
    for session in sessions.iter_mut() {
        let start = session.start_in_minutes();
        match session.status {
            SessionStatus::Upcoming if now_minutes >= start => {
                session.status = SessionStatus::Active;
                session.current_attendance = (session.capacity as f32 * OPENING_FILL).round() as u32;
            }
            SessionStatus::Active if now_minutes >= start + SESSION_LENGTH_MINUTES => {
                session.status = SessionStatus::Completed;
            }
            _ => {}
        }
    }
}
