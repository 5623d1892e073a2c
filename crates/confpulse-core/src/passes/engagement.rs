//! Engagement drift - active sessions wander up or down a few points.

use rand::Rng;

use crate::model::{Session, SessionStatus};

/// Drift engagement on every active session by a uniform amount in
/// [-5, +5], rounded and clamped to 0..=100.
pub fn tick_engagement(sessions: &mut [Session], rng: &mut impl Rng) {
    for session in sessions.iter_mut().filter(|s| s.status == SessionStatus::Active) {
        let drifted = session.engagement as f32 + rng.gen_range(-5.0..=5.0);
        session.engagement = drifted.round().clamp(0.0, 100.0) as u8;
    }
}
