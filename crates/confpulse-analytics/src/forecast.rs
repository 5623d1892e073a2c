//! ROI proxy score and attendance prediction heuristics.

use confpulse_core::model::{Feedback, Session};
use serde::{Deserialize, Serialize};

/// Fill rate assumed when no comparable session exists.
const FALLBACK_FILL: f32 = 0.7;

/// Weighted-product proxy for event ROI on a 0-100 scale: satisfaction
/// (feedback overall), engagement and seat utilization, geometrically
/// weighted. Not a financial figure.
pub fn engagement_roi(sessions: &[Session], feedback: &[Feedback]) -> f32 {
    if sessions.is_empty() {
        return 0.0;
    }

    let satisfaction = if feedback.is_empty() {
        0.0
    } else {
        feedback.iter().map(|f| f.ratings.overall as f32).sum::<f32>()
            / feedback.len() as f32
            / 5.0
    };
    let engagement = sessions.iter().map(|s| s.engagement as f32).sum::<f32>()
        / sessions.len() as f32
        / 100.0;
    let utilization = sessions.iter().map(|s| s.attendance_rate()).sum::<f32>()
        / sessions.len() as f32
        / 100.0;

    100.0 * satisfaction.powf(0.4) * engagement.powf(0.35) * utilization.powf(0.25)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastConfidence {
    Low,
    Medium,
    High,
}

/// Predicted attendance for a session, with how it was derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceForecast {
    pub session_id: u32,
    pub predicted_attendance: u32,
    /// Fill rate applied to the session's capacity, 0..=1.
    pub expected_fill: f32,
    /// How many comparable sessions informed the estimate.
    pub basis_sessions: u32,
    pub confidence: ForecastConfidence,
}

fn is_similar(target: &Session, other: &Session) -> bool {
    other.id != target.id
        && (other.speaker_id == target.speaker_id
            || other.tags.iter().any(|t| target.tags.contains(t)))
}

/// Average the fill rate of sessions sharing the target's speaker or a
/// tag and apply it to the target's capacity. Falls back to a flat 70%
/// estimate when nothing comparable exists.
pub fn predict_attendance(target: &Session, historical: &[Session]) -> AttendanceForecast {
    let similar: Vec<&Session> =
        historical.iter().filter(|s| is_similar(target, s)).collect();

    let (expected_fill, confidence) = if similar.is_empty() {
        (FALLBACK_FILL, ForecastConfidence::Low)
    } else {
        let fill = similar.iter().map(|s| s.attendance_rate() / 100.0).sum::<f32>()
            / similar.len() as f32;
        let confidence = if similar.len() >= 3 {
            ForecastConfidence::High
        } else {
            ForecastConfidence::Medium
        };
        (fill, confidence)
    };

    AttendanceForecast {
        session_id: target.id,
        predicted_attendance: (target.capacity as f32 * expected_fill).round() as u32,
        expected_fill,
        basis_sessions: similar.len() as u32,
        confidence,
    }
}
