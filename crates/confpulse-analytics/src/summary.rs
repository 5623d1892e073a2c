//! Event-wide performance summary composed from the other analytics.

use confpulse_core::model::{speaker_rollup, Attendee, Session, Speaker};
use serde::{Deserialize, Serialize};

use crate::attention::{sessions_needing_attention, AttentionFlag};
use crate::rankings::{top_sessions, RankMetric};
use crate::stats::{session_stats, SessionStats};

/// Fill rate (percent) below which consolidation is recommended.
const LOW_FILL_THRESHOLD: f32 = 60.0;
/// Engagement below which a session counts as low-engagement.
const LOW_ENGAGEMENT: u8 = 60;
/// Share of low-engagement sessions that triggers a recommendation.
const LOW_ENGAGEMENT_SHARE: f32 = 0.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHighlight {
    pub session_id: u32,
    pub title: String,
    pub value: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerHighlight {
    pub speaker_id: u32,
    pub name: String,
    pub average_rating: f32,
    pub total_attendance: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Highlights {
    pub top_attended: Option<SessionHighlight>,
    pub top_engaged: Option<SessionHighlight>,
    pub top_speaker: Option<SpeakerHighlight>,
}

/// The overview / highlights / recommendations bundle rendered on the
/// organizer landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub overview: SessionStats,
    pub highlights: Highlights,
    pub attention: Vec<AttentionFlag>,
    pub recommendations: Vec<String>,
    pub total_registered_attendees: u32,
}

/// Compose the full summary. Empty inputs produce an empty-but-valid
/// bundle, never an error.
pub fn performance_summary(
    sessions: &[Session],
    speakers: &[Speaker],
    attendees: &[Attendee],
) -> PerformanceSummary {
    PerformanceSummary {
        overview: session_stats(sessions),
        highlights: build_highlights(sessions, speakers),
        attention: sessions_needing_attention(sessions),
        recommendations: strategic_recommendations(sessions),
        total_registered_attendees: attendees.len() as u32,
    }
}

fn build_highlights(sessions: &[Session], speakers: &[Speaker]) -> Highlights {
    let top_attended = top_sessions(sessions, RankMetric::Attendance, 1).pop().map(|r| {
        SessionHighlight {
            session_id: r.session.id,
            title: r.session.title.clone(),
            value: r.session.current_attendance as f32,
        }
    });
    let top_engaged = top_sessions(sessions, RankMetric::Engagement, 1).pop().map(|r| {
        SessionHighlight {
            session_id: r.session.id,
            title: r.session.title.clone(),
            value: r.session.engagement as f32,
        }
    });

    let top_speaker = speakers
        .iter()
        .map(|sp| (sp, speaker_rollup(sp.id, sessions)))
        .filter(|(_, rollup)| rollup.session_count > 0)
        .max_by(|(_, a), (_, b)| {
            a.average_rating.partial_cmp(&b.average_rating).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(sp, rollup)| SpeakerHighlight {
            speaker_id: sp.id,
            name: sp.name.clone(),
            average_rating: rollup.average_rating,
            total_attendance: rollup.total_attendance,
        });

    Highlights { top_attended, top_engaged, top_speaker }
}

/// Heuristic event-level advice: overall fill rate, the share of
/// low-engagement sessions, and the morning/afternoon attendance split.
fn strategic_recommendations(sessions: &[Session]) -> Vec<String> {
    let mut recommendations = Vec::new();
    if sessions.is_empty() {
        return recommendations;
    }

    let avg_fill: f32 =
        sessions.iter().map(|s| s.attendance_rate()).sum::<f32>() / sessions.len() as f32;
    if avg_fill < LOW_FILL_THRESHOLD {
        recommendations.push(format!(
            "Average fill rate is {avg_fill:.0}%; consider consolidating into fewer rooms or boosting promotion."
        ));
    }

    let low_engagement =
        sessions.iter().filter(|s| s.engagement < LOW_ENGAGEMENT).count() as f32;
    let share = low_engagement / sessions.len() as f32;
    if share > LOW_ENGAGEMENT_SHARE {
        recommendations.push(format!(
            "{:.0}% of sessions have engagement below {LOW_ENGAGEMENT}; schedule interactive formats between talks.",
            share * 100.0
        ));
    }

    let morning: Vec<&Session> = sessions.iter().filter(|s| s.start_hour < 12).collect();
    let afternoon: Vec<&Session> = sessions.iter().filter(|s| s.start_hour >= 12).collect();
    if !morning.is_empty() && !afternoon.is_empty() {
        let morning_avg = morning.iter().map(|s| s.current_attendance as f32).sum::<f32>()
            / morning.len() as f32;
        let afternoon_avg = afternoon.iter().map(|s| s.current_attendance as f32).sum::<f32>()
            / afternoon.len() as f32;
        if morning_avg > afternoon_avg * 1.15 {
            recommendations.push(
                "Morning sessions out-draw the afternoon; consider moving marquee talks later to balance the day.".to_string(),
            );
        } else if afternoon_avg > morning_avg * 1.15 {
            recommendations.push(
                "Afternoon sessions out-draw the morning; consider a stronger opening slate.".to_string(),
            );
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use confpulse_core::model::SessionStatus;

    fn session(id: u32, speaker_id: u32, hour: u32, attendance: u32, engagement: u8) -> Session {
        Session {
            id,
            title: format!("S{id}"),
            speaker_id,
            room: "R".into(),
            start_hour: hour,
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
    fn empty_inputs_compose_without_panicking() {
        let summary = performance_summary(&[], &[], &[]);
        assert_eq!(summary.overview.total, 0);
        assert!(summary.highlights.top_attended.is_none());
        assert!(summary.recommendations.is_empty());
    }

    #[test]
    fn highlights_pick_the_leaders() {
        let sessions = vec![session(1, 1, 9, 90, 50), session(2, 2, 9, 40, 95)];
        let speakers: Vec<Speaker> = Vec::new();
        let summary = performance_summary(&sessions, &speakers, &[]);
        assert_eq!(summary.highlights.top_attended.unwrap().session_id, 1);
        assert_eq!(summary.highlights.top_engaged.unwrap().session_id, 2);
    }

    #[test]
    fn low_fill_rate_produces_recommendation() {
        let sessions = vec![session(1, 1, 9, 20, 80), session(2, 1, 14, 30, 80)];
        let summary = performance_summary(&sessions, &[], &[]);
        assert!(summary.recommendations.iter().any(|r| r.contains("fill rate")));
    }

    #[test]
    fn lopsided_day_produces_schedule_recommendation() {
        let sessions = vec![session(1, 1, 9, 95, 80), session(2, 1, 15, 40, 80)];
        let summary = performance_summary(&sessions, &[], &[]);
        assert!(summary.recommendations.iter().any(|r| r.contains("Morning")));
    }
}
