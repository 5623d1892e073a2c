//! Chart-ready transforms for the dashboard's rendering layer.

use std::collections::BTreeMap;

use confpulse_core::model::{speaker_rollup, Feedback, Session, SessionStatus, Speaker};
use serde::{Deserialize, Serialize};

/// One labelled value in a series. The rendering layer decides the mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f32,
}

impl ChartPoint {
    fn new(label: impl Into<String>, value: f32) -> Self {
        Self { label: label.into(), value }
    }
}

/// Series bundle for session charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionCharts {
    pub attendance_by_session: Vec<ChartPoint>,
    pub engagement_by_session: Vec<ChartPoint>,
    pub status_distribution: Vec<ChartPoint>,
}

/// Per-session attendance and engagement series plus the status split.
pub fn session_charts(sessions: &[Session]) -> SessionCharts {
    let status_count = |status: SessionStatus| {
        sessions.iter().filter(|s| s.status == status).count() as f32
    };
    SessionCharts {
        attendance_by_session: sessions
            .iter()
            .map(|s| ChartPoint::new(s.title.clone(), s.current_attendance as f32))
            .collect(),
        engagement_by_session: sessions
            .iter()
            .map(|s| ChartPoint::new(s.title.clone(), s.engagement as f32))
            .collect(),
        status_distribution: vec![
            ChartPoint::new("upcoming", status_count(SessionStatus::Upcoming)),
            ChartPoint::new("active", status_count(SessionStatus::Active)),
            ChartPoint::new("completed", status_count(SessionStatus::Completed)),
        ],
    }
}

/// Series bundle for speaker charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakerCharts {
    pub sessions_per_speaker: Vec<ChartPoint>,
    pub attendance_per_speaker: Vec<ChartPoint>,
    pub rating_per_speaker: Vec<ChartPoint>,
}

/// Per-speaker rollups as chart series. Speakers without sessions are
/// omitted rather than plotted at zero.
pub fn speaker_charts(speakers: &[Speaker], sessions: &[Session]) -> SpeakerCharts {
    let mut charts = SpeakerCharts::default();
    for speaker in speakers {
        let rollup = speaker_rollup(speaker.id, sessions);
        if rollup.session_count == 0 {
            continue;
        }
        charts
            .sessions_per_speaker
            .push(ChartPoint::new(speaker.name.clone(), rollup.session_count as f32));
        charts
            .attendance_per_speaker
            .push(ChartPoint::new(speaker.name.clone(), rollup.total_attendance as f32));
        charts.rating_per_speaker.push(ChartPoint::new(speaker.name.clone(), rollup.average_rating));
    }
    charts
}

/// Series bundle for feedback charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackCharts {
    /// Count of feedback per overall rating, labels "1" through "5".
    pub overall_histogram: Vec<ChartPoint>,
    /// Mean score per rated dimension.
    pub dimension_averages: Vec<ChartPoint>,
    /// Feedback volume per session id.
    pub volume_by_session: Vec<ChartPoint>,
}

/// Histogram, per-dimension averages and per-session volume for the
/// feedback list.
pub fn feedback_charts(feedback: &[Feedback]) -> FeedbackCharts {
    let mut histogram = [0u32; 5];
    let mut volume: BTreeMap<u32, u32> = BTreeMap::new();
    let mut sums = (0f32, 0f32, 0f32, 0f32);
    for f in feedback {
        if (1..=5).contains(&f.ratings.overall) {
            histogram[(f.ratings.overall - 1) as usize] += 1;
        }
        *volume.entry(f.session_id).or_default() += 1;
        sums.0 += f.ratings.content as f32;
        sums.1 += f.ratings.presentation as f32;
        sums.2 += f.ratings.relevance as f32;
        sums.3 += f.ratings.overall as f32;
    }
    let n = feedback.len().max(1) as f32;

    FeedbackCharts {
        overall_histogram: histogram
            .iter()
            .enumerate()
            .map(|(i, count)| ChartPoint::new((i + 1).to_string(), *count as f32))
            .collect(),
        dimension_averages: vec![
            ChartPoint::new("content", sums.0 / n),
            ChartPoint::new("presentation", sums.1 / n),
            ChartPoint::new("relevance", sums.2 / n),
            ChartPoint::new("overall", sums.3 / n),
        ],
        volume_by_session: volume
            .into_iter()
            .map(|(session_id, count)| ChartPoint::new(format!("session-{session_id}"), count as f32))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confpulse_core::model::FeedbackRatings;

    fn feedback_entry(session_id: u32, overall: u8) -> Feedback {
        Feedback {
            id: 1,
            session_id,
            attendee_id: 1,
            attendee_name: "A".into(),
            ratings: FeedbackRatings { content: 4, presentation: 3, relevance: 5, overall },
            comment: String::new(),
            submitted_at: String::new(),
            helpful_count: 0,
            verified: true,
        }
    }

    #[test]
    fn histogram_counts_by_overall() {
        let feedback = vec![feedback_entry(1, 5), feedback_entry(1, 5), feedback_entry(2, 2)];
        let charts = feedback_charts(&feedback);
        assert_eq!(charts.overall_histogram[4].value, 2.0);
        assert_eq!(charts.overall_histogram[1].value, 1.0);
        assert_eq!(charts.volume_by_session.len(), 2);
        assert_eq!(charts.volume_by_session[0].value, 2.0);
    }

    #[test]
    fn empty_feedback_yields_zeroed_series() {
        let charts = feedback_charts(&[]);
        assert!(charts.overall_histogram.iter().all(|p| p.value == 0.0));
        assert!(charts.dimension_averages.iter().all(|p| p.value == 0.0));
        assert!(charts.volume_by_session.is_empty());
    }
}
