//! Session rankings by a chosen metric.

use std::cmp::Ordering;

use confpulse_core::model::Session;
use serde::{Deserialize, Serialize};

/// Which number a ranking sorts by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMetric {
    #[default]
    Attendance,
    Engagement,
    Capacity,
    Rating,
}

impl RankMetric {
    fn score(self, session: &Session) -> f32 {
        match self {
            RankMetric::Attendance => session.current_attendance as f32,
            RankMetric::Engagement => session.engagement as f32,
            RankMetric::Capacity => session.capacity as f32,
            RankMetric::Rating => session.rating,
        }
    }
}

/// One row of a ranking: the session plus its position and percentile
/// over the full input (not just the returned slice).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSession {
    pub session: Session,
    pub rank: u32,
    pub percentile: f32,
}

/// Top `limit` sessions by `metric`, descending. The sort is stable, so
/// ties keep their input order. Returns at most `min(limit, len)` rows.
pub fn top_sessions(sessions: &[Session], metric: RankMetric, limit: usize) -> Vec<RankedSession> {
    let total = sessions.len();
    if total == 0 || limit == 0 {
        return Vec::new();
    }

    let mut ordered: Vec<&Session> = sessions.iter().collect();
    ordered.sort_by(|a, b| {
        metric.score(b).partial_cmp(&metric.score(a)).unwrap_or(Ordering::Equal)
    });

    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, session)| RankedSession {
            session: session.clone(),
            rank: idx as u32 + 1,
            percentile: (total - idx) as f32 / total as f32 * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use confpulse_core::model::SessionStatus;

    fn session(id: u32, attendance: u32, rating: f32) -> Session {
        Session {
            id,
            title: format!("S{id}"),
            speaker_id: 1,
            room: "R".into(),
            start_hour: 9,
            start_minute: 0,
            capacity: 200,
            current_attendance: attendance,
            engagement: 70,
            status: SessionStatus::Active,
            tags: vec![],
            rating,
        }
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(top_sessions(&[], RankMetric::Attendance, 5).is_empty());
    }

    #[test]
    fn sorted_descending_with_ranks() {
        let sessions = vec![session(1, 40, 4.0), session(2, 90, 3.0), session(3, 60, 5.0)];
        let top = top_sessions(&sessions, RankMetric::Attendance, 5);
        let ids: Vec<u32> = top.iter().map(|r| r.session.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(top[0].rank, 1);
        assert!((top[0].percentile - 100.0).abs() < 0.001);
        assert!(top[2].percentile < top[1].percentile);
    }

    #[test]
    fn limit_caps_the_result() {
        let sessions: Vec<Session> = (1..=10).map(|i| session(i, i * 10, 4.0)).collect();
        let top = top_sessions(&sessions, RankMetric::Attendance, 3);
        assert_eq!(top.len(), 3);
        let ids: std::collections::HashSet<u32> = top.iter().map(|r| r.session.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let sessions = vec![session(1, 50, 4.0), session(2, 50, 4.0), session(3, 50, 4.0)];
        let top = top_sessions(&sessions, RankMetric::Attendance, 3);
        let ids: Vec<u32> = top.iter().map(|r| r.session.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn rating_metric_ranks_by_rating() {
        let sessions = vec![session(1, 40, 4.0), session(2, 90, 3.0), session(3, 60, 5.0)];
        let top = top_sessions(&sessions, RankMetric::Rating, 1);
        assert_eq!(top[0].session.id, 3);
    }
}
