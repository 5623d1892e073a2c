//! Cached analytics façade.
//!
//! One service fronts every analytics computation with a single TTL
//! cache (configurable, 5 seconds by default). Keys are the operation
//! name plus the JSON-serialized arguments, so a repeated query over
//! unchanged data inside the window is served from cache. The service
//! does not watch the dataset; callers clear the cache when they know
//! the data moved meaningfully.

use std::time::Duration;

use confpulse_core::model::{Attendee, Feedback, Session, Snapshot, Speaker};
use serde::Serialize;

use crate::attention::{sessions_needing_attention, AttentionFlag};
use crate::cache::TtlCache;
use crate::charts::{
    feedback_charts, session_charts, speaker_charts, FeedbackCharts, SessionCharts, SpeakerCharts,
};
use crate::forecast::{engagement_roi, predict_attendance, AttendanceForecast};
use crate::insights::{generate_insights, Insight};
use crate::rankings::{top_sessions, RankMetric, RankedSession};
use crate::sentiment::{sentiment_breakdown, SentimentBreakdown};
use crate::stats::{session_stats, SessionStats};
use crate::summary::{performance_summary, PerformanceSummary};
use crate::trends::{attendance_by_hour, category_breakdown, CategoryKey, CategorySlice, HourBucket};

/// Default result lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

fn cache_key<A: Serialize>(op: &str, args: &A) -> String {
    let serialized = serde_json::to_string(args).unwrap_or_default();
    format!("{op}:{serialized}")
}

/// Cached entry point used by the dashboard layer. Construct one per
/// consumer; caches are local to the instance.
pub struct AnalyticsService {
    cache: TtlCache,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { cache: TtlCache::new(ttl) }
    }

    pub fn session_stats(&mut self, sessions: &[Session]) -> SessionStats {
        self.cache
            .get_or_compute(cache_key("session_stats", &sessions), || session_stats(sessions))
    }

    pub fn top_sessions(
        &mut self,
        sessions: &[Session],
        metric: RankMetric,
        limit: usize,
    ) -> Vec<RankedSession> {
        self.cache.get_or_compute(
            cache_key("top_sessions", &(sessions, metric, limit)),
            || top_sessions(sessions, metric, limit),
        )
    }

    pub fn attendance_by_hour(&mut self, sessions: &[Session]) -> Vec<HourBucket> {
        self.cache.get_or_compute(cache_key("attendance_by_hour", &sessions), || {
            attendance_by_hour(sessions)
        })
    }

    pub fn category_breakdown(
        &mut self,
        sessions: &[Session],
        key: CategoryKey,
    ) -> Vec<CategorySlice> {
        self.cache.get_or_compute(cache_key("category_breakdown", &(sessions, key)), || {
            category_breakdown(sessions, key)
        })
    }

    pub fn sessions_needing_attention(&mut self, sessions: &[Session]) -> Vec<AttentionFlag> {
        self.cache.get_or_compute(cache_key("sessions_needing_attention", &sessions), || {
            sessions_needing_attention(sessions)
        })
    }

    pub fn performance_summary(
        &mut self,
        sessions: &[Session],
        speakers: &[Speaker],
        attendees: &[Attendee],
    ) -> PerformanceSummary {
        self.cache.get_or_compute(
            cache_key("performance_summary", &(sessions, speakers, attendees)),
            || performance_summary(sessions, speakers, attendees),
        )
    }

    pub fn session_charts(&mut self, sessions: &[Session]) -> SessionCharts {
        self.cache
            .get_or_compute(cache_key("session_charts", &sessions), || session_charts(sessions))
    }

    pub fn speaker_charts(&mut self, speakers: &[Speaker], sessions: &[Session]) -> SpeakerCharts {
        self.cache.get_or_compute(cache_key("speaker_charts", &(speakers, sessions)), || {
            speaker_charts(speakers, sessions)
        })
    }

    pub fn feedback_charts(&mut self, feedback: &[Feedback]) -> FeedbackCharts {
        self.cache
            .get_or_compute(cache_key("feedback_charts", &feedback), || feedback_charts(feedback))
    }

    pub fn sentiment_breakdown(&mut self, feedback: &[Feedback]) -> SentimentBreakdown {
        self.cache.get_or_compute(cache_key("sentiment_breakdown", &feedback), || {
            sentiment_breakdown(feedback)
        })
    }

    pub fn engagement_roi(&mut self, sessions: &[Session], feedback: &[Feedback]) -> f32 {
        self.cache.get_or_compute(cache_key("engagement_roi", &(sessions, feedback)), || {
            engagement_roi(sessions, feedback)
        })
    }

    pub fn predict_attendance(
        &mut self,
        target: &Session,
        historical: &[Session],
    ) -> AttendanceForecast {
        self.cache.get_or_compute(
            cache_key("predict_attendance", &(target, historical)),
            || predict_attendance(target, historical),
        )
    }

    pub fn insights(&mut self, snapshot: &Snapshot) -> Vec<Insight> {
        self.cache
            .get_or_compute(cache_key("insights", &snapshot), || generate_insights(snapshot))
    }

    /// Evict one cached entry, or everything when `key` is None.
    pub fn clear_cache(&mut self, key: Option<&str>) {
        match key {
            Some(key) => self.cache.clear(key),
            None => self.cache.clear_all(),
        }
    }

    /// Cache hit count, for tests asserting idempotent reads.
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }

    /// Cache miss (compute) count.
    pub fn cache_misses(&self) -> u64 {
        self.cache.misses()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confpulse_core::model::SessionStatus;

    fn sessions() -> Vec<Session> {
        (1..=3)
            .map(|id| Session {
                id,
                title: format!("S{id}"),
                speaker_id: 1,
                room: "R".into(),
                start_hour: 9 + id,
                start_minute: 0,
                capacity: 100,
                current_attendance: 40 * id % 101,
                engagement: 70,
                status: SessionStatus::Active,
                tags: vec!["ai".into()],
                rating: 4.0,
            })
            .collect()
    }

    #[test]
    fn identical_call_within_ttl_hits_cache() {
        let mut service = AnalyticsService::new();
        let sessions = sessions();
        let first = service.session_stats(&sessions);
        let second = service.session_stats(&sessions);
        assert_eq!(first, second);
        assert_eq!(service.cache_misses(), 1);
        assert_eq!(service.cache_hits(), 1);
    }

    #[test]
    fn changed_args_miss_the_cache() {
        let mut service = AnalyticsService::new();
        let mut sessions = sessions();
        service.session_stats(&sessions);
        sessions[0].current_attendance += 1;
        service.session_stats(&sessions);
        assert_eq!(service.cache_misses(), 2);
    }

    #[test]
    fn different_operations_do_not_collide() {
        let mut service = AnalyticsService::new();
        let sessions = sessions();
        service.session_stats(&sessions);
        let top = service.top_sessions(&sessions, RankMetric::default(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(service.cache_misses(), 2);
    }

    #[test]
    fn clear_cache_forces_recompute() {
        let mut service = AnalyticsService::new();
        let sessions = sessions();
        service.session_stats(&sessions);
        service.clear_cache(None);
        service.session_stats(&sessions);
        assert_eq!(service.cache_misses(), 2);
        assert_eq!(service.cache_hits(), 0);
    }

    #[test]
    fn zero_ttl_always_recomputes() {
        let mut service = AnalyticsService::with_ttl(Duration::from_secs(0));
        let sessions = sessions();
        service.session_stats(&sessions);
        service.session_stats(&sessions);
        assert_eq!(service.cache_misses(), 2);
    }
}
