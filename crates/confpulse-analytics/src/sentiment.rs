//! Feedback sentiment from overall-rating thresholds.

use confpulse_core::model::Feedback;
use serde::{Deserialize, Serialize};

/// Percentage split of feedback sentiment. Sums to ~100 when any
/// feedback exists, all zeros otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive_pct: f32,
    pub neutral_pct: f32,
    pub negative_pct: f32,
}

/// Classify by overall rating: >= 4 positive, 3 neutral, <= 2 negative.
pub fn sentiment_breakdown(feedback: &[Feedback]) -> SentimentBreakdown {
    if feedback.is_empty() {
        return SentimentBreakdown::default();
    }
    let n = feedback.len() as f32;
    let positive = feedback.iter().filter(|f| f.ratings.overall >= 4).count() as f32;
    let neutral = feedback.iter().filter(|f| f.ratings.overall == 3).count() as f32;
    let negative = feedback.iter().filter(|f| f.ratings.overall <= 2).count() as f32;

    SentimentBreakdown {
        positive_pct: positive / n * 100.0,
        neutral_pct: neutral / n * 100.0,
        negative_pct: negative / n * 100.0,
    }
}
