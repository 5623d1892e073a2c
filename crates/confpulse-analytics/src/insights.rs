//! Rule-based, human-readable insights over a full snapshot.

use confpulse_core::model::{SessionStatus, Snapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    Low,
    Medium,
    High,
}

/// One prioritized observation for the organizer feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub priority: InsightPriority,
    pub category: String,
    pub message: String,
}

impl Insight {
    fn new(priority: InsightPriority, category: &str, message: String) -> Self {
        Self { priority, category: category.to_string(), message }
    }
}

/// Threshold rules over engagement, attendance and feedback volume.
/// Highest priority first; an empty snapshot produces no insights.
pub fn generate_insights(snapshot: &Snapshot) -> Vec<Insight> {
    let mut insights = Vec::new();
    let metrics = &snapshot.metrics;

    if metrics.active_sessions > 0 {
        if metrics.average_engagement < 50.0 {
            insights.push(Insight::new(
                InsightPriority::High,
                "engagement",
                format!(
                    "Live engagement has dropped to {:.0}; prompt speakers to open Q&A.",
                    metrics.average_engagement
                ),
            ));
        } else if metrics.average_engagement >= 80.0 {
            insights.push(Insight::new(
                InsightPriority::Low,
                "engagement",
                format!(
                    "Live engagement is strong at {:.0}; capture clips for the highlight reel.",
                    metrics.average_engagement
                ),
            ));
        }
    }

    let active: Vec<_> = snapshot
        .sessions
        .iter()
        .filter(|s| s.status == SessionStatus::Active)
        .collect();
    if !active.is_empty() {
        let avg_fill =
            active.iter().map(|s| s.attendance_rate()).sum::<f32>() / active.len() as f32;
        if avg_fill < 50.0 {
            insights.push(Insight::new(
                InsightPriority::High,
                "attendance",
                format!("Active rooms average {avg_fill:.0}% full; push a schedule reminder."),
            ));
        } else if avg_fill > 85.0 {
            insights.push(Insight::new(
                InsightPriority::Medium,
                "attendance",
                format!("Active rooms average {avg_fill:.0}% full; prepare overflow space."),
            ));
        }
    }

    let completed = metrics.completed_sessions;
    if completed > 0 && metrics.total_feedback < completed {
        insights.push(Insight::new(
            InsightPriority::Medium,
            "feedback",
            format!(
                "Only {} feedback entries across {} completed sessions; nudge attendees post-session.",
                metrics.total_feedback, completed
            ),
        ));
    }
    if metrics.total_feedback > 0 && metrics.average_rating >= 4.5 {
        insights.push(Insight::new(
            InsightPriority::Low,
            "feedback",
            format!("Average rating is {:.1}/5; quote it in the wrap-up post.", metrics.average_rating),
        ));
    }

    insights.sort_by(|a, b| b.priority.cmp(&a.priority));
    insights
}
