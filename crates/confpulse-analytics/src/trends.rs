//! Attendance trends by hour and category breakdowns.

use std::collections::BTreeMap;

use confpulse_core::model::Session;
use serde::{Deserialize, Serialize};

/// Aggregates for all sessions starting within one hour slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: u32,
    pub session_count: u32,
    pub total_attendance: u32,
    pub average_attendance: f32,
    /// Attendance over capacity across the bucket, as a percentage.
    pub fill_rate: f32,
}

/// Bucket sessions by start hour, ascending.
pub fn attendance_by_hour(sessions: &[Session]) -> Vec<HourBucket> {
    let mut buckets: BTreeMap<u32, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        buckets.entry(session.start_hour).or_default().push(session);
    }

    buckets
        .into_iter()
        .map(|(hour, group)| {
            let total_attendance: u32 = group.iter().map(|s| s.current_attendance).sum();
            let total_capacity: u32 = group.iter().map(|s| s.capacity).sum();
            let fill_rate = if total_capacity == 0 {
                0.0
            } else {
                total_attendance as f32 / total_capacity as f32 * 100.0
            };
            HourBucket {
                hour,
                session_count: group.len() as u32,
                total_attendance,
                average_attendance: total_attendance as f32 / group.len().max(1) as f32,
                fill_rate,
            }
        })
        .collect()
}

/// What to group sessions by in [`category_breakdown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    /// The session's primary tag.
    #[default]
    Track,
    Room,
    Status,
}

/// Aggregates for one category of sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub session_count: u32,
    pub average_attendance: f32,
    pub average_engagement: f32,
    /// Best-attended session in this category.
    pub top_session_id: u32,
    pub top_session_title: String,
}

fn category_of(session: &Session, key: CategoryKey) -> String {
    match key {
        CategoryKey::Track => {
            session.tags.first().cloned().unwrap_or_else(|| "general".to_string())
        }
        CategoryKey::Room => session.room.clone(),
        CategoryKey::Status => session.status.label().to_string(),
    }
}

/// Group sessions by `key` and aggregate each group, including its top
/// session by attendance. Categories come back in name order.
pub fn category_breakdown(sessions: &[Session], key: CategoryKey) -> Vec<CategorySlice> {
    let mut groups: BTreeMap<String, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        groups.entry(category_of(session, key)).or_default().push(session);
    }

    groups
        .into_iter()
        .map(|(category, group)| {
            let n = group.len() as f32;
            let top = group
                .iter()
                .max_by_key(|s| s.current_attendance)
                .expect("group is never empty");
            CategorySlice {
                category,
                session_count: group.len() as u32,
                average_attendance:
                    group.iter().map(|s| s.current_attendance as f32).sum::<f32>() / n,
                average_engagement: group.iter().map(|s| s.engagement as f32).sum::<f32>() / n,
                top_session_id: top.id,
                top_session_title: top.title.clone(),
            }
        })
        .collect()
}
