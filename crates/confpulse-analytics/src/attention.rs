//! Sessions needing organizer attention, with severities and remedies.

use confpulse_core::model::Session;
use serde::{Deserialize, Serialize};

/// Attendance rate below this flags a session (percent).
const ATTENDANCE_FLAG: f32 = 50.0;
/// Attendance rate below this escalates to high severity.
const ATTENDANCE_HIGH: f32 = 30.0;
/// Engagement below this flags a session.
const ENGAGEMENT_FLAG: u8 = 60;
/// Engagement below this escalates to high severity.
const ENGAGEMENT_HIGH: u8 = 40;
/// Rating below this flags a session.
const RATING_FLAG: f32 = 3.0;
/// Rating below this escalates to high severity.
const RATING_HIGH: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    LowAttendance,
    LowEngagement,
    LowRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// One detected problem with its templated remediation steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemReport {
    pub kind: ProblemKind,
    pub severity: Severity,
    pub detail: String,
    pub recommended_actions: Vec<String>,
}

/// One flagged session with every problem found on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttentionFlag {
    pub session_id: u32,
    pub title: String,
    pub overall_severity: Severity,
    pub problems: Vec<ProblemReport>,
}

fn recommended_actions(kind: ProblemKind) -> Vec<String> {
    let actions: &[&str] = match kind {
        ProblemKind::LowAttendance => &[
            "Push an app notification highlighting the session",
            "Move the session to a smaller room to improve atmosphere",
            "Cross-promote from related sessions' waiting lists",
        ],
        ProblemKind::LowEngagement => &[
            "Prompt the speaker to run a live poll or Q&A",
            "Surface the session in the interactive track feed",
        ],
        ProblemKind::LowRating => &[
            "Review recent feedback comments with the speaker",
            "Offer attendees a follow-up resource pack",
        ],
    };
    actions.iter().map(|a| a.to_string()).collect()
}

fn inspect(session: &Session) -> Vec<ProblemReport> {
    let mut problems = Vec::new();
    let rate = session.attendance_rate();

    if rate < ATTENDANCE_FLAG {
        problems.push(ProblemReport {
            kind: ProblemKind::LowAttendance,
            severity: if rate < ATTENDANCE_HIGH { Severity::High } else { Severity::Medium },
            detail: format!("attendance at {rate:.0}% of capacity"),
            recommended_actions: recommended_actions(ProblemKind::LowAttendance),
        });
    }
    if session.engagement < ENGAGEMENT_FLAG {
        problems.push(ProblemReport {
            kind: ProblemKind::LowEngagement,
            severity: if session.engagement < ENGAGEMENT_HIGH {
                Severity::High
            } else {
                Severity::Medium
            },
            detail: format!("engagement at {}", session.engagement),
            recommended_actions: recommended_actions(ProblemKind::LowEngagement),
        });
    }
    if session.rating < RATING_FLAG {
        problems.push(ProblemReport {
            kind: ProblemKind::LowRating,
            severity: if session.rating < RATING_HIGH { Severity::High } else { Severity::Medium },
            detail: format!("rating at {:.1}", session.rating),
            recommended_actions: recommended_actions(ProblemKind::LowRating),
        });
    }
    problems
}

/// Flag every session whose attendance rate, engagement or rating falls
/// below its threshold. High-severity flags sort first.
pub fn sessions_needing_attention(sessions: &[Session]) -> Vec<AttentionFlag> {
    let mut flags: Vec<AttentionFlag> = sessions
        .iter()
        .filter_map(|session| {
            let problems = inspect(session);
            if problems.is_empty() {
                return None;
            }
            let overall_severity = problems
                .iter()
                .map(|p| p.severity)
                .max()
                .expect("problems is non-empty");
            Some(AttentionFlag {
                session_id: session.id,
                title: session.title.clone(),
                overall_severity,
                problems,
            })
        })
        .collect();

    flags.sort_by(|a, b| b.overall_severity.cmp(&a.overall_severity));
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use confpulse_core::model::SessionStatus;

    fn session(id: u32, attendance: u32, engagement: u8, rating: f32) -> Session {
        Session {
            id,
            title: format!("S{id}"),
            speaker_id: 1,
            room: "R".into(),
            start_hour: 9,
            start_minute: 0,
            capacity: 100,
            current_attendance: attendance,
            engagement,
            status: SessionStatus::Active,
            tags: vec![],
            rating,
        }
    }

    #[test]
    fn healthy_sessions_are_not_flagged() {
        let flags = sessions_needing_attention(&[session(1, 80, 75, 4.5)]);
        assert!(flags.is_empty());
    }

    #[test]
    fn struggling_session_flags_all_three_problems_high() {
        let flags = sessions_needing_attention(&[session(1, 20, 35, 2.0)]);
        assert_eq!(flags.len(), 1);
        let flag = &flags[0];
        assert_eq!(flag.overall_severity, Severity::High);
        assert_eq!(flag.problems.len(), 3);
        for p in &flag.problems {
            assert_eq!(p.severity, Severity::High);
            assert!(!p.recommended_actions.is_empty());
        }
    }

    #[test]
    fn borderline_session_flags_medium() {
        let flags = sessions_needing_attention(&[session(1, 45, 55, 2.8)]);
        assert_eq!(flags[0].overall_severity, Severity::Medium);
        assert!(flags[0].problems.iter().all(|p| p.severity == Severity::Medium));
    }

    #[test]
    fn high_severity_sorts_first() {
        let flags = sessions_needing_attention(&[
            session(1, 45, 75, 4.0),
            session(2, 10, 75, 4.0),
            session(3, 48, 75, 4.0),
        ]);
        assert_eq!(flags.len(), 3);
        assert_eq!(flags[0].session_id, 2);
    }
}
