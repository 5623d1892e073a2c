//! Pure analytics logic for ConfPulse.
//!
//! Every computation in this crate is a stateless function over
//! snapshot data from `confpulse-core`: it takes plain slices, returns
//! plain records and never mutates its input. [`service::AnalyticsService`]
//! fronts the lot with a single short-TTL cache for the dashboard layer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`stats`] | Headline session statistics (counts, averages, capacity) |
//! | [`rankings`] | Top-N sessions by attendance/engagement/capacity/rating |
//! | [`trends`] | Per-hour attendance buckets, category breakdowns |
//! | [`attention`] | Sessions below thresholds, with severity and remedies |
//! | [`summary`] | Composed overview/highlights/recommendations bundle |
//! | [`charts`] | Chart-ready series for sessions, speakers, feedback |
//! | [`sentiment`] | Feedback sentiment split by overall rating |
//! | [`forecast`] | ROI proxy score and attendance prediction |
//! | [`insights`] | Rule-based prioritized messages over a snapshot |
//! | [`cache`] | TTL cache keyed by serialized argument signatures |
//! | [`service`] | The cached façade consumed by the dashboard |

pub mod attention;
pub mod cache;
pub mod charts;
pub mod forecast;
pub mod insights;
pub mod rankings;
pub mod sentiment;
pub mod service;
pub mod stats;
pub mod summary;
pub mod trends;

pub use service::{AnalyticsService, DEFAULT_TTL};
