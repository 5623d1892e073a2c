//! Simulation engine - owns the canonical dataset and drives ticks.
//!
//! One tick runs the five mutation passes in fixed order, recomputes the
//! derived metrics, stamps the snapshot and fans it out to subscribers.
//! The engine is a plain constructible object; callers that want a
//! wall-clock timer wrap it in [`crate::service::SimulatorService`].

use std::panic::{catch_unwind, AssertUnwindSafe};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::WallTime;
use crate::generation::generate_initial_data;
use crate::model::{Attendee, Dataset, EventMetrics, Feedback, Session, Snapshot, Speaker};
use crate::passes::{tick_attendance, tick_engagement, tick_feedback, tick_growth, tick_status};

/// Handle returned by [`SimEngine::subscribe`]; pass it back to
/// [`SimEngine::unsubscribe`] to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type SubscriberFn = Box<dyn Fn(&Snapshot) + Send>;

/// The simulation engine. Exclusively owns the mutable dataset; every
/// outward-facing accessor returns clones.
pub struct SimEngine {
    data: Dataset,
    rng: StdRng,
    update_count: u64,
    last_updated: String,
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    next_subscriber_id: u64,
}

impl SimEngine {
    /// Engine seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine with a fixed seed, for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let data = generate_initial_data(&mut rng);
        Self {
            data,
            rng,
            update_count: 0,
            last_updated: Utc::now().to_rfc3339(),
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Run one tick against the current wall clock.
    pub fn tick(&mut self) {
        self.tick_at(WallTime::now());
    }

    /// Run one tick against an explicit clock sample. This is the whole
    /// unit of work the production timer schedules; tests call it
    /// directly to advance the simulation without waiting on real time.
    pub fn tick_at(&mut self, now: WallTime) {
        let stamp = Utc::now().to_rfc3339();

        tick_attendance(&mut self.data.sessions, &mut self.rng);
        tick_engagement(&mut self.data.sessions, &mut self.rng);
        tick_feedback(
            &self.data.sessions,
            &self.data.attendees,
            &mut self.data.feedback,
            &mut self.data.next_feedback_id,
            &stamp,
            &mut self.rng,
        );
        tick_status(&mut self.data.sessions, now);
        tick_growth(
            &mut self.data.attendees,
            &self.data.sessions,
            &mut self.data.next_attendee_id,
            &stamp,
            &mut self.rng,
        );

        self.data.refresh_metrics();
        self.update_count += 1;
        self.last_updated = stamp;
        self.notify_all();
    }

    /// Discard the dataset, regenerate from scratch, zero the tick
    /// counter and immediately notify subscribers of the fresh state.
    pub fn reset(&mut self) {
        self.data = generate_initial_data(&mut self.rng);
        self.update_count = 0;
        self.last_updated = Utc::now().to_rfc3339();
        log::info!("simulation reset; dataset regenerated");
        self.notify_all();
    }

    /// Register a snapshot callback. The callback is invoked once
    /// immediately with the current state, then once per tick.
    pub fn subscribe(&mut self, callback: impl Fn(&Snapshot) + Send + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(callback)));

        let snapshot = self.snapshot();
        let (_, cb) = self.subscribers.last().expect("just pushed");
        Self::deliver(id, cb, &snapshot);
        id
    }

    /// Deregister a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify_all(&self) {
        let snapshot = self.snapshot();
        for (id, cb) in &self.subscribers {
            Self::deliver(*id, cb, &snapshot);
        }
    }

    /// A panicking callback is logged and skipped; the remaining
    /// subscribers are still notified and the engine keeps ticking.
    fn deliver(id: SubscriberId, cb: &SubscriberFn, snapshot: &Snapshot) {
        if catch_unwind(AssertUnwindSafe(|| cb(snapshot))).is_err() {
            log::warn!("subscriber {:?} panicked during notification; skipping", id);
        }
    }

    /// Full dataset view, cloned.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sessions: self.data.sessions.clone(),
            speakers: self.data.speakers.clone(),
            attendees: self.data.attendees.clone(),
            feedback: self.data.feedback.clone(),
            metrics: self.data.metrics.clone(),
            last_updated: self.last_updated.clone(),
            update_count: self.update_count,
        }
    }

    pub fn metrics(&self) -> EventMetrics {
        self.data.metrics.clone()
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.data.sessions.clone()
    }

    pub fn speakers(&self) -> Vec<Speaker> {
        self.data.speakers.clone()
    }

    pub fn attendees(&self) -> Vec<Attendee> {
        self.data.attendees.clone()
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.data.feedback.clone()
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Test-only seams used by the integration suite.
    pub fn sessions_mut(&mut self) -> &mut Vec<Session> {
        &mut self.data.sessions
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}
