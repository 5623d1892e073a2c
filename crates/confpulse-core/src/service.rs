//! Simulator service - timer-driven lifecycle around [`SimEngine`].
//!
//! The service owns the engine behind a mutex and runs a background
//! thread that calls `tick()` on a fixed interval. All the mutation
//! logic stays synchronous inside the engine; the thread is only a
//! scheduler. Start/stop are idempotent no-ops with a warning when
//! called in the wrong state.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use crate::engine::{SimEngine, SubscriberId};
use crate::model::{Attendee, EventMetrics, Feedback, Session, Snapshot, Speaker};

/// Tick cadence used when the caller has no opinion.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// Signals the ticker thread to exit between ticks.
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

struct Ticker {
    signal: Arc<StopSignal>,
    handle: JoinHandle<()>,
}

/// A constructible, disposable simulation service. Create one per
/// consumer tree (or per test); there is no process-wide singleton.
pub struct SimulatorService {
    engine: Arc<Mutex<SimEngine>>,
    ticker: Option<Ticker>,
}

impl SimulatorService {
    pub fn new() -> Self {
        Self::from_engine(SimEngine::new())
    }

    /// Service over a deterministically seeded engine.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_engine(SimEngine::with_seed(seed))
    }

    fn from_engine(engine: SimEngine) -> Self {
        Self { engine: Arc::new(Mutex::new(engine)), ticker: None }
    }

    /// Begin periodic ticking, typically at [`DEFAULT_TICK_INTERVAL`].
    /// Calling start on a running service is a logged no-op, not an
    /// error.
    pub fn start(&mut self, interval: Duration) {
        if self.ticker.is_some() {
            log::warn!("simulator already running; start ignored");
            return;
        }
        log::info!("simulator starting, interval {:?}", interval);

        let signal = Arc::new(StopSignal { stopped: Mutex::new(false), wake: Condvar::new() });
        let thread_signal = signal.clone();
        let engine = self.engine.clone();

        let handle = std::thread::spawn(move || loop {
            let mut stopped = thread_signal.stopped.lock();
            if *stopped {
                break;
            }
            thread_signal.wake.wait_for(&mut stopped, interval);
            if *stopped {
                break;
            }
            drop(stopped);
            engine.lock().tick();
        });

        self.ticker = Some(Ticker { signal, handle });
    }

    /// Halt periodic ticking. Only future ticks are cancelled; there is
    /// never a tick in flight when the lock is free because tick work is
    /// synchronous. Stopping a stopped service is a logged no-op.
    pub fn stop(&mut self) {
        match self.ticker.take() {
            Some(ticker) => {
                *ticker.signal.stopped.lock() = true;
                ticker.signal.wake.notify_all();
                if ticker.handle.join().is_err() {
                    log::warn!("ticker thread terminated abnormally");
                }
                log::info!("simulator stopped");
            }
            None => log::warn!("simulator not running; stop ignored"),
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stop ticking, regenerate the dataset and immediately push the
    /// fresh snapshot to subscribers.
    pub fn reset(&mut self) {
        if self.ticker.is_some() {
            self.stop();
        }
        self.engine.lock().reset();
    }

    /// Run one tick synchronously, without the timer. Test harnesses use
    /// this to advance simulated time on demand.
    pub fn tick_now(&self) {
        self.engine.lock().tick();
    }

    /// Register a snapshot callback; delivered once immediately, then
    /// per tick. Callbacks run on the tick thread with the engine lock
    /// held and must not call back into this service.
    pub fn subscribe(&self, callback: impl Fn(&Snapshot) + Send + 'static) -> SubscriberId {
        self.engine.lock().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.engine.lock().unsubscribe(id)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.lock().snapshot()
    }

    pub fn metrics(&self) -> EventMetrics {
        self.engine.lock().metrics()
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.engine.lock().sessions()
    }

    pub fn speakers(&self) -> Vec<Speaker> {
        self.engine.lock().speakers()
    }

    pub fn attendees(&self) -> Vec<Attendee> {
        self.engine.lock().attendees()
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.engine.lock().feedback()
    }
}

impl Default for SimulatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SimulatorService {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            *ticker.signal.stopped.lock() = true;
            ticker.signal.wake.notify_all();
            let _ = ticker.handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_start_and_stop_are_no_ops() {
        let mut service = SimulatorService::with_seed(1);
        service.start(Duration::from_secs(60));
        service.start(Duration::from_secs(60));
        assert!(service.is_running());
        service.stop();
        service.stop();
        assert!(!service.is_running());
    }

    #[test]
    fn tick_now_advances_without_timer() {
        let service = SimulatorService::with_seed(9);
        service.tick_now();
        service.tick_now();
        assert_eq!(service.snapshot().update_count, 2);
    }

    #[test]
    fn ticker_advances_update_count() {
        let mut service = SimulatorService::with_seed(2);
        service.start(Duration::from_millis(20));
        std::thread::sleep(Duration::from_millis(300));
        service.stop();
        let count = service.snapshot().update_count;
        assert!(count >= 5, "expected several ticks, got {count}");
    }

    #[test]
    fn reset_stops_ticker_and_zeroes_count() {
        let mut service = SimulatorService::with_seed(3);
        service.start(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(100));
        service.reset();
        assert!(!service.is_running());
        assert_eq!(service.snapshot().update_count, 0);
    }

    #[test]
    fn drop_while_running_joins_cleanly() {
        let mut service = SimulatorService::with_seed(4);
        service.start(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(50));
        drop(service);
    }
}
