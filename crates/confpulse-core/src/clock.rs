//! Wall-clock sampling for status transitions.

use chrono::{Local, Timelike};

/// An hour/minute sample of the wall clock. Session scheduling works at
/// minute granularity, so this is all a tick needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u32,
    pub minute: u32,
}

impl WallTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Sample the local wall clock.
    pub fn now() -> Self {
        let now = Local::now();
        Self { hour: now.hour(), minute: now.minute() }
    }

    /// Minutes since midnight.
    pub fn in_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_since_midnight() {
        assert_eq!(WallTime::new(0, 0).in_minutes(), 0);
        assert_eq!(WallTime::new(9, 30).in_minutes(), 570);
        assert_eq!(WallTime::new(23, 59).in_minutes(), 1439);
    }
}
