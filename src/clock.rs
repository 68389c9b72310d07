//! Clock adapters for time operations.
//!
//! The admission controller reads time through the [`Clock`] trait so
//! decisions are deterministic under test. Production code uses
//! [`SystemClock`]; tests (including consumers' tests) can drive a
//! [`ManualClock`].

use chrono::Utc;
use parking_lot::Mutex;

/// Millisecond-precision time source.
pub trait Clock: Send + Sync {
    /// Current moment as milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// System clock implementation reading the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Controllable clock for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: Mutex<i64>,
}

impl ManualClock {
    /// Create a clock frozen at `start_millis`.
    pub fn new(start_millis: i64) -> Self {
        Self {
            millis: Mutex::new(start_millis),
        }
    }

    /// Jump the clock to an absolute moment.
    pub fn set(&self, millis: i64) {
        *self.millis.lock() = millis;
    }

    /// Move the clock forward by `delta_millis`.
    pub fn advance(&self, delta_millis: i64) {
        *self.millis.lock() += delta_millis;
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        *self.millis.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let t1 = clock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let t2 = clock.now_millis();

        assert!(t2 > t1);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_millis(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_millis(), 1_500);

        clock.set(10);
        assert_eq!(clock.now_millis(), 10);
    }
}
