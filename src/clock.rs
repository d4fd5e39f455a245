use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time readings
///
/// A reading is the duration elapsed since an arbitrary origin chosen by the clock. Only the
/// difference between two readings of the same clock is meaningful.
///
/// Any `Fn() -> Duration` is a clock, so a closure can be injected directly:
///
/// ```rust
/// use pcap_timing::Timer;
/// use std::time::Duration;
///
/// let mut timer = Timer::with_clock(|| Duration::from_secs(3));
/// timer.start().unwrap();
/// timer.stop().unwrap();
/// assert_eq!(timer.elapsed(), Duration::ZERO);
/// ```
pub trait Clock {
    /// Current reading. Must never be smaller than a previous reading.
    fn now(&self) -> Duration;
}

impl<F> Clock for F
where
    F: Fn() -> Duration,
{
    #[inline]
    fn now(&self) -> Duration {
        self()
    }
}

/// Default clock, backed by `std::time::Instant`
///
/// Readings are relative to the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same reading, so a test can keep one handle and give another to a
/// [`Timer`](crate::Timer).
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> ManualClock {
        ManualClock::default()
    }

    /// Move the reading forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.reading.set(self.reading.get() + delta);
    }

    /// Set the reading. Setting it backwards breaks the monotonic contract, and is only
    /// useful to test how consumers cope with a misbehaving clock.
    pub fn set(&self, reading: Duration) {
        self.reading.set(reading);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.reading.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_reading() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        assert_eq!(clock.now(), Duration::ZERO);
        handle.advance(Duration::from_millis(5));
        handle.advance(Duration::from_millis(7));
        assert_eq!(clock.now(), Duration::from_millis(12));
        handle.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..1000 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_closure_clock() {
        let clock = || Duration::from_micros(42);
        assert_eq!(clock.now(), Duration::from_micros(42));
    }

    #[test]
    fn test_closure_over_borrowed_clock() {
        let manual = ManualClock::new();
        let clock = || manual.now();
        manual.advance(Duration::from_millis(3));
        assert_eq!(clock.now(), Duration::from_millis(3));
    }
}
