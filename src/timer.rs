use crate::clock::{Clock, MonotonicClock};
use crate::error::TimerError;
use std::time::Duration;

/// Accumulating stopwatch
///
/// A `Timer` is either stopped (the initial state) or running. [`start`](Timer::start) opens a
/// timing interval, [`stop`](Timer::stop) closes it and adds its length to the accumulated
/// [`elapsed`](Timer::elapsed) time. Several start/stop cycles accumulate, so one timer can sum
/// non-contiguous intervals (for ex. per-iteration work, excluding setup and teardown).
///
/// Calling `start` on a running timer, or `stop` on a stopped one, returns an error and leaves
/// the timer untouched.
///
/// Time is read from the [`Clock`] given at construction, [`MonotonicClock`] by default.
///
/// ## Example
///
/// ```rust
/// use pcap_timing::{ManualClock, Timer, TimerError};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut timer = Timer::with_clock(clock.clone());
///
/// timer.start()?;
/// clock.advance(Duration::from_millis(10));
/// timer.stop()?;
///
/// clock.advance(Duration::from_secs(1)); // not measured
///
/// timer.time(|| clock.advance(Duration::from_millis(5)))?;
/// assert_eq!(timer.elapsed(), Duration::from_millis(15));
/// assert_eq!(timer.stop(), Err(TimerError::NotRunning));
/// # Ok::<(), TimerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Timer<C = MonotonicClock> {
    clock: C,
    elapsed: Duration,
    started_at: Option<Duration>,
}

impl Timer<MonotonicClock> {
    /// Creates a stopped timer reading time from a new [`MonotonicClock`].
    pub fn new() -> Timer<MonotonicClock> {
        Timer::with_clock(MonotonicClock::new())
    }
}

impl Default for Timer<MonotonicClock> {
    fn default() -> Self {
        Timer::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Creates a stopped timer reading time from `clock`.
    pub fn with_clock(clock: C) -> Timer<C> {
        Timer {
            clock,
            elapsed: Duration::ZERO,
            started_at: None,
        }
    }

    /// Opens a timing interval.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.started_at.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.started_at = Some(self.clock.now());
        Ok(())
    }

    /// Closes the current timing interval, and adds its length to the accumulated time.
    ///
    /// A clock reading older than the start of the interval counts as an empty interval.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        let started_at = self.started_at.ok_or(TimerError::NotRunning)?;
        let now = self.clock.now();
        self.elapsed += now.saturating_sub(started_at);
        self.started_at = None;
        Ok(())
    }

    /// Sets the accumulated time back to zero.
    ///
    /// Only closed intervals are discarded: if the timer is running, it keeps running, and the
    /// next `stop` adds the whole open interval, measured from its original start.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Returns true if a timing interval is open
    #[inline]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Accumulated time of all closed intervals
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The clock this timer reads from
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Starts the timer, and returns a guard that stops it when dropped.
    ///
    /// The interval is closed exactly once, whichever way the scope is left (including
    /// unwinding).
    pub fn scoped(&mut self) -> Result<TimerGuard<'_, C>, TimerError> {
        self.start()?;
        Ok(TimerGuard { timer: Some(self) })
    }

    /// Runs `f` inside a timing interval, and returns its result.
    pub fn time<F, T>(&mut self, f: F) -> Result<T, TimerError>
    where
        F: FnOnce() -> T,
    {
        let _guard = self.scoped()?;
        Ok(f())
    }
}

/// Open timing interval of a [`Timer`], closed when dropped
///
/// Returned by [`Timer::scoped`].
#[must_use = "the interval is closed as soon as the guard is dropped"]
pub struct TimerGuard<'a, C: Clock> {
    timer: Option<&'a mut Timer<C>>,
}

impl<'a, C: Clock> TimerGuard<'a, C> {
    /// Closes the interval now, and returns the accumulated time.
    pub fn finish(mut self) -> Duration {
        match self.timer.take() {
            Some(timer) => {
                close(timer);
                timer.elapsed()
            }
            None => Duration::ZERO,
        }
    }
}

impl<'a, C: Clock> Drop for TimerGuard<'a, C> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            close(timer);
        }
    }
}

fn close<C: Clock>(timer: &mut Timer<C>) {
    // the guard holds the only reference to a timer it started, so it is still running
    debug_assert!(timer.is_running());
    let _ = timer.stop();
}
