//! Wall-clock budget for one move request
//!
//! The stop flag is latched: once the deadline has been observed as passed
//! (or a [`StopHandle`] fired) every later check reports out of time until
//! the controller is dropped. The search polls it between sibling moves only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Sleep granularity while holding an answer until the deadline
const WAIT_SLICE: Duration = Duration::from_millis(10);

/// Deadline tracker with a latched stop flag.
#[derive(Debug, Clone)]
pub struct TimeControl {
    start: Instant,
    deadline: Option<Instant>,
    stopped: Arc<AtomicBool>,
}

/// Cloneable handle that stops a running search from another thread.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl TimeControl {
    /// Start the clock now with the given budget.
    pub fn new(budget: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            deadline: start.checked_add(budget),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// A controller that never times out on its own.
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            deadline: None,
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check the clock and latch the flag if the deadline has passed.
    /// Returns true when the search must stop.
    #[inline]
    pub fn check(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stopped.store(true, Ordering::Relaxed);
                return true;
            }
        }
        false
    }

    /// The latched flag, without consulting the clock.
    #[inline]
    pub fn is_out_of_time(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stopped))
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before the deadline (zero once passed, `None` if unlimited).
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Block the calling thread until the deadline has fully elapsed.
    /// Returns early once stopped through a [`StopHandle`].
    pub fn wait_until_deadline(&self) {
        while let Some(left) = self.remaining() {
            // The flag only latches before the deadline on an external stop.
            if left.is_zero() || self.is_out_of_time() {
                return;
            }
            thread::sleep(left.min(WAIT_SLICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_out_of_time() {
        let tc = TimeControl::from_millis(0);
        assert!(!tc.is_out_of_time(), "flag only latches on check");
        assert!(tc.check());
        assert!(tc.is_out_of_time());
    }

    #[test]
    fn test_generous_budget_is_not_out_of_time() {
        let tc = TimeControl::from_millis(60_000);
        assert!(!tc.check());
        assert!(!tc.is_out_of_time());
        assert!(tc.remaining().is_some_and(|d| d > Duration::from_secs(50)));
    }

    #[test]
    fn test_flag_stays_latched() {
        let tc = TimeControl::from_millis(0);
        assert!(tc.check());
        for _ in 0..10 {
            assert!(tc.check());
            assert!(tc.is_out_of_time());
        }
    }

    #[test]
    fn test_stop_handle_latches_flag() {
        let tc = TimeControl::unlimited();
        assert!(!tc.check());
        tc.stop_handle().stop();
        assert!(tc.is_out_of_time());
        assert!(tc.check());
    }

    #[test]
    fn test_stopped_wait_returns_before_deadline() {
        let tc = TimeControl::from_millis(60_000);
        let handle = tc.stop_handle();
        let waiter = std::thread::spawn(move || {
            let start = Instant::now();
            tc.wait_until_deadline();
            start.elapsed()
        });
        std::thread::sleep(Duration::from_millis(20));
        handle.stop();
        let waited = waiter.join().unwrap();
        assert!(waited < Duration::from_secs(5), "waited {waited:?}");
    }

    #[test]
    fn test_unlimited_never_expires() {
        let tc = TimeControl::unlimited();
        assert!(!tc.check());
        assert_eq!(tc.remaining(), None);
        tc.wait_until_deadline();
    }

    #[test]
    fn test_wait_until_deadline_blocks() {
        let tc = TimeControl::from_millis(40);
        tc.wait_until_deadline();
        assert!(tc.elapsed() >= Duration::from_millis(40));
        assert!(tc.check());
    }
}
