//=========================================================================
// Manual Clock
//=========================================================================
//
// Fake periodic timer for tests: time only moves when the caller says so.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::PeriodicTask;

//=== ManualClock =========================================================

/// Caller-driven periodic task.
///
/// [`advance`](ManualClock::advance) fires the task once for every whole
/// period that has elapsed, carrying the remainder to the next call.
///
/// The task may borrow from the caller's stack, so state can be inspected
/// once the clock is dropped:
///
/// ```
/// use std::time::Duration;
/// use serpent_engine::core::schedule::ManualClock;
///
/// let mut ticks = 0;
/// {
///     let mut clock = ManualClock::start(Duration::from_millis(100), || ticks += 1);
///     clock.advance(Duration::from_millis(250));
///     clock.advance(Duration::from_millis(50));
/// }
/// assert_eq!(ticks, 3);
/// ```
pub struct ManualClock<F: FnMut()> {
    period: Duration,
    task: F,
    pending: Duration,
    fired: u64,
    running: bool,
}

impl<F: FnMut()> ManualClock<F> {
    /// Creates a running clock at time zero.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn start(period: Duration, task: F) -> Self {
        assert!(!period.is_zero(), "Period must be positive");
        Self {
            period,
            task,
            pending: Duration::ZERO,
            fired: 0,
            running: true,
        }
    }

    /// Moves time forward by `by`, firing every period that completes.
    ///
    /// Returns how many times the task ran. A stopped clock never fires.
    pub fn advance(&mut self, by: Duration) -> u64 {
        if !self.running {
            return 0;
        }

        self.pending += by;
        let mut fired = 0;
        while self.pending >= self.period {
            self.pending -= self.period;
            (self.task)();
            fired += 1;
        }

        self.fired += fired;
        fired
    }

    /// Fires exactly one period.
    pub fn tick(&mut self) -> u64 {
        self.advance(self.period)
    }

    /// Total invocations so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

impl<F: FnMut()> PeriodicTask for ManualClock<F> {
    fn period(&self) -> Duration {
        self.period
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn stop(&mut self) {
        self.running = false;
        self.pending = Duration::ZERO;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
