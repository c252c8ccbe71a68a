//=========================================================================
// Interval
//=========================================================================
//
// Thread-backed periodic task, the native counterpart of `setInterval`.
//
// Loop:
//   select! {
//     ticker  → run task
//     stop_rx → exit      (sender dropped by stop())
//   }
//
// The ticker channel holds at most one pending tick, so a slow task
// coalesces missed ticks instead of queueing a burst.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};
use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use super::{PeriodicTask, ScheduleError};

//=== Interval ============================================================

/// Runs a closure every `period` on a dedicated thread until stopped.
///
/// Dropping the handle stops the task and joins the thread.
///
/// ```no_run
/// use std::time::Duration;
/// use serpent_engine::core::schedule::{Interval, PeriodicTask};
///
/// let mut interval = Interval::start(Duration::from_millis(100), || {
///     println!("tick");
/// })?;
///
/// std::thread::sleep(Duration::from_secs(1));
/// interval.stop();
/// # Ok::<(), serpent_engine::core::schedule::ScheduleError>(())
/// ```
pub struct Interval {
    period: Duration,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Interval {
    /// Spawns the timer thread and starts ticking.
    ///
    /// The first invocation happens one `period` after the call.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::ZeroPeriod`] for a zero period,
    /// [`ScheduleError::Spawn`] if the thread cannot be created.
    pub fn start<F>(period: Duration, mut task: F) -> Result<Self, ScheduleError>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(ScheduleError::ZeroPeriod);
        }

        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("serpent-tick".into())
            .spawn(move || {
                let ticker = tick(period);
                debug!(target: "schedule", "Timer thread started ({:?} period)", period);

                loop {
                    select! {
                        recv(ticker) -> _ => task(),
                        recv(stop_rx) -> _ => break,
                    }
                }

                debug!(target: "schedule", "Timer thread exiting");
            })?;

        info!(target: "schedule", "Interval started ({:?} period)", period);

        Ok(Self {
            period,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }
}

impl PeriodicTask for Interval {
    fn period(&self) -> Duration {
        self.period
    }

    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn stop(&mut self) {
        // Disconnecting the stop channel wakes the select! immediately.
        drop(self.stop_tx.take());

        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(()) => info!(target: "schedule", "Interval stopped"),
                Err(e) => error!(target: "schedule", "Timer thread panicked: {:?}", e),
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
