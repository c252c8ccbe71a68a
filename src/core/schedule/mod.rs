//=========================================================================
// Scheduling
//=========================================================================
//
// Periodic task handles with explicit start/stop control.
//
// Architecture:
// ```text
//   Interval     ── dedicated thread, crossbeam `tick` + stop channel
//   ManualClock  ── caller-driven fake clock for deterministic tests
// ```
//
// Both run a single task serially: an invocation never overlaps the
// previous one. Neither knows anything about the simulation; the task
// is an arbitrary closure.
//
//=========================================================================

//=== Module Declarations =================================================

mod interval;
mod manual;

//=== Public API ==========================================================

pub use interval::Interval;
pub use manual::ManualClock;

//=== External Dependencies ===============================================

use std::time::Duration;

use thiserror::Error;

//=== ScheduleError =======================================================

/// Failure to start a periodic task.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A zero period would spin without pause.
    #[error("tick period must be positive")]
    ZeroPeriod,

    /// The OS refused to create the timer thread.
    #[error("failed to spawn timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

//=== PeriodicTask ========================================================

/// Control surface shared by all periodic task handles.
pub trait PeriodicTask {
    /// Time between two invocations.
    fn period(&self) -> Duration;

    /// Returns `true` until the task has been stopped.
    fn is_running(&self) -> bool;

    /// Stops the task. No invocation starts after this returns.
    /// Stopping twice is a no-op.
    fn stop(&mut self);
}
