//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use serpent_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Input
pub use crate::core::input::{Direction, KeyCell};

// Rendering
pub use crate::core::render::{BindingError, Canvas, Color, Surface, SurfaceRegistry};

// Scheduling
pub use crate::core::schedule::{Interval, ManualClock, PeriodicTask, ScheduleError};

// Simulation
pub use crate::core::sim::{Cell, EngineState, FrameReport, GameConfig, SimulationEngine};
