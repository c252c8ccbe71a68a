//=========================================================================
// Simulation
//=========================================================================
//
// Discrete-time snake game driven by external ticks.
//
// Architecture:
//   SimulationEngine
//     ├─ Board         (toroidal cell grid)
//     ├─ Snake         (body + heading)
//     ├─ FoodSpawner   (seedable RNG, free cells only)
//     └─ Box<dyn Surface>  (bound at creation, redrawn every tick)
//
// The simulation has no clock of its own. Whoever owns it calls `tick`
// at a fixed period with the latest key code.
//
//=========================================================================

//=== Module Declarations =================================================

mod board;
mod config;
mod engine;
mod food;
mod snake;

//=== Public API ==========================================================

pub use board::Cell;
pub use config::{GameConfig, MIN_CELLS};
pub use engine::{Collision, EngineState, FrameReport, SimulationEngine};
