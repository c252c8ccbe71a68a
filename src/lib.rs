//=========================================================================
// Serpent Engine - Library Root
//
// A tick-driven snake simulation with a native host around it.
//
// Responsibilities:
// - Expose the runtime facade (`EngineBuilder`, `Engine`)
// - Expose the platform-independent core (`core`) for embedding and tests
// - Keep the winit host (`platform`) private
//
// Typical usage:
// ```no_run
// use serpent_engine::EngineBuilder;
//
// fn main() -> Result<(), serpent_engine::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the simulation, surfaces, key cell and timers. Hosts other
// than the bundled window can drive `SimulationEngine` directly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
pub use platform::PlatformError;
