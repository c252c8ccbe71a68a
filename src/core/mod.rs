//=========================================================================
// Core Systems
//
// Platform-independent heart of the engine.
//
// Responsibilities:
// - Carry key presses from the host to the simulation (`input`)
// - Resolve and own drawable surfaces (`render`)
// - Drive work at a fixed period with start/stop control (`schedule`)
// - Run the snake simulation one tick at a time (`sim`)
//
// Notes:
// Nothing in here touches the OS. The winit host lives in `platform`
// and only talks to core through `KeyCell` and plain data.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod input;
pub mod render;
pub mod schedule;
pub mod sim;

//=========================================================================
// Wiring Tests
//
// Host timer + key cell + simulation, driven by a fake clock.
//=========================================================================
