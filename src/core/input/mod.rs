//=========================================================================
// Input
//
// Everything between a host keydown and the simulation's heading.
//
// Architecture:
// ```text
//   Host keydown ──i32──> KeyCell ──get()──> tick(key) ──> Direction
// ```
//
// Responsibilities:
// - Name the raw key codes the host delivers (`key_code`)
// - Hold the latest code in a last-write-wins slot (`KeyCell`)
// - Translate codes into board headings (`Direction`)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod key_code;
mod direction;
mod key_cell;

//=== Public API ==========================================================

pub use direction::Direction;
pub use key_cell::KeyCell;
pub use key_code::DEFAULT_KEY_CODE;
