//=========================================================================
// Raw Key Codes
//=========================================================================
//
// Integer key codes as delivered by the host input collaborator.
//
// The values follow the legacy DOM `KeyboardEvent.keyCode` numbering so
// that a browser host and the native winit host produce the same stream.
// Only the arrow keys carry meaning for the simulation; every other code
// is accepted and ignored.
//
//=========================================================================

//=== Arrow Keys ==========================================================

/// Left arrow.
pub const ARROW_LEFT: i32 = 37;

/// Up arrow.
pub const ARROW_UP: i32 = 38;

/// Right arrow.
pub const ARROW_RIGHT: i32 = 39;

/// Down arrow.
pub const ARROW_DOWN: i32 = 40;

//=== Defaults ============================================================

/// Key code observed before the first key press.
pub const DEFAULT_KEY_CODE: i32 = ARROW_LEFT;

//=== Other Keys ==========================================================
//
// Emitted by the native platform so that non-arrow keys still overwrite
// the key cell, exactly as a browser keydown would.
//
pub const BACKSPACE: i32 = 8;
pub const TAB: i32 = 9;
pub const ENTER: i32 = 13;
pub const ESCAPE: i32 = 27;
pub const SPACE: i32 = 32;
pub const DELETE: i32 = 46;

/// `0` on the number row; `1`..`9` follow consecutively.
pub const DIGIT_0: i32 = 48;

/// `A`; `B`..`Z` follow consecutively.
pub const KEY_A: i32 = 65;

//=========================================================================
// Unit Tests
//=========================================================================
