//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit keyboard events into raw DOM-style key codes.
//
// Architecture:
//   Winit KeyEvent → InputProcessor → i32 key code → KeyCell
//
// Only presses count (auto-repeat included, as a browser keydown would).
// Releases and unmapped keys (F-keys, numpad, media keys) yield None.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::key_code::{
    ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, BACKSPACE, DELETE, DIGIT_0, ENTER, ESCAPE,
    KEY_A, SPACE, TAB,
};

//=== InputProcessor ======================================================

/// Filters winit key events down to key codes worth storing.
pub(crate) struct InputProcessor {
    presses: u64,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self { presses: 0 }
    }

    /// Returns the key code for a press of a mapped key.
    pub(crate) fn process_key_event(&mut self, key_event: &KeyEvent) -> Option<i32> {
        if key_event.state != ElementState::Pressed {
            return None;
        }

        let code = match key_event.physical_key {
            PhysicalKey::Code(code) => dom_key_code(code)?,
            _ => return None,
        };

        self.presses += 1;
        Some(code)
    }

    /// Mapped presses seen so far.
    pub(crate) fn presses(&self) -> u64 {
        self.presses
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps a physical winit key to its legacy DOM `keyCode`.
///
/// Covers arrows, A-Z, 0-9 and common editing keys. Anything else
/// returns `None`.
pub(crate) fn dom_key_code(code: WinitKeyCode) -> Option<i32> {
    use WinitKeyCode::*;
    let mapped = match code {
        //--- Arrows -----------------------------------------------------------

        ArrowLeft => ARROW_LEFT,
        ArrowUp => ARROW_UP,
        ArrowRight => ARROW_RIGHT,
        ArrowDown => ARROW_DOWN,

        //--- Digits -----------------------------------------------------------

        Digit0 => DIGIT_0,
        Digit1 => DIGIT_0 + 1,
        Digit2 => DIGIT_0 + 2,
        Digit3 => DIGIT_0 + 3,
        Digit4 => DIGIT_0 + 4,
        Digit5 => DIGIT_0 + 5,
        Digit6 => DIGIT_0 + 6,
        Digit7 => DIGIT_0 + 7,
        Digit8 => DIGIT_0 + 8,
        Digit9 => DIGIT_0 + 9,

        //--- Letters ----------------------------------------------------------

        KeyA => KEY_A,
        KeyB => KEY_A + 1,
        KeyC => KEY_A + 2,
        KeyD => KEY_A + 3,
        KeyE => KEY_A + 4,
        KeyF => KEY_A + 5,
        KeyG => KEY_A + 6,
        KeyH => KEY_A + 7,
        KeyI => KEY_A + 8,
        KeyJ => KEY_A + 9,
        KeyK => KEY_A + 10,
        KeyL => KEY_A + 11,
        KeyM => KEY_A + 12,
        KeyN => KEY_A + 13,
        KeyO => KEY_A + 14,
        KeyP => KEY_A + 15,
        KeyQ => KEY_A + 16,
        KeyR => KEY_A + 17,
        KeyS => KEY_A + 18,
        KeyT => KEY_A + 19,
        KeyU => KEY_A + 20,
        KeyV => KEY_A + 21,
        KeyW => KEY_A + 22,
        KeyX => KEY_A + 23,
        KeyY => KEY_A + 24,
        KeyZ => KEY_A + 25,

        //--- Special ----------------------------------------------------------

        Space => SPACE,
        Enter => ENTER,
        Escape => ESCAPE,
        Tab => TAB,
        Backspace => BACKSPACE,
        Delete => DELETE,

        //--- Unmapped ---------------------------------------------------------

        _ => return None,
    };
    Some(mapped)
}

//=========================================================================
// Unit Tests
//=========================================================================
