//=========================================================================
// Key Cell
//=========================================================================
//
// Single-slot shared cell holding the most recently pressed key code.
//
// Architecture:
//   Platform (keydown) ──set()──>  KeyCell  ──get()──>  tick task
//
// Semantics:
// - Last write wins: several presses between two ticks collapse into
//   the newest one. There is no queue and no history.
// - A read racing with a write sees either value; the next tick sees
//   the newer one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::key_code::DEFAULT_KEY_CODE;

//=== KeyCell =============================================================

/// Cloneable handle to a shared last-key slot.
///
/// Clones observe the same slot, so the writer half can be handed to the
/// platform while the reader half travels with the tick task.
///
/// ```
/// use serpent_engine::core::input::KeyCell;
///
/// let keys = KeyCell::new(37);
/// let writer = keys.clone();
///
/// writer.set(38);
/// writer.set(40);
/// assert_eq!(keys.get(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct KeyCell {
    slot: Arc<AtomicI32>,
}

impl KeyCell {
    /// Creates a cell holding `initial` until the first write.
    pub fn new(initial: i32) -> Self {
        Self {
            slot: Arc::new(AtomicI32::new(initial)),
        }
    }

    /// Overwrites the slot with `code`.
    #[inline]
    pub fn set(&self, code: i32) {
        self.slot.store(code, Ordering::Relaxed);
    }

    /// Returns the latest written code.
    #[inline]
    pub fn get(&self) -> i32 {
        self.slot.load(Ordering::Relaxed)
    }
}

impl Default for KeyCell {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_CODE)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn default_holds_left_arrow() {
        assert_eq!(KeyCell::default().get(), 37);
    }

    #[test]
    fn last_write_wins() {
        let keys = KeyCell::new(37);
        keys.set(38);
        keys.set(39);
        keys.set(999);
        assert_eq!(keys.get(), 999);
    }

    #[test]
    fn clones_share_the_slot() {
        let reader = KeyCell::new(37);
        let writer = reader.clone();

        writer.set(40);
        assert_eq!(reader.get(), 40);
    }

    #[test]
    fn writes_from_another_thread_become_visible() {
        let reader = KeyCell::new(37);
        let writer = reader.clone();

        thread::spawn(move || writer.set(39))
            .join()
            .expect("writer thread panicked");

        assert_eq!(reader.get(), 39);
    }
}
