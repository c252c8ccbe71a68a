//=========================================================================
// Game Configuration
//=========================================================================
//
// Board geometry, randomness and rule switches for one simulation.
//
// Defaults reproduce the classic browser game: a 400px board of 10px
// squares (40×40 cells), random food placement, reversal allowed.
//
//=========================================================================

/// Narrowest board a length-3 snake fits on.
pub const MIN_CELLS: u32 = 3;

//=== GameConfig ==========================================================

/// Settings consumed by [`SimulationEngine`](super::SimulationEngine).
///
/// # Default Values
///
/// - **grid_size**: 400 px
/// - **square_size**: 10 px
/// - **seed**: `None` (entropy)
/// - **guard_reversal**: `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board edge length in pixels.
    pub grid_size: u32,

    /// Cell edge length in pixels.
    pub square_size: u32,

    /// Seed for food placement. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Ignore key presses that would turn the snake straight back.
    pub guard_reversal: bool,
}

impl GameConfig {
    /// Sets board and cell size in pixels.
    ///
    /// # Panics
    ///
    /// Panics if either size is zero, if `square_size` does not divide
    /// `grid_size`, or if the board is narrower than 3 cells.
    pub fn with_board(mut self, grid_size: u32, square_size: u32) -> Self {
        assert!(square_size > 0, "Square size must be positive");
        assert!(
            grid_size % square_size == 0,
            "Grid size {} must be a multiple of square size {}",
            grid_size,
            square_size
        );
        assert!(
            grid_size / square_size >= MIN_CELLS,
            "Board must be at least 3 cells wide, got {}",
            grid_size / square_size
        );
        self.grid_size = grid_size;
        self.square_size = square_size;
        self
    }

    /// Fixes the food placement seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the reversal guard.
    pub fn with_reversal_guard(mut self, enabled: bool) -> Self {
        self.guard_reversal = enabled;
        self
    }

    /// Number of cells along each board edge.
    ///
    /// # Panics
    ///
    /// Panics if `square_size` is zero. Use [`checked_cells`](Self::checked_cells)
    /// for configs not built through [`with_board`](Self::with_board).
    #[inline]
    pub fn cells(&self) -> u32 {
        self.grid_size / self.square_size
    }

    /// Number of cells along each board edge, or `None` if the geometry
    /// does not form a board: zero square size, a grid that is not a whole
    /// number of squares, or fewer than [`MIN_CELLS`] cells.
    pub fn checked_cells(&self) -> Option<u32> {
        if self.square_size == 0 || self.grid_size % self.square_size != 0 {
            return None;
        }
        let cells = self.grid_size / self.square_size;
        (cells >= MIN_CELLS).then_some(cells)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 400,
            square_size: 10,
            seed: None,
            guard_reversal: false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
