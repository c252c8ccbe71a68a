//=========================================================================
// Board Geometry
//=========================================================================
//
// Square toroidal grid of cells. Stepping off any edge re-enters on the
// opposite edge.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::Direction;

//=== Cell ================================================================

/// A board coordinate in cells, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

//=== Board ===============================================================

/// Edge length of a square board, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Board {
    cells: u32,
}

impl Board {
    pub(crate) fn new(cells: u32) -> Self {
        debug_assert!(cells > 0);
        Self { cells }
    }

    pub(crate) fn cells(self) -> u32 {
        self.cells
    }

    pub(crate) fn area(self) -> usize {
        self.cells as usize * self.cells as usize
    }

    pub(crate) fn center(self) -> Cell {
        Cell::new(self.cells / 2, self.cells / 2)
    }

    /// Moves `cell` one step in `direction`, wrapping at the edges.
    pub(crate) fn step(self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.wrap(cell.x, dx), self.wrap(cell.y, dy))
    }

    /// All cells, row by row.
    pub(crate) fn iter(self) -> impl Iterator<Item = Cell> {
        let n = self.cells;
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
    }

    #[inline]
    fn wrap(self, coord: u32, delta: i32) -> u32 {
        let n = i64::from(self.cells);
        (i64::from(coord) + i64::from(delta)).rem_euclid(n) as u32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
