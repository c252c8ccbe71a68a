//=========================================================================
// Snake
//=========================================================================
//
// Ordered body (head first) plus current heading.
//
// A step is split in two so the caller can decide about growth between
// the halves:
//   push_head(next)  →  [eat? keep tail : pop_tail()]
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

//=== Internal Dependencies ===============================================

use super::board::{Board, Cell};
use crate::core::input::Direction;

/// Length of a fresh snake.
pub(crate) const INITIAL_LENGTH: usize = 3;

//=== Snake ===============================================================

#[derive(Debug, Clone)]
pub(crate) struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// Lays out a fresh snake with its head on `head`, body trailing
    /// behind it opposite to `direction`.
    pub(crate) fn spawn(board: Board, head: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_LENGTH);
        let mut cell = head;
        for _ in 0..INITIAL_LENGTH {
            body.push_back(cell);
            cell = board.step(cell, direction.opposite());
        }
        Self { body, direction }
    }

    /// Builds a snake from explicit cells, head first.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "snake needs a head");
        Self {
            body: cells.iter().copied().collect(),
            direction,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        // Body is never empty: spawn() fills it and pop_tail() keeps the head.
        self.body[0]
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// The cell the head enters on the next step.
    pub(crate) fn next_head(&self, board: Board) -> Cell {
        board.step(self.head(), self.direction)
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Releases the tail cell. The head is never removed.
    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns `true` if the head shares a cell with any other segment.
    pub(crate) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
