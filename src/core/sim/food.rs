//=========================================================================
// Food Placement
//=========================================================================
//
// Picks a uniformly random free cell for the next piece of food.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use super::board::{Board, Cell};
use super::snake::Snake;

//=== FoodSpawner =========================================================

/// Seedable source of food positions.
#[derive(Debug, Clone)]
pub(crate) struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Returns a random cell not covered by `snake`, or `None` when the
    /// snake fills the board.
    pub(crate) fn spawn(&mut self, board: Board, snake: &Snake) -> Option<Cell> {
        if snake.len() >= board.area() {
            return None;
        }
        board
            .iter()
            .filter(|&cell| !snake.occupies(cell))
            .choose(&mut self.rng)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Direction;

    #[test]
    fn food_never_lands_on_the_snake() {
        let board = Board::new(4);
        let snake = Snake::spawn(board, board.center(), Direction::Up);
        let mut spawner = FoodSpawner::new(Some(1));

        for _ in 0..200 {
            let cell = spawner.spawn(board, &snake).expect("board has free cells");
            assert!(!snake.occupies(cell));
            assert!(cell.x < 4 && cell.y < 4);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let board = Board::new(40);
        let snake = Snake::spawn(board, board.center(), Direction::Up);
        let mut a = FoodSpawner::new(Some(42));
        let mut b = FoodSpawner::new(Some(42));

        for _ in 0..20 {
            assert_eq!(a.spawn(board, &snake), b.spawn(board, &snake));
        }
    }

    #[test]
    fn full_board_yields_none() {
        let board = Board::new(3);
        let mut snake = Snake::spawn(board, board.center(), Direction::Up);
        for cell in board.iter() {
            if !snake.occupies(cell) {
                snake.push_head(cell);
            }
        }
        assert_eq!(snake.len(), board.area());

        let mut spawner = FoodSpawner::new(Some(0));
        assert_eq!(spawner.spawn(board, &snake), None);
    }
}
