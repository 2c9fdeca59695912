use thiserror::Error;

use super::grid::Cell;

/// Errors raised while building a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("grid dimensions {width}x{height} exceed the addressable range")]
    GridTooLarge { width: usize, height: usize },
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("snake body must contain at least one cell")]
    EmptyBody,
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),
    #[error("cell {0} appears more than once in the snake body")]
    DuplicateCell(Cell),
    #[error("food at {0} overlaps the snake")]
    FoodOnSnake(Cell),
}
