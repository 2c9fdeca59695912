use std::fmt;

use super::{action::Direction, error::GameError};

/// A cell on the game grid, addressed by column and row
///
/// Coordinates are signed so that a candidate head one step past an edge can
/// be represented and rejected by [`Grid::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Neighbouring cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        self.moved_by(dcol, drow)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Fixed-size coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyGrid { width, height });
        }

        let too_large = GameError::GridTooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large.clone())?;
        let h = i32::try_from(height).map_err(|_| too_large.clone())?;
        if width.checked_mul(height).is_none() {
            return Err(too_large);
        }

        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// True iff the cell lies within [0, width) x [0, height)
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.width && cell.row >= 0 && cell.row < self.height
    }

    /// Every cell of the grid in row-major order
    pub fn all_cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 10).unwrap();

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 9)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 10)));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GameError::EmptyGrid {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let huge = i32::MAX as usize + 1;
        assert!(matches!(
            Grid::new(huge, 1),
            Err(GameError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_all_cells_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let cells: Vec<Cell> = grid.all_cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        assert!(cells.iter().all(|&cell| grid.contains(cell)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(3, 3).unwrap().center(), Cell::new(1, 1));
        assert_eq!(Grid::new(20, 20).unwrap().center(), Cell::new(10, 10));
        assert_eq!(Grid::new(1, 1).unwrap().center(), Cell::new(0, 0));
    }
}
