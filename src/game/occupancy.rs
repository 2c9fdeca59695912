use std::collections::HashSet;

use super::grid::Cell;

/// Set of cells currently covered by the snake body
///
/// Kept in lockstep with [`Snake`](super::snake::Snake) by its owner. The index
/// does not check grid bounds itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    cells: HashSet<Cell>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    pub fn remove(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Cell> for OccupancyIndex {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
