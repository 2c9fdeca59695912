use std::collections::HashMap;

use rand::Rng;

use super::{
    grid::{Cell, Grid},
    occupancy::OccupancyIndex,
};

/// Free-cell universe used to place food
///
/// Holds every grid cell not covered by the snake. Cells are moved in and out
/// as the snake moves, so picking a cell never scans the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodSpawner {
    free: Vec<Cell>,
    slots: HashMap<Cell, usize>,
}

impl FoodSpawner {
    /// Seed the universe with every cell of the grid
    pub fn new(grid: &Grid) -> Self {
        let free: Vec<Cell> = grid.all_cells().collect();
        let slots = free
            .iter()
            .enumerate()
            .map(|(slot, &cell)| (cell, slot))
            .collect();
        Self { free, slots }
    }

    /// Mark a cell as taken by the snake
    pub fn occupy(&mut self, cell: Cell) {
        let Some(slot) = self.slots.remove(&cell) else {
            return;
        };
        self.free.swap_remove(slot);
        if let Some(&moved) = self.free.get(slot) {
            self.slots.insert(moved, slot);
        }
    }

    /// Return a cell vacated by the snake to the universe
    pub fn release(&mut self, cell: Cell) {
        if self.slots.contains_key(&cell) {
            return;
        }
        self.slots.insert(cell, self.free.len());
        self.free.push(cell);
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.slots.contains_key(&cell)
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Pick a free cell uniformly at random, or `None` when the grid is full
    pub fn spawn<R: Rng + ?Sized>(&self, occupancy: &OccupancyIndex, rng: &mut R) -> Option<Cell> {
        if self.free.is_empty() {
            return None;
        }
        let cell = self.free[rng.gen_range(0..self.free.len())];
        debug_assert!(!occupancy.contains(cell), "free cell {cell} is occupied");
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn grid(width: usize, height: usize) -> Grid {
        Grid::new(width, height).unwrap()
    }

    #[test]
    fn test_new_covers_grid() {
        let spawner = FoodSpawner::new(&grid(4, 3));
        assert_eq!(spawner.free_count(), 12);
        assert!(spawner.is_free(Cell::new(3, 2)));
    }

    #[test]
    fn test_occupy_and_release() {
        let mut spawner = FoodSpawner::new(&grid(3, 3));

        spawner.occupy(Cell::new(0, 0));
        spawner.occupy(Cell::new(2, 2));
        assert_eq!(spawner.free_count(), 7);
        assert!(!spawner.is_free(Cell::new(0, 0)));

        // Occupying twice is harmless
        spawner.occupy(Cell::new(0, 0));
        assert_eq!(spawner.free_count(), 7);

        spawner.release(Cell::new(0, 0));
        spawner.release(Cell::new(0, 0));
        assert_eq!(spawner.free_count(), 8);
        assert!(spawner.is_free(Cell::new(0, 0)));
    }

    #[test]
    fn test_slots_stay_consistent_after_swap_remove() {
        let mut spawner = FoodSpawner::new(&grid(5, 5));
        for cell in grid(5, 5).all_cells().filter(|cell| cell.col % 2 == 0) {
            spawner.occupy(cell);
        }

        for (slot, cell) in spawner.free.iter().enumerate() {
            assert_eq!(spawner.slots[cell], slot);
        }
        assert_eq!(spawner.free.len(), spawner.slots.len());
    }

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut spawner = FoodSpawner::new(&grid(4, 4));
        let mut occupancy = OccupancyIndex::new();
        for cell in [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)] {
            spawner.occupy(cell);
            occupancy.insert(cell);
        }

        for _ in 0..200 {
            let food = spawner.spawn(&occupancy, &mut rng).unwrap();
            assert!(!occupancy.contains(food));
        }
    }

    #[test]
    fn test_spawn_reaches_every_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let spawner = FoodSpawner::new(&grid(3, 2));
        let occupancy = OccupancyIndex::new();

        let seen: HashSet<Cell> = (0..500)
            .filter_map(|_| spawner.spawn(&occupancy, &mut rng))
            .collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_spawn_on_full_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut spawner = FoodSpawner::new(&grid(1, 1));
        let mut occupancy = OccupancyIndex::new();
        spawner.occupy(Cell::new(0, 0));
        occupancy.insert(Cell::new(0, 0));

        assert_eq!(spawner.spawn(&occupancy, &mut rng), None);
    }
}
