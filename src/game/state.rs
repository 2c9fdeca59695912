use rand::Rng;

use super::{
    action::Direction,
    error::GameError,
    grid::{Cell, Grid},
    occupancy::OccupancyIndex,
    snake::Snake,
    spawner::FoodSpawner,
};

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    GameOver,
    /// No free cell remains for food
    Won,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
///
/// The snake, its occupancy index and the free-cell universe are only mutated
/// together, by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    pub(super) snake: Snake,
    pub(super) occupancy: OccupancyIndex,
    pub(super) spawner: FoodSpawner,
    pub(super) food: Option<Cell>,
    pub(super) status: GameStatus,
    pub(super) collision: Option<CollisionType>,
    pub(super) score: u32,
    pub(super) ticks: u64,
}

impl GameState {
    /// Fresh game: one-cell snake at the grid center and food somewhere else
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let start = grid.center();
        let mut spawner = FoodSpawner::new(&grid);
        let mut occupancy = OccupancyIndex::new();
        spawner.occupy(start);
        occupancy.insert(start);
        let food = spawner.spawn(&occupancy, rng);

        Self::assemble(grid, Snake::new(start), occupancy, spawner, food)
    }

    /// Game resumed from an explicit body (tail to head), heading and food
    pub fn from_body(
        grid: Grid,
        body: Vec<Cell>,
        heading: Option<Direction>,
        food: Option<Cell>,
    ) -> Result<Self, GameError> {
        let mut spawner = FoodSpawner::new(&grid);
        let mut occupancy = OccupancyIndex::new();
        for &cell in &body {
            if !grid.contains(cell) {
                return Err(GameError::OutOfBounds(cell));
            }
            if occupancy.contains(cell) {
                return Err(GameError::DuplicateCell(cell));
            }
            occupancy.insert(cell);
            spawner.occupy(cell);
        }

        if let Some(food) = food {
            if !grid.contains(food) {
                return Err(GameError::OutOfBounds(food));
            }
            if occupancy.contains(food) {
                return Err(GameError::FoodOnSnake(food));
            }
        }

        let snake = Snake::from_body(body, heading).ok_or(GameError::EmptyBody)?;
        Ok(Self::assemble(grid, snake, occupancy, spawner, food))
    }

    fn assemble(
        grid: Grid,
        snake: Snake,
        occupancy: OccupancyIndex,
        spawner: FoodSpawner,
        food: Option<Cell>,
    ) -> Self {
        Self {
            grid,
            snake,
            occupancy,
            spawner,
            food,
            status: GameStatus::Running,
            collision: None,
            score: 0,
            ticks: 0,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    pub fn spawner(&self) -> &FoodSpawner {
        &self.spawner
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn collision(&self) -> Option<CollisionType> {
        self.collision
    }

    /// Number of food items eaten
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_occupied_by_snake(&self, cell: Cell) -> bool {
        self.occupancy.contains(cell)
    }

    /// Owned, render-ready copy of the state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            body: self.snake.body().collect(),
            food: self.food,
            status: self.status,
            collision: self.collision,
            score: self.score,
            ticks: self.ticks,
        }
    }
}

/// Read-only view of a game handed to renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Body cells from tail to head
    pub body: Vec<Cell>,
    pub food: Option<Cell>,
    pub status: GameStatus,
    pub collision: Option<CollisionType>,
    pub score: u32,
    pub ticks: u64,
}

impl Snapshot {
    pub fn head(&self) -> Option<Cell> {
        self.body.last().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
