use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use super::{
    action::{Direction, Intent},
    config::GameConfig,
    error::GameError,
    grid::Grid,
    state::{CollisionType, GameState, GameStatus, Snapshot},
};

/// The game engine that handles all game logic
///
/// Owns the single live [`GameState`]. Input is buffered through
/// [`propose_direction`](Self::propose_direction) and applied on the next
/// [`tick`](Self::tick); every tick returns an owned [`Snapshot`].
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine and start a fresh game
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid()?;
        let mut rng = seeded_rng(config.rng_seed);
        let state = GameState::new(grid, &mut rng);

        debug!(
            width = grid.width(),
            height = grid.height(),
            seed = ?config.rng_seed,
            "engine initialized"
        );

        Ok(Self {
            config,
            grid,
            state,
            rng,
        })
    }

    /// Create an engine around an existing state
    ///
    /// The grid dimensions of `state` take precedence over the configured ones.
    pub fn with_state(mut config: GameConfig, state: GameState) -> Result<Self, GameError> {
        let grid = state.grid();
        config.grid_width = grid.width();
        config.grid_height = grid.height();
        config.validate()?;

        Ok(Self {
            rng: seeded_rng(config.rng_seed),
            config,
            grid,
            state,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Buffer a heading for the next tick; ignored once the game has ended
    pub fn propose_direction(&mut self, direction: Direction) {
        if self.state.status().is_terminal() {
            return;
        }
        self.state.snake.propose_direction(direction);
    }

    /// Start a new game if the current one has ended
    ///
    /// Returns whether a reset happened.
    pub fn restart(&mut self) -> bool {
        if !self.state.status().is_terminal() {
            return false;
        }
        self.reset();
        true
    }

    /// Route an input intent to the matching operation
    pub fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Turn(direction) => self.propose_direction(direction),
            Intent::Restart => {
                self.restart();
            }
        }
    }

    /// Reset the game to initial state, whatever the current status
    pub fn reset(&mut self) -> Snapshot {
        self.state = GameState::new(self.grid, &mut self.rng);
        debug!(food = ?self.state.food(), "game reset");
        self.state.snapshot()
    }

    /// Execute one step of the game
    pub fn tick(&mut self) -> Snapshot {
        if self.state.status().is_terminal() {
            trace!(status = ?self.state.status(), "tick ignored in terminal state");
            return self.state.snapshot();
        }

        let state = &mut self.state;
        state.ticks += 1;
        state.snake.apply_pending_direction();

        let Some(candidate) = state.snake.next_head() else {
            trace!(tick = state.ticks, "waiting for a first heading");
            return state.snapshot();
        };

        if !self.grid.contains(candidate) {
            return self.finish(GameStatus::GameOver, Some(CollisionType::Wall));
        }

        let eats = state.food == Some(candidate);
        let vacated = state
            .snake
            .vacates_tail(eats)
            .then(|| state.snake.tail());
        if state.occupancy.contains(candidate) && vacated != Some(candidate) {
            return self.finish(GameStatus::GameOver, Some(CollisionType::SelfCollision));
        }

        state.snake.advance();
        state.occupancy.insert(candidate);
        state.spawner.occupy(candidate);

        if eats {
            state.snake.grow();
            state.score += 1;
            state.food = state.spawner.spawn(&state.occupancy, &mut self.rng);
            trace!(score = state.score, food = ?state.food, "food eaten");
        }

        if state.snake.needs_trim() {
            if let Some(tail) = state.snake.trim_tail() {
                // Chasing the tail: the freed cell is the new head
                if tail != candidate {
                    state.occupancy.remove(tail);
                    state.spawner.release(tail);
                }
            }
        }

        if eats && state.food.is_none() {
            return self.finish(GameStatus::Won, None);
        }

        trace!(tick = state.ticks, head = %candidate, "tick");
        state.snapshot()
    }

    fn finish(&mut self, status: GameStatus, collision: Option<CollisionType>) -> Snapshot {
        self.state.status = status;
        self.state.collision = collision;
        debug!(
            ?status,
            ?collision,
            score = self.state.score,
            ticks = self.state.ticks,
            "game finished"
        );
        self.state.snapshot()
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
