use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{error::GameError, grid::Grid};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Engine ticks per second
    pub tick_rate: u32,
    /// Terminal columns drawn per grid cell (renderer only)
    pub cell_size: u16,
    /// Optional RNG seed for reproducible food placement
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            tick_rate: 15,
            cell_size: 2,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30, 30)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the grid described by this configuration
    pub fn grid(&self) -> Result<Grid, GameError> {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.grid()?;
        if self.tick_rate == 0 {
            return Err(GameError::ZeroTickRate);
        }
        if self.cell_size == 0 {
            return Err(GameError::ZeroCellSize);
        }
        Ok(())
    }

    /// Time between two engine ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.tick_rate, 15);
        assert_eq!(config.rng_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12).with_seed(9);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.rng_seed, Some(9));
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            GameConfig::new(0, 10).validate(),
            Err(GameError::EmptyGrid {
                width: 0,
                height: 10
            })
        );

        let config = GameConfig {
            tick_rate: 0,
            ..GameConfig::small()
        };
        assert_eq!(config.validate(), Err(GameError::ZeroTickRate));

        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::small()
        };
        assert_eq!(config.validate(), Err(GameError::ZeroCellSize));
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig {
            tick_rate: 10,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_json_partial_config() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_width": 8, "rng_seed": 42 }"#).unwrap();
        assert_eq!(config.grid_width, 8);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.rng_seed, Some(42));
    }
}
