//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine is driven by discrete ticks and hands out owned snapshots, so any
//! front end (terminal, tests, replays) can sit on top of it.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod occupancy;
pub mod snake;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use error::GameError;
pub use grid::{Cell, Grid};
pub use occupancy::OccupancyIndex;
pub use snake::Snake;
pub use spawner::FoodSpawner;
pub use state::{CollisionType, GameState, GameStatus, Snapshot};
