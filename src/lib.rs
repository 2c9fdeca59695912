//! Grid Snake - a tick-driven Snake engine with a terminal front end
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive frame loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
