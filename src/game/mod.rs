//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies, so a full round can be driven programmatically in tests.

pub mod config;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::GameEngine;
pub use grid::{Cell, Direction};
pub use state::{CollisionType, GameState, Phase, Snake};
