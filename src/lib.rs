//! Canvas Snake - classic grid snake with a canvas-style terminal renderer
//!
//! This library provides:
//! - Core game rules and state (game module)
//! - Rectangle painting and the terminal backend (render module)
//! - Keyboard handling (input module)
//! - The fixed-rate game loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
