//! Canvas-style rendering.
//!
//! The painter repaints the scene as filled rectangles against the
//! `Surface`/`Hud` contracts; the terminal backend rasterizes those
//! rectangles into grid cells and presents them with ratatui.

pub mod painter;
pub mod surface;
pub mod tui;

pub use surface::{Hud, Rgb, Surface};
pub use tui::TerminalSurface;
