//! Paint contracts shared by the canvas painter and its backends.
//!
//! The painter only needs axis-aligned filled rectangles plus a small HUD,
//! so backends stay interchangeable: the terminal surface rasterizes the
//! same calls a 2D canvas context would execute directly.

/// Opaque RGB color used when painting the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Canvas background
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
/// Snake segment fill
pub const SNAKE_FILL: Rgb = Rgb::new(255, 255, 255);
/// Apple fill
pub const APPLE_FILL: Rgb = Rgb::new(255, 0, 0);
/// Rim painted under every snake segment (#526dd1)
pub const CELL_BORDER: Rgb = Rgb::new(82, 109, 209);

/// Width in pixels of the rim left visible around a bordered cell's fill
pub const BORDER_INSET: i32 = 2;

/// Pixel-space paint target.
///
/// Calls arrive back-to-front; later rectangles cover earlier ones.
pub trait Surface {
    /// Fill an axis-aligned rectangle with a solid color
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb);
}

/// Score readout and panel chrome around the canvas
pub trait Hud {
    /// Replace the displayed score
    fn set_score(&mut self, score: u32);
    /// Show or hide the start panel
    fn set_panel_visible(&mut self, visible: bool);
    /// Show or hide the game-over message
    fn set_message_visible(&mut self, visible: bool);
}
