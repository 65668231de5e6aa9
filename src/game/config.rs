use std::time::Duration;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the playing field and the game clock.
///
/// All lengths are in pixels. The field dimensions must be multiples of
/// `cell_size`; `main` validates this before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playing field in pixels
    pub field_width: i32,
    /// Height of the playing field in pixels
    pub field_height: i32,
    /// Side length of one grid cell in pixels
    pub cell_size: i32,
    /// Fixed simulation rate in ticks per second
    pub tick_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 600,
            field_height: 600,
            cell_size: 20,
            tick_hz: 5,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom field size
    pub fn new(field_width: i32, field_height: i32) -> Self {
        Self {
            field_width,
            field_height,
            ..Default::default()
        }
    }

    /// Create a small field for quick games and tests
    pub fn small() -> Self {
        Self::new(300, 300)
    }

    /// Number of cells per row
    pub fn cells_wide(&self) -> i32 {
        self.field_width / self.cell_size
    }

    /// Number of cells per column
    pub fn cells_tall(&self) -> i32 {
        self.field_height / self.cell_size
    }

    /// Total number of cells on the field
    pub fn cell_count(&self) -> i32 {
        self.cells_wide() * self.cells_tall()
    }

    /// Wall-clock duration of one simulation tick
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_hz))
    }

    /// Reject configurations the game cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.field_width > 0 && self.field_width % self.cell_size == 0,
            "field width must be a positive multiple of the cell size ({}px)",
            self.cell_size
        );
        ensure!(
            self.field_height > 0 && self.field_height % self.cell_size == 0,
            "field height must be a positive multiple of the cell size ({}px)",
            self.cell_size
        );
        ensure!(
            self.cells_wide() >= 10 && self.cells_tall() >= 10,
            "field must be at least 10x10 cells"
        );
        ensure!(
            (1..=60).contains(&self.tick_hz),
            "tick rate must be between 1 and 60 Hz"
        );
        Ok(())
    }
}
