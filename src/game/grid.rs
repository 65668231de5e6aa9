use rand::Rng;

/// One grid square, addressed by pixel-space coordinates.
///
/// Both coordinates are always multiples of the cell size; all movement and
/// spawning arithmetic preserves that alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step away in `direction`.
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Direction the snake can move.
///
/// Deltas are unit vectors in canvas coordinates, so `Down` points towards
/// growing `y`. Exactly one axis is ever non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Uniformly random grid-aligned cell inside the field.
///
/// Each coordinate ranges over `{0, cell, 2*cell, ..., field - cell}`, i.e.
/// the far-edge margin of one cell size is excluded so the cell always lies
/// fully inside the field.
pub fn random_cell<R: Rng>(rng: &mut R, field_width: i32, field_height: i32, cell_size: i32) -> Cell {
    let max_x = (field_width - cell_size) / cell_size;
    let max_y = (field_height - cell_size) / cell_size;
    Cell::new(
        rng.gen_range(0..=max_x) * cell_size,
        rng.gen_range(0..=max_y) * cell_size,
    )
}
