use super::config::GameConfig;
use super::grid::{Cell, Direction};

/// The snake on the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a one-segment snake at the given cell
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if a cell collides with the snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Check if any segment, head included, occupies the cell
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Move one cell in `direction`, growing by one segment when
    /// `should_grow` is true
    pub fn move_snake(&mut self, direction: Direction, cell_size: i32, should_grow: bool) {
        let new_head = self.head().stepped(direction, cell_size);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playing field
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Whether the round is still being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ticks advance the snake
    Running,
    /// The snake hit a wall or itself; state is frozen
    Ended,
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction applied on the next tick
    pub direction: Direction,
    /// `None` until the renderer's next pass spawns a fresh apple
    pub apple: Option<Cell>,
    pub score: u32,
    /// Set when a turn has been accepted this tick; cleared by the engine
    pub move_issued: bool,
    pub phase: Phase,
}

impl GameState {
    /// Create the starting state: a one-segment snake five cells in from
    /// the top-left corner, heading down, with no apple yet
    pub fn new(config: &GameConfig) -> Self {
        let start = Cell::new(5 * config.cell_size, 5 * config.cell_size);
        Self {
            snake: Snake::new(start),
            direction: Direction::Down,
            apple: None,
            score: 0,
            move_issued: false,
            phase: Phase::Running,
        }
    }

    /// Request a turn for the next tick.
    ///
    /// At most one turn is accepted per tick; later requests in the same
    /// tick are dropped. A request to reverse into the snake's own neck is
    /// dropped too, and does not use up the tick's turn. Re-pressing the
    /// current direction counts as the tick's turn.
    ///
    /// Returns true if the request was accepted.
    pub fn issue_direction(&mut self, requested: Direction) -> bool {
        if self.move_issued {
            return false;
        }
        if self.direction.is_opposite(requested) {
            return false;
        }

        self.direction = requested;
        self.move_issued = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_starts_as_single_segment() {
        let snake = Snake::new(Cell::new(100, 100));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(100, 100));
        assert!(snake.body_segments().is_empty());
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Cell::new(100, 100));

        // Move with growing
        snake.move_snake(Direction::Down, 20, true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(100, 120));

        // Move without growing
        snake.move_snake(Direction::Right, 20, false);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(120, 120));
        assert_eq!(snake.body, vec![Cell::new(120, 120), Cell::new(100, 120)]);
    }

    #[test]
    fn test_collision_detection() {
        let mut snake = Snake::new(Cell::new(100, 100));
        snake.move_snake(Direction::Down, 20, true);
        snake.move_snake(Direction::Down, 20, true);

        assert!(!snake.collides_with_body(snake.head()));
        assert!(snake.collides_with_body(Cell::new(100, 100)));
        assert!(snake.collides_with_body(Cell::new(100, 120)));
        assert!(!snake.collides_with_body(Cell::new(200, 200)));

        assert!(snake.occupies(snake.head()));
        assert!(snake.occupies(Cell::new(100, 100)));
        assert!(!snake.occupies(Cell::new(200, 200)));
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.snake.head(), Cell::new(100, 100));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.apple, None);
        assert_eq!(state.score, 0);
        assert!(!state.move_issued);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_one_turn_per_tick() {
        let mut state = GameState::new(&GameConfig::default());

        assert!(state.issue_direction(Direction::Left));
        assert_eq!(state.direction, Direction::Left);

        // A second turn in the same tick is dropped
        assert!(!state.issue_direction(Direction::Down));
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn test_reversal_is_rejected_without_spending_the_turn() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.direction, Direction::Down);

        // Up would reverse into the neck; the tick's turn stays available
        assert!(!state.issue_direction(Direction::Up));
        assert_eq!(state.direction, Direction::Down);
        assert!(!state.move_issued);

        // so a later key in the same tick still works
        assert!(state.issue_direction(Direction::Right));
        assert_eq!(state.direction, Direction::Right);
    }

    #[test]
    fn test_same_direction_press_spends_the_turn() {
        let mut state = GameState::new(&GameConfig::default());

        assert!(state.issue_direction(Direction::Down));
        assert_eq!(state.direction, Direction::Down);
        assert!(state.move_issued);

        assert!(!state.issue_direction(Direction::Left));
        assert_eq!(state.direction, Direction::Down);
    }
}
