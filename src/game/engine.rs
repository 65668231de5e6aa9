use super::{
    config::GameConfig,
    grid::{self, Cell},
    state::{CollisionType, GameState, Phase, Snake},
};
use rand::Rng;

/// Random placements tried before falling back to scanning for free cells
const SPAWN_ATTEMPTS: usize = 32;

/// The rules engine: advances the simulation one tick at a time and decides
/// when a round is over
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting state for a fresh round
    pub fn reset(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// Execute one tick: open the turn gate, then move the snake one cell.
    ///
    /// Eating grows the snake by one segment and clears the apple; the next
    /// redraw spawns a replacement. Does nothing once the round has ended.
    /// Returns true if the snake ate the apple this tick.
    pub fn advance(&self, state: &mut GameState) -> bool {
        if state.phase == Phase::Ended {
            return false;
        }

        state.move_issued = false;

        let new_head = state.snake.head().stepped(state.direction, self.config.cell_size);
        let ate_apple = state.apple == Some(new_head);

        state.snake.move_snake(state.direction, self.config.cell_size, ate_apple);

        if ate_apple {
            state.score += 1;
            state.apple = None;
        }

        ate_apple
    }

    /// Check the current head for a fatal collision, moving the round to
    /// `Ended` if one is found.
    ///
    /// Called at the start of each tick, before `advance`, so the losing
    /// position stays on screen untouched.
    pub fn check_ended(&self, state: &mut GameState) -> Option<CollisionType> {
        let collision = self.check_collision(state);
        if collision.is_some() {
            state.phase = Phase::Ended;
        }
        collision
    }

    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        // The far edges are inclusive: a head at exactly `field_width` is
        // still in play for one more tick even though its cell pokes past
        // the edge.
        let out_of_bounds = head.x < 0
            || head.x > self.config.field_width
            || head.y < 0
            || head.y > self.config.field_height;
        if out_of_bounds {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn an apple on a random cell not occupied by the snake.
    ///
    /// Tries rejection sampling first; once the snake covers most of the
    /// field, falls back to picking among the remaining free cells. Returns
    /// `None` only when the snake fills the whole field.
    pub fn spawn_apple(&mut self, snake: &Snake) -> Option<Cell> {
        for _ in 0..SPAWN_ATTEMPTS {
            let cell = grid::random_cell(
                &mut self.rng,
                self.config.field_width,
                self.config.field_height,
                self.config.cell_size,
            );
            if !snake.occupies(cell) {
                log::debug!("Spawned apple at ({}, {})", cell.x, cell.y);
                return Some(cell);
            }
        }

        let mut free_cells = Vec::new();
        for y in 0..self.config.cells_tall() {
            for x in 0..self.config.cells_wide() {
                let cell = Cell::new(x * self.config.cell_size, y * self.config.cell_size);
                if !snake.occupies(cell) {
                    free_cells.push(cell);
                }
            }
        }

        if free_cells.is_empty() {
            log::warn!("No free cell left for an apple");
            None
        } else {
            let cell = free_cells[self.rng.gen_range(0..free_cells.len())];
            log::debug!("Spawned apple at ({}, {})", cell.x, cell.y);
            Some(cell)
        }
    }
}
