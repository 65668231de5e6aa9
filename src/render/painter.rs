use crate::game::{Cell, GameEngine, GameState};

use super::surface::{Hud, Rgb, Surface, APPLE_FILL, BACKGROUND, BORDER_INSET, CELL_BORDER, SNAKE_FILL};

/// Paint one bordered cell: the rim color fills the whole square, then the
/// fill covers it with a `BORDER_INSET` margin on every side
pub fn draw_cell<S: Surface>(surface: &mut S, cell: Cell, cell_size: i32, fill: Rgb) {
    surface.fill_rect(cell.x, cell.y, cell_size, cell_size, CELL_BORDER);
    surface.fill_rect(
        cell.x + BORDER_INSET,
        cell.y + BORDER_INSET,
        cell_size - 2 * BORDER_INSET,
        cell_size - 2 * BORDER_INSET,
        fill,
    );
}

/// Repaint the whole scene back-to-front and refresh the score readout.
///
/// Layer order: background, snake, apple. When no apple exists (fresh round,
/// or eaten last tick) one is spawned mid-pass, after the snake layer, so a
/// replacement appears on the very frame the old one vanished. On a field
/// with no free cell left the apple layer is simply skipped.
pub fn redraw<T>(target: &mut T, engine: &mut GameEngine, state: &mut GameState)
where
    T: Surface + Hud,
{
    let config = *engine.config();

    target.fill_rect(0, 0, config.field_width, config.field_height, BACKGROUND);

    for &segment in &state.snake.body {
        draw_cell(target, segment, config.cell_size, SNAKE_FILL);
    }

    if state.apple.is_none() {
        state.apple = engine.spawn_apple(&state.snake);
    }
    if let Some(apple) = state.apple {
        target.fill_rect(apple.x, apple.y, config.cell_size, config.cell_size, APPLE_FILL);
    }

    target.set_score(state.score);
}
