use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::GameConfig;

use super::surface::{Hud, Rgb, Surface, BACKGROUND};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// What a single grid cell looks like after rasterizing the paint calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PaintedCell {
    /// Color covering the whole cell
    cover: Rgb,
    /// Smaller fill painted on top, leaving the cover as a rim
    inset: Option<Rgb>,
}

impl PaintedCell {
    const CLEAR: Self = Self {
        cover: BACKGROUND,
        inset: None,
    };
}

/// Canvas backend for the terminal.
///
/// `fill_rect` calls are rasterized into a grid of painted cells; `render`
/// then draws that grid with ratatui, two terminal columns per cell.
pub struct TerminalSurface {
    config: GameConfig,
    cells: Vec<PaintedCell>,
    score: u32,
    panel_visible: bool,
    message_visible: bool,
}

impl TerminalSurface {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            cells: vec![PaintedCell::CLEAR; config.cell_count() as usize],
            score: 0,
            panel_visible: true,
            message_visible: false,
        }
    }

    fn cell_index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= self.config.cells_wide() || row < 0 || row >= self.config.cells_tall()
        {
            return None;
        }
        Some((row * self.config.cells_wide() + col) as usize)
    }

    /// Draw the whole UI for one frame
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Canvas
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_score_bar(), chunks[0]);

        // Center the canvas horizontally
        let canvas_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if self.message_visible {
            frame.render_widget(self.render_game_over(), canvas_area);
        } else if self.panel_visible {
            frame.render_widget(self.render_start_panel(), canvas_area);
        } else {
            frame.render_widget(self.render_canvas(), canvas_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_canvas(&self) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for row in 0..self.config.cells_tall() {
            let mut spans = Vec::new();

            for col in 0..self.config.cells_wide() {
                let index = (row * self.config.cells_wide() + col) as usize;
                let painted = self.cells[index];

                let span = match painted.inset {
                    Some(inset) => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(to_color(inset))
                            .bg(to_color(painted.cover)),
                    ),
                    None => Span::styled("  ", Style::default().bg(to_color(painted.cover))),
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_score_bar(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                self.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_panel(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Surface for TerminalSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        if width <= 0 || height <= 0 {
            return;
        }
        let cell = self.config.cell_size;

        // A rectangle smaller than one cell is an inset fill over the cell
        // it starts in
        if width < cell && height < cell {
            let col = x.div_euclid(cell);
            let row = y.div_euclid(cell);
            if let Some(index) = self.cell_index(col, row) {
                self.cells[index].inset = Some(color);
            }
            return;
        }

        // Otherwise cover every cell the rectangle fully contains, clipping
        // at the field edges like a real canvas would
        let first_col = (x + cell - 1).div_euclid(cell);
        let last_col = (x + width).div_euclid(cell);
        let first_row = (y + cell - 1).div_euclid(cell);
        let last_row = (y + height).div_euclid(cell);

        for row in first_row.max(0)..last_row.min(self.config.cells_tall()) {
            for col in first_col.max(0)..last_col.min(self.config.cells_wide()) {
                let index = (row * self.config.cells_wide() + col) as usize;
                self.cells[index] = PaintedCell {
                    cover: color,
                    inset: None,
                };
            }
        }
    }
}

impl Hud for TerminalSurface {
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }

    fn set_message_visible(&mut self, visible: bool) {
        self.message_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{APPLE_FILL, CELL_BORDER, SNAKE_FILL};

    fn small_surface() -> TerminalSurface {
        // 5x5 cells of 20px
        TerminalSurface::new(GameConfig::new(100, 100))
    }

    fn painted(surface: &TerminalSurface, col: i32, row: i32) -> PaintedCell {
        surface.cells[surface.cell_index(col, row).unwrap()]
    }

    #[test]
    fn test_full_field_rect_clears_every_cell() {
        let mut surface = small_surface();
        surface.fill_rect(40, 40, 20, 20, APPLE_FILL);

        surface.fill_rect(0, 0, 100, 100, BACKGROUND);

        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(painted(&surface, col, row), PaintedCell::CLEAR);
            }
        }
    }

    #[test]
    fn test_cell_rect_covers_one_cell() {
        let mut surface = small_surface();
        surface.fill_rect(40, 60, 20, 20, APPLE_FILL);

        assert_eq!(
            painted(&surface, 2, 3),
            PaintedCell {
                cover: APPLE_FILL,
                inset: None,
            }
        );
        assert_eq!(painted(&surface, 3, 3), PaintedCell::CLEAR);
        assert_eq!(painted(&surface, 2, 2), PaintedCell::CLEAR);
    }

    #[test]
    fn test_sub_cell_rect_becomes_inset_fill() {
        let mut surface = small_surface();
        surface.fill_rect(40, 60, 20, 20, CELL_BORDER);
        surface.fill_rect(42, 62, 16, 16, SNAKE_FILL);

        assert_eq!(
            painted(&surface, 2, 3),
            PaintedCell {
                cover: CELL_BORDER,
                inset: Some(SNAKE_FILL),
            }
        );
    }

    #[test]
    fn test_covering_a_cell_drops_stale_inset() {
        let mut surface = small_surface();
        surface.fill_rect(40, 60, 20, 20, CELL_BORDER);
        surface.fill_rect(42, 62, 16, 16, SNAKE_FILL);

        surface.fill_rect(40, 60, 20, 20, APPLE_FILL);

        assert_eq!(
            painted(&surface, 2, 3),
            PaintedCell {
                cover: APPLE_FILL,
                inset: None,
            }
        );
    }

    #[test]
    fn test_rects_outside_the_field_are_clipped() {
        let mut surface = small_surface();

        // One cell past the far edge and one before the near edge
        surface.fill_rect(100, 40, 20, 20, APPLE_FILL);
        surface.fill_rect(-20, 40, 20, 20, APPLE_FILL);
        surface.fill_rect(42, -18, 16, 16, SNAKE_FILL);

        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(painted(&surface, col, row), PaintedCell::CLEAR);
            }
        }
    }

    #[test]
    fn test_hud_state_is_retained() {
        let mut surface = small_surface();
        assert!(surface.panel_visible);
        assert!(!surface.message_visible);

        surface.set_score(12);
        surface.set_panel_visible(false);
        surface.set_message_visible(true);

        assert_eq!(surface.score, 12);
        assert!(!surface.panel_visible);
        assert!(surface.message_visible);
    }
}
