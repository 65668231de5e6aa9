use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::painter;
use crate::render::{Hud, Surface, TerminalSurface};

/// Owns the round state and runs the fixed-rate game loop.
///
/// Generic over the paint target so the loop logic can be driven against a
/// recording surface; the binary runs it against `TerminalSurface`.
pub struct App<T: Surface + Hud> {
    engine: GameEngine,
    state: GameState,
    surface: T,
    input_handler: InputHandler,
    ticking: bool,
    should_quit: bool,
}

impl App<TerminalSurface> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_surface(config, TerminalSurface::new(config))
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.engine.config().tick_period());

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.on_tick();
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            terminal
                .draw(|frame| self.surface.render(frame))
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl<T: Surface + Hud> App<T> {
    pub fn with_surface(config: GameConfig, surface: T) -> Self {
        let engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            surface,
            input_handler: InputHandler::new(),
            ticking: false,
            should_quit: false,
        }
    }

    /// Begin a fresh round: reset the state, clear the panels and paint the
    /// opening frame
    fn start_game(&mut self) {
        log::info!("Starting a round");
        self.state = self.engine.reset();
        self.surface.set_panel_visible(false);
        self.surface.set_message_visible(false);
        painter::redraw(&mut self.surface, &mut self.engine, &mut self.state);
        self.ticking = true;
    }

    /// Freeze the round and bring the restart chrome back
    fn stop_game(&mut self) {
        self.ticking = false;
        self.surface.set_message_visible(true);
        self.surface.set_panel_visible(true);
    }

    /// One simulation tick.
    ///
    /// The collision check runs against the position painted last tick, so a
    /// lost round freezes on the losing frame instead of advancing once more.
    fn on_tick(&mut self) {
        if !self.ticking {
            return;
        }

        if let Some(collision) = self.engine.check_ended(&mut self.state) {
            log::info!(
                "Game over ({:?}) with score {}",
                collision,
                self.state.score
            );
            self.stop_game();
            return;
        }

        if self.engine.advance(&mut self.state) {
            log::debug!("Apple eaten, score is now {}", self.state.score);
        }
        painter::redraw(&mut self.surface, &mut self.engine, &mut self.state);
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // Dropped requests (reversals, second turn in a tick)
                    // need no feedback
                    let _ = self.state.issue_direction(direction);
                }
                KeyAction::Restart => {
                    self.start_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }
}
