use crate::config::GameConfig;
use crate::game::{self, column_index, column_label, GameOutcome, GameState, WIDTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

const WELCOME: &str = "Welcome to Connect Four! Connect four tokens in a row to win.";

pub struct App {
    config: GameConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App {
            game_state: game::new_game(&config),
            config,
            selected_column: WIDTH / 2, // Start in middle
            should_quit: false,
            message: Some(WELCOME.to_string()),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < WIDTH - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = game::new_game(&self.config);
                self.selected_column = WIDTH / 2;
                self.message = Some("New game started!".to_string());
                info!("new game started");
            }
            KeyCode::Char(letter) => {
                if let Some(column) = column_index(letter) {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let label = column_label(self.selected_column).unwrap_or('?');
        if !self
            .game_state
            .available_columns()
            .contains(&self.selected_column)
        {
            self.message = Some(format!("Column {label} is full!"));
            return;
        }

        match self.game_state.advance(self.selected_column) {
            Ok(Some(outcome)) => {
                self.message = Some(match outcome {
                    GameOutcome::Win(owner) => {
                        format!("{} wins!", self.game_state.player(owner).name())
                    }
                    GameOutcome::Draw => "It's a draw!".to_string(),
                });
                info!(?outcome, moves = self.game_state.moves().len(), "game over");
            }
            Ok(None) => {}
            Err(err) => {
                self.message = Some(format!("Cannot drop in column {label}: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
