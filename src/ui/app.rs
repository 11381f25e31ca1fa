use crate::config::{AppConfig, BoardConfig};
use crate::game::{GameSession, Outcome};
use crate::ui::ScoreBoard;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    scores: ScoreBoard,
    board_config: BoardConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: GameSession::new(config.board.width, config.board.height),
            scores: ScoreBoard::new(),
            board_config: config.board.clone(),
            selected_column: config.board.width / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
                self.handle_key(key);
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
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game; scores carry over
                self.session
                    .reset(self.board_config.width, self.board_config.height);
                self.selected_column = self.board_config.width / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.session.is_finished() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        match self.session.drop_piece(self.selected_column) {
            Outcome::Continue => {}
            Outcome::Win(player) => {
                self.scores.record_win(player);
                self.message = Some(format!("Player {} won!", player.number()));
            }
            Outcome::Tie => {
                self.message = Some("You tied!".to_string());
            }
            Outcome::Rejected => {
                self.message = Some("Column is full!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.scores,
            self.selected_column,
            &self.message,
        );
    }
}
