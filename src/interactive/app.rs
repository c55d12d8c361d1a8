//! TUI application state and logic

use crate::core::WordLength;
use crate::game::{
    Board, GameConfig, GameError, GameStatus, InputEvent, InputRouter, RouteOutcome,
};
use crate::wordlists::WordCatalog;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub board: Board<'a>,
    pub router: InputRouter,
    pub input_mode: InputMode,
    /// Highlighted entry of the length menu
    pub menu_selection: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Choosing a word length
    Menu,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, kept in memory only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app with a game ready to play
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has no word of the configured length.
    pub fn new(catalog: &'a WordCatalog, config: GameConfig) -> Result<Self, GameError> {
        let board = Board::new(catalog, config)?;
        let menu_selection = WordLength::ALL
            .iter()
            .position(|&l| l == config.word_length)
            .unwrap_or(1);

        Ok(Self {
            board,
            router: InputRouter::new(),
            input_mode: InputMode::Playing,
            menu_selection,
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. Esc for the length menu.",
                    config.word_length, config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Dispatch one key press according to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Menu => self.handle_menu_key(key.code),
            InputMode::Playing => self.handle_playing_key(key.code),
            InputMode::GameOver => self.handle_game_over_key(key.code),
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        let event = match code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Menu;
                return;
            }
            KeyCode::Char(c) => InputEvent::Letter(c),
            KeyCode::Backspace => InputEvent::Backspace,
            KeyCode::Enter => InputEvent::Submit,
            _ => return,
        };

        match self.router.route(&mut self.board, event) {
            RouteOutcome::Submitted(outcome) => {
                if outcome.status.is_over() {
                    self.finish_game(outcome.status, outcome.row + 1);
                }
            }
            RouteOutcome::Rejected(GameError::InvalidWord(word)) => {
                self.add_message(
                    &format!("{} is not in the word list", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            RouteOutcome::Rejected(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            RouteOutcome::Ignored | RouteOutcome::LetterAdded | RouteOutcome::LetterRemoved => {}
        }
    }

    fn finish_game(&mut self, status: GameStatus, guesses: usize) {
        self.stats.record(status, guesses);
        self.input_mode = InputMode::GameOver;

        let secret = self.board.secret_word().text().to_uppercase();
        if status == GameStatus::Won {
            let celebration = match guesses {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT!",
                3 => "✨ SPLENDID!",
                4 => "👏 GREAT JOB!",
                5 => "🎉 NICE WORK!",
                _ => "😅 PHEW!",
            };
            self.add_message(
                &format!("{celebration} {secret} in {guesses}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("The word was {secret}"), MessageStyle::Error);
        }
        self.add_message(
            "'n' new word, 't' try again, 'm' menu, 'q' quit",
            MessageStyle::Info,
        );
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter => self.new_word(),
            KeyCode::Char('t') => self.try_again(),
            KeyCode::Char('m') | KeyCode::Esc => self.input_mode = InputMode::Menu,
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let last = WordLength::ALL.len() - 1;
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Left => {
                self.menu_selection = self.menu_selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right => {
                self.menu_selection = (self.menu_selection + 1).min(last);
            }
            KeyCode::Char(c @ '4'..='6') => {
                if let Some(index) = c.to_digit(10).map(|d| d as usize - WordLength::MIN) {
                    self.menu_selection = index;
                    self.start_with_length(WordLength::ALL[index]);
                }
            }
            KeyCode::Enter => self.start_with_length(WordLength::ALL[self.menu_selection]),
            KeyCode::Esc if !self.board.status().is_over() => {
                self.input_mode = InputMode::Playing;
            }
            _ => {}
        }
    }

    /// Start a new game with the chosen word length
    pub fn start_with_length(&mut self, length: WordLength) {
        let config = self.board.config().with_word_length(length);
        match self.board.new_game(config) {
            Ok(()) => {
                self.router.reset();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message(
                    &format!("New {length}-letter word. Good luck!"),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Same settings, fresh secret word
    pub fn new_word(&mut self) {
        self.start_with_length(self.board.word_length());
    }

    /// Same secret word, cleared board
    pub fn try_again(&mut self) {
        self.board.replay();
        self.router.reset();
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("Same word, another go.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal before reporting any error from the event loop
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> WordCatalog {
        WordCatalog::from_words(&["crane", "cake", "planet"], &["trace", "lake"])
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_the_board() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();

        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.board.active_column(), 2);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.board.active_column(), 1);
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn winning_switches_to_game_over() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();

        type_word(&mut app, "trace");
        assert_eq!(app.board.active_row(), 1);

        type_word(&mut app, "crane");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert_eq!(app.stats.current_streak, 1);
    }

    #[test]
    fn losing_records_the_game() {
        let catalog = catalog();
        let config = GameConfig::new(5, 2).unwrap();
        let mut app = App::new(&catalog, config).unwrap();

        type_word(&mut app, "trace");
        type_word(&mut app, "trace");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.board.status(), GameStatus::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn unknown_word_shows_error() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();

        type_word(&mut app, "qqqqq");
        assert!(app.router.invalid_notice());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
        assert_eq!(app.board.active_row(), 0);

        press(&mut app, KeyCode::Backspace);
        assert!(!app.router.invalid_notice());
    }

    #[test]
    fn try_again_keeps_secret() {
        let catalog = catalog();
        let config = GameConfig::new(5, 1).unwrap();
        let mut app = App::new(&catalog, config).unwrap();

        type_word(&mut app, "trace");
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.board.secret_word().text(), "crane");
        assert_eq!(app.board.attempts_used(), 0);
    }

    #[test]
    fn menu_switches_word_length() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();
        assert_eq!(app.menu_selection, 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Menu);

        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.board.word_length(), WordLength::SIX);
        assert_eq!(app.board.secret_word().text(), "planet");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.word_length(), WordLength::FOUR);
        assert_eq!(app.board.rows()[0].tiles().len(), 4);
    }

    #[test]
    fn menu_escape_resumes_game() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();

        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.board.active_column(), 1);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_letter_while_playing() {
        let catalog = catalog();
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.board.active_column(), 1);
    }

    #[test]
    fn event_loop_stops_on_quit() {
        let catalog = catalog();
        let app = App::new(&catalog, GameConfig::default()).unwrap();
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 30)).unwrap();

        let mut keys = vec![
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
        ];
        let result = run_app(&mut terminal, app, || {
            keys.pop()
                .map(Event::Key)
                .ok_or_else(|| io::Error::other("out of keys"))
        });
        assert!(result.is_ok());
    }

    #[test]
    fn event_loop_reports_read_errors() {
        let catalog = catalog();
        let app = App::new(&catalog, GameConfig::default()).unwrap();
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 30)).unwrap();

        let result = run_app(&mut terminal, app, || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("terminal gone"));
    }

    #[test]
    fn streak_resets_on_loss() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Won, 4);
        stats.record(GameStatus::Lost, 6);

        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.current_streak, 0);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
