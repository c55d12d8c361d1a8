//! TUI rendering with ratatui
//!
//! Draws the tile grid, the keyboard hints and the side panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterClassification, WordLength};
use crate::game::{Board, Row};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    if app.input_mode == InputMode::Menu {
        render_menu(f, app, main_chunks[0]);
    } else {
        render_board_panel(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

/// Tile colors for a classification
#[must_use]
pub fn tile_style(class: LetterClassification) -> Style {
    match class {
        LetterClassification::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterClassification::WrongSpot => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterClassification::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterClassification::Pending => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LetterClassification::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn row_line(row: &Row, active: bool, invalid: bool) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::with_capacity(row.tiles().len() * 2);
    for tile in row.tiles() {
        let letter = tile.letter().map_or('·', |c| c.to_ascii_uppercase());
        let mut style = tile_style(tile.classification());
        if active && invalid {
            style = style.fg(Color::Red);
        }
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn keyboard_lines(board: &Board<'_>) -> Vec<Line<'static>> {
    let hints = board.letter_hints();
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|ch| {
                    let style = hints
                        .get(&ch)
                        .map_or_else(Style::default, |&class| tile_style(class));
                    Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let board = &app.board;
    let rows = board.rows().len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows * 2 + 2), // Grid
            Constraint::Min(5),               // Keyboard
        ])
        .split(area);

    let mut lines = Vec::with_capacity(board.rows().len() * 2);
    for (i, row) in board.rows().iter().enumerate() {
        let active = i == board.active_row() && !board.status().is_over();
        lines.push(row_line(row, active, app.router.invalid_notice()));
        lines.push(Line::from(""));
    }

    let title = format!(
        " {} letters | guess {}/{} ",
        board.word_length(),
        (board.attempts_used() + 1).min(board.max_attempts()),
        board.max_attempts()
    );
    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(board))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = WordLength::ALL
        .iter()
        .enumerate()
        .map(|(i, length)| {
            let text = format!(
                "{} {length}-letter words ({} answers)",
                if i == app.menu_selection { "▶" } else { " " },
                app.board.catalog().solution_count(*length)
            );
            let style = if i == app.menu_selection {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Word Length | ↑↓ Enter or 4/5/6 ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(menu, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(4),    // Distribution
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let rate = app.stats.win_rate();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(rate.clamp(0.0, 100.0) as u16)
        .label(format!(
            "{}/{} won | streak {} (best {})",
            app.stats.games_won,
            app.stats.total_games,
            app.stats.current_streak,
            app.stats.best_streak
        ));
    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let dist = &app.stats.guess_distribution;
    let max = dist.iter().copied().max().unwrap_or(0).max(1);

    let lines: Vec<Line> = (1..=app.board.max_attempts())
        .map(|guesses| {
            let count = dist.get(guesses).copied().unwrap_or(0);
            let width = count * 16 / max;
            Line::from(vec![
                Span::raw(format!("{guesses:2} ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Menu => "Mode: Menu",
        InputMode::Playing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(mode, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::Menu => "↑↓: Select | Enter: Start | Esc: Back | q: Quit",
        InputMode::Playing => "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Menu",
        InputMode::GameOver => "n: New Word | t: Try Again | m: Menu | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordCatalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_typed_letters() {
        let catalog = WordCatalog::from_words(&["crane"], &["trace"]);
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();
        for ch in "tra".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }

        let screen = rendered(&app);
        assert!(screen.contains("T   R   A"));
        assert!(screen.contains("Mode: Playing"));
    }

    #[test]
    fn draws_menu() {
        let catalog = WordCatalog::from_words(&["crane", "cake"], &["trace"]);
        let mut app = App::new(&catalog, GameConfig::default()).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        let screen = rendered(&app);
        assert!(screen.contains("4-letter words (1 answers)"));
        assert!(screen.contains("Mode: Menu"));
    }

    #[test]
    fn scored_tiles_are_colored() {
        assert_eq!(tile_style(LetterClassification::Correct).bg, Some(Color::Green));
        assert_eq!(tile_style(LetterClassification::WrongSpot).bg, Some(Color::Yellow));
        assert_eq!(tile_style(LetterClassification::Empty).bg, None);
    }
}
