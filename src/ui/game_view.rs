use crate::game::{Board, Cell, GameSession, Player};
use crate::ui::ScoreBoard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    scores: &ScoreBoard,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Scores
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session.board(), selected_column, chunks[1]);
    render_scores(frame, scores, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let current_player = session.current_player();

    let status = if session.is_finished() {
        "Game Over".to_string()
    } else {
        format!("Current Player: Player {}", current_player.number())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(width * 3))));

    // Board rows, row 0 at the top
    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let cell = board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One => (" ● ", player_color(Player::One)),
                Cell::Two => (" ● ", player_color(Player::Two)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(width * 3))));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_scores(frame: &mut Frame, scores: &ScoreBoard, area: ratatui::layout::Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("Player 1 Wins: {}", scores.wins(Player::One)),
            Style::default()
                .fg(player_color(Player::One))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Player 2 Wins: {}", scores.wins(Player::Two)),
            Style::default()
                .fg(player_color(Player::Two))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let score_widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(score_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: New Game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
