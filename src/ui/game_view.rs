use crate::game::{column_label, Cell, GameState, GameStatus, PlayerId, HEIGHT, WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_state, chunks[3]);
}

fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => Color::Yellow,
        PlayerId::Two => Color::Red,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let player = game_state.active_player();

    let status = match game_state.status() {
        GameStatus::InProgress => format!(
            "Current Player: {} {}  |  Move {}",
            player.name(),
            player.token(),
            game_state.moves().len() + 1
        ),
        GameStatus::Won(owner) => format!("Game Over  |  {} wins", game_state.player(owner).name()),
        GameStatus::Drawn => "Game Over  |  Draw".to_string(),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player.id()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board = game_state.board();
    let winning_run = game_state.winning_run();
    let available = game_state.available_columns();
    let mut lines = Vec::new();

    // Column letters with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..WIDTH {
        let label = format!(" {} ", column_label(col).unwrap_or(' '));
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else if !available.contains(&col) {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Top row first; row 0 sits on the bottom border
    for row in (0..HEIGHT).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..WIDTH {
            let span = match board.get(col, row) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(owner) => {
                    let mut style = Style::default().fg(player_color(owner));
                    if winning_run.is_some_and(|run| run.contains((col, row))) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..WIDTH {
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

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter or A-G: Drop  |  R: Restart  |  Q: Quit");
    let mut line2 = Vec::new();
    for id in [PlayerId::One, PlayerId::Two] {
        let player = game_state.player(id);
        line2.push(Span::styled(
            "●",
            Style::default()
                .fg(player_color(id))
                .add_modifier(Modifier::BOLD),
        ));
        line2.push(Span::raw(format!(" {} ({})   ", player.name(), player.token())));
    }

    let controls = Paragraph::new(vec![line1, Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
