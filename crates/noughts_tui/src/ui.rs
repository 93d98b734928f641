//! Stateless rendering for the terminal session.

use crate::app::{App, Phase};
use noughts_engine::{Board, Cell, Square, Token};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders one frame of the session.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board or token prompt
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.phase() {
        Phase::ChoosingToken => draw_token_prompt(frame, chunks[1]),
        Phase::Playing(state) => draw_board(frame, chunks[1], state.board(), Some(app.cursor())),
        Phase::Over(state, _) => draw_board(frame, chunks[1], state.board(), None),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_token_prompt(frame: &mut Frame, area: Rect) {
    let prompt = Paragraph::new(vec![
        Line::from("Which token will you play?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("x", token_style(Token::X)),
            Span::raw("  or  "),
            Span::styled("o", token_style(Token::O)),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, center_rect(area, 40, 3));
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Cell>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(
        frame,
        rows[0],
        board,
        cursor,
        [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    );
    draw_separator(frame, rows[1]);
    draw_row(
        frame,
        rows[2],
        board,
        cursor,
        [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    );
    draw_separator(frame, rows[3]);
    draw_row(
        frame,
        rows[4],
        board,
        cursor,
        [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    );
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Cell>, cells: [Cell; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_square(frame, cols[0], board, cursor, cells[0]);
    draw_vertical_separator(frame, cols[1]);
    draw_square(frame, cols[2], board, cursor, cells[1]);
    draw_vertical_separator(frame, cols[3]);
    draw_square(frame, cols[4], board, cursor, cells[2]);
}

fn draw_square(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Cell>, cell: Cell) {
    // Empty squares show the index you would type to take them.
    let (text, base_style) = match board.square(cell) {
        Square::Empty => (
            cell.index().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Marked(token) => (token.as_char().to_string(), token_style(token)),
    };

    let style = if cursor == Some(cell) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let square = Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(square, area);
}

fn token_style(token: Token) -> Style {
    let color = match token {
        Token::X => Color::Blue,
        Token::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
