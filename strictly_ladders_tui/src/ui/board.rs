//! Snakes and ladders board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_ladders::{GRID_SIDE, GameSession, GridCoord, PlayerId, Redirect, Square};

/// Token colours, one per player.
pub const PLAYER_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

/// Columns per cell: three for the number, four for tokens, one gap.
const CELL_WIDTH: usize = 8;

/// Renders the 10x10 serpentine board with player tokens.
pub fn render_board(f: &mut Frame, area: Rect, session: &GameSession) {
    let lines: Vec<Line> = (0..GRID_SIDE)
        .rev()
        .map(|row| render_row(session, row))
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    f.render_widget(board, area);
}

fn render_row(session: &GameSession, row: u8) -> Line<'static> {
    let spans: Vec<Span> = (0..GRID_SIDE)
        .filter_map(|col| GridCoord::new(row, col))
        .flat_map(|coord| render_cell(session, Square::from_grid(coord)))
        .collect();
    Line::from(spans)
}

fn render_cell(session: &GameSession, square: Square) -> Vec<Span<'static>> {
    let number_style = match session.board().redirect(square) {
        Some(Redirect::Snake { .. }) => Style::default().fg(Color::LightRed),
        Some(Redirect::Ladder { .. }) => Style::default().fg(Color::LightGreen),
        None if square.value() % 2 == 0 => Style::default().fg(Color::Gray),
        None => Style::default().fg(Color::DarkGray),
    };

    let occupants = session.players_on(square);
    let mut spans = vec![Span::styled(format!("{:>3}", square.value()), number_style)];
    spans.extend(occupants.iter().map(|id| token(*id)));
    let used = 3 + occupants.len();
    spans.push(Span::raw(" ".repeat(CELL_WIDTH.saturating_sub(used))));
    spans
}

/// Coloured token for a player.
pub fn token(player: PlayerId) -> Span<'static> {
    Span::styled(
        "●",
        Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
    )
}

/// Colour used for a player's token and name.
pub fn player_color(player: PlayerId) -> Color {
    PLAYER_COLORS[player.index() % PLAYER_COLORS.len()]
}
