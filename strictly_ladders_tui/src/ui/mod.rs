//! UI rendering using ratatui.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_ladders::{GameSession, TurnPhase};

pub use board::{player_color, render_board, token};

/// Turns listed in the side panel.
const RECENT_TURNS: usize = 6;

/// Draws the main UI.
pub fn draw(f: &mut Frame, session: &GameSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Strictly Ladders - Snakes and Ladders")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(84), Constraint::Length(34)])
        .split(chunks[1]);
    render_board(f, body[0], session);
    render_controls(f, body[1], session);

    let status = Paragraph::new(session.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = if session.is_started() {
        "Space: Roll | R: Restart | Q: Quit"
    } else {
        "Space: Roll | 2-4: Players | R: Restart | Q: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn render_controls(f: &mut Frame, area: Rect, session: &GameSession) {
    let mut lines = Vec::new();

    let face = session
        .die_face()
        .map_or_else(|| "  ".to_string(), |face| format!("{} {}", face.pips(), face));
    lines.push(Line::from(vec![Span::raw("Die: "), Span::styled(face, bold())]));

    let turn = match session.phase() {
        TurnPhase::Finished => Line::from("Game over"),
        _ if !session.is_started() => Line::from("Start the game by rolling the dice!"),
        TurnPhase::Rolling => Line::from("Rolling..."),
        TurnPhase::AwaitingRoll => {
            let current = session.current_player();
            Line::from(vec![
                Span::raw("Current Turn: "),
                Span::styled(
                    current.to_string(),
                    bold().fg(player_color(current)),
                ),
            ])
        }
    };
    lines.push(turn);
    lines.push(Line::from(""));

    for player in session.player_count().players() {
        let square = session
            .position(player)
            .map_or_else(String::new, |sq| sq.to_string());
        lines.push(Line::from(vec![
            token(player),
            Span::raw(format!(" {} on {}", player, square)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("■", Style::default().fg(Color::LightRed)),
        Span::raw(" Snake  "),
        Span::styled("■", Style::default().fg(Color::LightGreen)),
        Span::raw(" Ladder"),
    ]));
    lines.push(Line::from(""));

    let history = session.history();
    for record in history.iter().rev().take(RECENT_TURNS) {
        let resolution = record.resolution();
        lines.push(Line::from(format!(
            "#{} {} rolled {}: {} -> {}",
            record.turn(),
            record.player(),
            resolution.steps(),
            resolution.origin(),
            resolution.new_square()
        )));
    }

    let controls = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Game Controls"),
    );
    f.render_widget(controls, area);
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
