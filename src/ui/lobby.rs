//! Waiting view: the user is identified and waits for a game.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_BORDER, COLOR_HEADER, COLOR_QUEUED};
use crate::app::App;

/// Title shown on the lobby panel.
pub const LOBBY_TITLE: &str = " Lobby ";

pub fn render_lobby_screen(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(LOBBY_TITLE)
        .title_style(Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name = app.player_name.as_deref().unwrap_or("guest");
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome, {}", name),
            Style::default().fg(COLOR_HEADER),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Waiting for the game to start", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_QUEUED),
        )),
    ];

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, centered_rect(inner, inner.width, 3));
}
