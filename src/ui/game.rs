//! Active view: a game session is in progress.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::inner_rect;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER};
use crate::app::App;

/// Title shown on the game panel.
pub const GAME_TITLE: &str = " Game ";

pub fn render_game_screen(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(GAME_TITLE)
        .title_style(Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name = app.player_name.as_deref().unwrap_or("guest");
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "● Session in progress",
            Style::default().fg(COLOR_ACTIVE),
        )),
        Line::from(""),
        Line::from(format!("Playing as {}", name)),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(body, inner_rect(inner, 1));
}
