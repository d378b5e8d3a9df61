//! Identification view: the user types a name to enter the lobby.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use super::PARLOR_LOGO;
use crate::app::App;

/// Title shown on the identification dialog.
pub const LOGIN_TITLE: &str = " Identify ";

pub fn render_login_screen(frame: &mut Frame, area: Rect, app: &App) {
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let logo_area = Rect::new(inner.x, inner.y + 1, inner.width, PARLOR_LOGO.len() as u16)
        .intersection(inner);
    let logo = Paragraph::new(PARLOR_LOGO.join("\n"))
        .style(Style::default().fg(COLOR_HEADER))
        .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let dialog_area = centered_rect(inner, 40, 7);
    let dialog_block = Block::default()
        .title(LOGIN_TITLE)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = vec![
        Line::from("Enter a name to join the lobby"),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(COLOR_DIM)),
            Span::styled(app.name_input.as_str(), Style::default().fg(COLOR_ACCENT)),
            Span::styled("_", Style::default().fg(COLOR_DIM)),
        ]),
    ];

    let para = Paragraph::new(lines)
        .block(dialog_block)
        .alignment(Alignment::Center);
    frame.render_widget(para, dialog_area);
}
