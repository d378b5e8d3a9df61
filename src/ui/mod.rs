//! UI rendering for the parlor client.
//!
//! [`render`] draws whichever view the selector picked, plus a one-line
//! footer with the raw status and the keys that view accepts. Each view is a
//! self-contained render function that knows nothing about selection.

mod game;
mod helpers;
mod lobby;
mod login;
mod theme;

pub use game::GAME_TITLE;
pub use helpers::{centered_rect, inner_rect, spinner_frame, SPINNER_FRAMES};
pub use lobby::LOBBY_TITLE;
pub use login::LOGIN_TITLE;
pub use theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_QUEUED};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::selector::ViewIdentity;
use game::render_game_screen;
use lobby::render_lobby_screen;
use login::render_login_screen;

/// ASCII logo on the identification screen.
pub const PARLOR_LOGO: [&str; 3] = [
    "┌─┐┌─┐┬─┐┬  ┌─┐┬─┐",
    "├─┘├─┤├┬┘│  │ │├┬┘",
    "┴  ┴ ┴┴└─┴─┘└─┘┴└─",
];

/// Render the view chosen by the selector.
pub fn render(frame: &mut Frame, app: &App) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match app.view() {
        ViewIdentity::Identification => render_login_screen(frame, body, app),
        ViewIdentity::Waiting => render_lobby_screen(frame, body, app),
        ViewIdentity::Active => render_game_screen(frame, body, app),
    }

    render_footer(frame, footer, app);
}

/// Key hints for a view.
pub fn keybind_hints(view: ViewIdentity) -> &'static str {
    match view {
        ViewIdentity::Identification => "[Enter] join  [Esc] quit",
        ViewIdentity::Waiting => "[s] start  [l] leave  [Esc] quit",
        ViewIdentity::Active => "[e] end game  [l] leave  [Esc] quit",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status().unwrap_or_else(|| "-".to_string());
    let line = Line::from(vec![
        Span::styled(format!(" status: {} ", status), Style::default().fg(COLOR_DIM)),
        Span::styled(keybind_hints(app.view()), Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
