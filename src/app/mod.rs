//! Application state for the TUI host.
//!
//! [`App`] owns the [`Store`] and a mounted [`ViewSelector`]. The selector's
//! render request sets the dirty flag; the event loop redraws only when it is
//! set.

mod handlers;

use std::cell::Cell;
use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use crate::selector::{ViewIdentity, ViewSelector};
use crate::store::{Store, StoreAction};
use crate::traits::StatusSource;

/// Widest name accepted on the identification screen, in terminal columns.
pub const MAX_NAME_WIDTH: usize = 24;

/// Main application state.
pub struct App {
    /// Shared state container
    pub store: Store,
    /// Picks the top-level view from the store's status
    selector: ViewSelector,
    /// Set by the selector on every evaluation and by local edits
    redraw: Rc<Cell<bool>>,
    /// Name being typed on the identification screen
    pub name_input: String,
    /// Name the user identified with
    pub player_name: Option<String>,
    /// Tick counter for the lobby spinner
    pub tick_count: u64,
    /// Flag indicating if the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app and mount the selector on `store`.
    pub fn new(store: Store) -> Self {
        let redraw = Rc::new(Cell::new(false));
        let flag = Rc::clone(&redraw);
        let selector = ViewSelector::mount_with(&store, move |_| flag.set(true));

        Self {
            store,
            selector,
            redraw,
            name_input: String::new(),
            player_name: None,
            tick_count: 0,
            should_quit: false,
        }
    }

    /// The view to draw.
    pub fn view(&self) -> ViewIdentity {
        self.selector.current()
    }

    /// Read access to the selector, for diagnostics and tests.
    pub fn selector(&self) -> &ViewSelector {
        &self.selector
    }

    /// Raw status as held by the store.
    pub fn status(&self) -> Option<String> {
        self.store.status()
    }

    /// Whether the next loop iteration must redraw.
    pub fn needs_redraw(&self) -> bool {
        self.redraw.get()
    }

    /// Request a redraw.
    pub fn mark_dirty(&self) {
        self.redraw.set(true);
    }

    /// Clear the redraw flag after drawing.
    pub fn clear_redraw(&self) {
        self.redraw.set(false);
    }

    /// Advance animations. Only the lobby animates.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view() == ViewIdentity::Waiting {
            self.mark_dirty();
        }
    }

    /// Append a character to the name, up to [`MAX_NAME_WIDTH`] columns.
    pub fn push_name_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let mut candidate = self.name_input.clone();
        candidate.push(c);
        if candidate.width() <= MAX_NAME_WIDTH {
            self.name_input = candidate;
            self.mark_dirty();
        }
    }

    /// Remove the last character of the name.
    pub fn pop_name_char(&mut self) {
        if self.name_input.pop().is_some() {
            self.mark_dirty();
        }
    }

    /// Identify with the typed name. Returns false if the name is blank.
    pub fn submit_name(&mut self) -> bool {
        let name = self.name_input.trim();
        if name.is_empty() {
            return false;
        }
        tracing::info!(name, "App: identified");
        self.player_name = Some(name.to_string());
        self.name_input.clear();
        self.store.dispatch(StoreAction::LoggedIn);
        true
    }

    /// Leave the session entirely.
    pub fn log_out(&mut self) {
        self.player_name = None;
        self.store.dispatch(StoreAction::LoggedOut);
    }

    /// Stop the client and release the selector's subscription.
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.selector.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn test_new_app_starts_on_identification() {
        let app = App::new(Store::new());
        assert_eq!(app.view(), ViewIdentity::Identification);
        assert!(app.needs_redraw(), "initial evaluation requests a render");
    }

    #[test]
    fn test_new_app_respects_seeded_status() {
        let app = App::new(Store::with_state(AppState::with_status("started")));
        assert_eq!(app.view(), ViewIdentity::Active);
    }

    #[test]
    fn test_store_change_marks_dirty() {
        let app = App::new(Store::new());
        app.clear_redraw();

        app.store.dispatch(StoreAction::LoggedIn);
        assert!(app.needs_redraw());
        assert_eq!(app.view(), ViewIdentity::Waiting);
    }

    #[test]
    fn test_submit_name_logs_in() {
        let mut app = App::new(Store::new());
        for c in "  ada ".chars() {
            app.push_name_char(c);
        }
        assert!(app.submit_name());
        assert_eq!(app.player_name.as_deref(), Some("ada"));
        assert!(app.name_input.is_empty());
        assert_eq!(app.status().as_deref(), Some("logged"));
        assert_eq!(app.view(), ViewIdentity::Waiting);
    }

    #[test]
    fn test_submit_blank_name_is_rejected() {
        let mut app = App::new(Store::new());
        app.push_name_char(' ');
        assert!(!app.submit_name());
        assert_eq!(app.status(), None);
        assert_eq!(app.view(), ViewIdentity::Identification);
    }

    #[test]
    fn test_name_width_limit() {
        let mut app = App::new(Store::new());
        for _ in 0..(MAX_NAME_WIDTH + 5) {
            app.push_name_char('x');
        }
        assert_eq!(app.name_input.len(), MAX_NAME_WIDTH);

        let mut app = App::new(Store::new());
        for _ in 0..MAX_NAME_WIDTH {
            app.push_name_char('界');
        }
        assert_eq!(app.name_input.width(), MAX_NAME_WIDTH);
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut app = App::new(Store::new());
        app.push_name_char('\t');
        assert!(app.name_input.is_empty());
    }

    #[test]
    fn test_tick_redraws_only_in_lobby() {
        let mut app = App::new(Store::new());
        app.clear_redraw();
        app.tick();
        assert!(!app.needs_redraw());

        app.store.dispatch(StoreAction::LoggedIn);
        app.clear_redraw();
        app.tick();
        assert!(app.needs_redraw());
        assert_eq!(app.tick_count, 2);
    }

    #[test]
    fn test_quit_unmounts_selector() {
        let mut app = App::new(Store::new());
        assert_eq!(app.store.listener_count(), 1);

        app.quit();
        assert!(app.should_quit);
        assert!(!app.selector().is_mounted());
        assert_eq!(app.store.listener_count(), 0);

        app.store.dispatch(StoreAction::GameStarted);
        assert_eq!(app.view(), ViewIdentity::Identification);
    }

    #[test]
    fn test_log_out_clears_name() {
        let mut app = App::new(Store::new());
        app.push_name_char('a');
        app.submit_name();
        app.log_out();
        assert_eq!(app.player_name, None);
        assert_eq!(app.view(), ViewIdentity::Identification);
    }
}
