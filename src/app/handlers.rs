//! Key handling for the App.
//!
//! Each view owns its keys. Handlers only dispatch store actions; the view
//! switch happens when the selector hears the resulting status change.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::selector::ViewIdentity;
use crate::store::StoreAction;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "App: key");

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Esc => {
                self.quit();
                return;
            }
            _ => {}
        }

        match self.view() {
            ViewIdentity::Identification => self.handle_identification_key(key),
            ViewIdentity::Waiting => self.handle_waiting_key(key),
            ViewIdentity::Active => self.handle_active_key(key),
        }
    }

    fn handle_identification_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_name();
            }
            KeyCode::Backspace => self.pop_name_char(),
            KeyCode::Char(c) => self.push_name_char(c),
            _ => {}
        }
    }

    fn handle_waiting_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => {
                self.store.dispatch(StoreAction::GameStarted);
            }
            KeyCode::Char('l') => self.log_out(),
            _ => {}
        }
    }

    fn handle_active_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') => {
                self.store.dispatch(StoreAction::GameEnded);
            }
            KeyCode::Char('l') => self.log_out(),
            _ => {}
        }
    }
}
