//! End-to-end flows through the App: keys in, rendered view out.

mod common;

use common::render_to_string;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parlor::app::App;
use parlor::selector::ViewIdentity;
use parlor::state::AppState;
use parlor::store::{Store, StoreAction};
use parlor::ui::{GAME_TITLE, LOBBY_TITLE, LOGIN_TITLE};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_join_start_end_leave() {
    let mut app = App::new(Store::new());
    assert!(render_to_string(&app).contains(LOGIN_TITLE.trim()));

    for c in "mia".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    let screen = render_to_string(&app);
    assert!(screen.contains(LOBBY_TITLE.trim()));
    assert!(screen.contains("Welcome, mia"));

    press(&mut app, KeyCode::Char('s'));
    let screen = render_to_string(&app);
    assert!(screen.contains(GAME_TITLE.trim()));
    assert!(screen.contains("Playing as mia"));

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.view(), ViewIdentity::Waiting);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.view(), ViewIdentity::Identification);
    assert!(render_to_string(&app).contains(LOGIN_TITLE.trim()));
}

#[test]
fn test_external_status_change_switches_view() {
    let app = App::new(Store::new());
    let handle = app.store.clone();
    app.clear_redraw();

    handle.dispatch(StoreAction::GameStarted);

    assert!(app.needs_redraw());
    assert_eq!(app.view(), ViewIdentity::Active);
}

#[test]
fn test_unknown_status_falls_back_to_identification() {
    let app = App::new(Store::with_state(AppState::with_status("spectating")));
    assert_eq!(app.view(), ViewIdentity::Identification);
    let screen = render_to_string(&app);
    assert!(screen.contains(LOGIN_TITLE.trim()));
    assert!(screen.contains("status: spectating"));
}

#[test]
fn test_quit_tears_down_selector() {
    let mut app = App::new(Store::new());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit);
    assert_eq!(app.store.listener_count(), 0);
}
