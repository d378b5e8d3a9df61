//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use parlor::app::App;
use parlor::selector::{ViewIdentity, ViewSelector};
use parlor::traits::StatusSource;
use parlor::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Every view the selector has asked to render, in order.
pub type RenderLog = Rc<RefCell<Vec<ViewIdentity>>>;

/// Mount a selector that records each render request.
pub fn recording_selector<S: StatusSource>(source: &S) -> (ViewSelector, RenderLog) {
    let log: RenderLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let selector = ViewSelector::mount_with(source, move |view| sink.borrow_mut().push(view));
    (selector, log)
}

/// Render the app into an 80x24 test buffer and return it as text.
pub fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
