use parlor::app::App;
use parlor::cli::{parse_args, run_cli_command};
use parlor::startup::{init_tracing, StartupConfig};
use parlor::store::Store;
use parlor::terminal::{setup_panic_hook, TerminalManager};
use parlor::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// Animation tick for the lobby spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    let options = match parse_args(std::env::args()) {
        Ok(command) => match run_cli_command(command) {
            Some(options) => options,
            None => return Ok(()),
        },
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = StartupConfig::from_env().with_cli_options(options);
    let log = init_tracing(&config)?;
    let initial_state = config.resolve_initial_state()?;
    tracing::info!(
        status = ?initial_state.session.status,
        log_file = %log.path().display(),
        "parlor starting"
    );

    setup_panic_hook();

    // Single-threaded: the store and selector are Rc-based
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::new(Store::with_state(initial_state));
    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    term_manager.restore();

    tracing::info!("parlor exiting");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        if app.needs_redraw() {
            terminal.draw(|f| ui::render(f, app))?;
            app.clear_redraw();
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        app.quit();
                    }
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
