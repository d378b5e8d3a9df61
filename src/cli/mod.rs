//! CLI module for parlor.
//!
//! Call the dispatcher early in main(), before any terminal setup:
//!
//! ```ignore
//! use parlor::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(options) = run_cli_command(command) {
//!     // launch the TUI with `options`
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, TuiOptions, USAGE};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the TUI options when the command is `RunTui`. `Version` and
/// `Help` print and exit the process.
pub fn run_cli_command(command: CliCommand) -> Option<TuiOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            std::process::exit(0)
        }
        CliCommand::RunTui(options) => Some(options),
    }
}
