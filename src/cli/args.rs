//! Command-line argument parsing for the parlor client.

use std::path::PathBuf;

use crate::error::{ParlorError, ParlorResult};

/// Options for launching the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiOptions {
    /// Initial raw session status (`--status`)
    pub status: Option<String>,
    /// Initial state snapshot file (`--state`)
    pub state_path: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(TuiOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags and stray arguments are rejected. `--version` and `--help`
/// win over any valid flags before or after them.
///
/// # Examples
///
/// ```
/// use parlor::cli::args::{parse_args, CliCommand, TuiOptions};
///
/// let args = vec!["parlor".to_string(), "--status".to_string(), "logged".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()).unwrap(),
///     CliCommand::RunTui(TuiOptions {
///         status: Some("logged".to_string()),
///         state_path: None,
///     })
/// );
/// ```
pub fn parse_args<I>(args: I) -> ParlorResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = TuiOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg, None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--status" => {
                options.status = Some(take_value(&flag, inline, &mut args)?);
            }
            "--state" => {
                options.state_path = Some(PathBuf::from(take_value(&flag, inline, &mut args)?));
            }
            other if other.starts_with('-') => {
                return Err(ParlorError::config(format!("unknown flag {}", other)));
            }
            other => {
                return Err(ParlorError::config(format!("unexpected argument {:?}", other)));
            }
        }
    }

    Ok(CliCommand::RunTui(options))
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> ParlorResult<String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| ParlorError::config(format!("{} requires a value", flag)))
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: parlor [OPTIONS]

Options:
  --status <VALUE>   Initial session status (logged, started, ...)
  --state <PATH>     Load initial state from a JSON snapshot
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  PARLOR_STATUS      Initial session status when --status is absent
  PARLOR_LOG         Log filter (default: parlor=info)
  PARLOR_LOG_FILE    Log file path";
