//! # Modulo App
//!
//! The interactive editing session and the `modulo` command-line front end.

pub mod cli;
pub mod session;

pub use cli::{execute, Cli, CliError, Command};
pub use session::{DragOutcome, DropOutcome, Session, SessionError};

/// Run a parsed command line against stdout.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}
