//! Command-line interface: argument parsing and the commands that exit before the TUI starts.
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};

/// Handle commands that do not start the TUI.
///
/// Returns the process exit code, or `None` when the TUI should run.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("folio: {}\n{}", reason, USAGE);
            Some(2)
        }
        CliCommand::RunTui(_) => None,
    }
}
