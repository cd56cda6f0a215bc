//! Command-line argument parsing.

use crate::theme::Theme;

/// Overrides accepted when launching the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// GitHub account whose stats and projects are shown.
    pub user: Option<String>,
    /// Theme for this session, ignoring the stored preference.
    pub theme: Option<Theme>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the TUI (default)
    RunTui(RunOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

pub const USAGE: &str = "usage: folio [--version|-V] [--help|-h] [--user NAME] [--theme light|dark]";

/// Parse arguments, skipping the program name.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "-V".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--user" | "-u" => match args.next() {
                Some(user) if !user.trim().is_empty() => options.user = Some(user),
                _ => return CliCommand::Invalid("--user needs a GitHub username".to_string()),
            },
            "--theme" => match args.next().map(|value| value.parse::<Theme>()) {
                Some(Ok(theme)) => options.theme = Some(theme),
                Some(Err(e)) => return CliCommand::Invalid(e),
                None => return CliCommand::Invalid("--theme needs light or dark".to_string()),
            },
            other => {
                if let Some(user) = other.strip_prefix("--user=") {
                    options.user = Some(user.to_string());
                } else if let Some(theme) = other.strip_prefix("--theme=") {
                    match theme.parse::<Theme>() {
                        Ok(theme) => options.theme = Some(theme),
                        Err(e) => return CliCommand::Invalid(e),
                    }
                } else {
                    return CliCommand::Invalid(format!("unexpected argument '{}'", other));
                }
            }
        }
    }

    CliCommand::RunTui(options)
}
