//! CLI argument definitions using clap.

use std::io::{self, IsTerminal};

use clap::Parser;

/// bambu-link CLI - generate bambu:///tutk stream URLs from the Bambu cloud
#[derive(Parser, Debug)]
#[command(name = "bambu-link-cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Printer serial for non-interactive selection
    #[arg(short, long)]
    pub serial: Option<String>,

    /// Suppress narration (implies non-interactive); print only the URL
    #[arg(short, long)]
    pub quiet: bool,

    /// Run the interactive login flow and exit
    #[arg(long)]
    pub login: bool,

    /// List printers as "<serial> <name>" lines and exit
    #[arg(long)]
    pub discover: bool,

    /// Dump diagnostic payloads (full credential JSON) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the run talks to the user, resolved once at startup and threaded
/// through the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Attached to a terminal: narration, prompts, framed report.
    Interactive,
    /// Scripted: stdout carries exactly the URL.
    Scripted,
}

impl Cli {
    /// Resolve interactivity from the flag surface and the terminal.
    pub fn run_mode(&self) -> RunMode {
        self.run_mode_with_tty(io::stdin().is_terminal())
    }

    fn run_mode_with_tty(&self, stdin_is_tty: bool) -> RunMode {
        if self.serial.is_some() || self.quiet || self.discover || !stdin_is_tty {
            RunMode::Scripted
        } else {
            RunMode::Interactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bambu-link-cli").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_default_flags() {
        let cli = parse(&[]);
        assert!(cli.serial.is_none());
        assert!(!cli.quiet);
        assert!(!cli.login);
        assert!(!cli.discover);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_serial_short_and_long() {
        assert_eq!(parse(&["-s", "ABC"]).serial.as_deref(), Some("ABC"));
        assert_eq!(parse(&["--serial", "ABC"]).serial.as_deref(), Some("ABC"));
    }

    #[test]
    fn test_interactive_requires_tty_and_no_flags() {
        assert_eq!(parse(&[]).run_mode_with_tty(true), RunMode::Interactive);
        assert_eq!(parse(&[]).run_mode_with_tty(false), RunMode::Scripted);
    }

    #[test]
    fn test_any_scripting_flag_forces_scripted() {
        assert_eq!(
            parse(&["--serial", "X"]).run_mode_with_tty(true),
            RunMode::Scripted
        );
        assert_eq!(parse(&["--quiet"]).run_mode_with_tty(true), RunMode::Scripted);
        assert_eq!(
            parse(&["--discover"]).run_mode_with_tty(true),
            RunMode::Scripted
        );
    }
}
