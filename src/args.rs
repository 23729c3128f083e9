//! Command-line argument parsing and processing.
//!
//! The functional surface takes no arguments; only the standard help,
//! version, and debug flags are recognized, with unknown options falling
//! back to the help display.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the normal application with these settings
    Run { debug_enabled: bool },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;

        for arg in args.into_iter().skip(1) {
            match arg.as_ref() {
                "--debug" | "-d" => debug_enabled = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" => display_version = true,
                _ => unknown_arg_found = true,
            }
        }

        let action = if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else if display_version {
            CliAction::ShowVersion
        } else {
            CliAction::Run { debug_enabled }
        };

        ParsedArgs { action }
    }
}

/// Print usage information.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: greetr [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-d, --debug      Enable detailed debug output");
    log_indented!("-h, --help       Display this help message");
    log_indented!("-V, --version    Display version information");
    log_end!();
}

/// Print version information.
pub fn display_version() {
    log_version!();
    log_block_start!("Time-of-day greeting and terminal theme switcher");
    log_indented!("driven by local sunrise and sunset times");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        ParsedArgs::parse(std::iter::once("greetr").chain(args.iter().copied())).action
    }

    #[test]
    fn no_arguments_runs_normally() {
        assert_eq!(
            parse(&[]),
            CliAction::Run {
                debug_enabled: false
            }
        );
    }

    #[test]
    fn debug_flag_is_recognized() {
        assert_eq!(
            parse(&["--debug"]),
            CliAction::Run {
                debug_enabled: true
            }
        );
        assert_eq!(
            parse(&["-d"]),
            CliAction::Run {
                debug_enabled: true
            }
        );
    }

    #[test]
    fn help_and_version_flags() {
        assert_eq!(parse(&["--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn help_takes_precedence_over_version() {
        assert_eq!(parse(&["--version", "--help"]), CliAction::ShowHelp);
    }

    #[test]
    fn unknown_arguments_show_help() {
        assert_eq!(parse(&["--frobnicate"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["-d", "extra"]), CliAction::ShowHelpDueToError);
    }
}
