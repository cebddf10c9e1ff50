// Progress Indicator - app/args.rs
//
// Command line handling. The watcher needs exactly one thing, the path from
// `--watchfile=PATH`; anything else routes to the usage display instead.

use crate::util::constants;
use crate::util::error::WatchError;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// ProgressIndicator - shows the latest line of a log file in a small
/// floating window, updating live as the file grows.
#[derive(Parser, Debug)]
#[command(name = "progress-indicator", version, about)]
pub struct Cli {
    /// Log file to watch. Created (with parent directories) if missing.
    #[arg(long = "watchfile", value_name = "PATH")]
    pub watchfile: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

/// What the binary should show.
#[derive(Debug, PartialEq, Eq)]
pub enum LaunchMode {
    /// Watch this (non-empty) path.
    Watch(PathBuf),
    /// Show the usage window; `reason` is logged.
    Usage { reason: String },
}

/// Parsed launch request.
#[derive(Debug)]
pub struct Launch {
    pub mode: LaunchMode,
    pub debug: bool,
}

/// Parse process arguments (including the program name) into a `Launch`.
///
/// `--help` and `--version` are printed by clap and exit the process.
/// Every other parse problem becomes `LaunchMode::Usage`; a `-d`/`--debug`
/// among the rejected arguments still turns on debug logging.
pub fn parse_args<I, T>(args: I) -> Launch
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(args.iter().cloned()) {
        Ok(cli) => Launch {
            mode: resolve_mode(cli.watchfile),
            debug: cli.debug,
        },
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Launch {
            mode: LaunchMode::Usage {
                reason: WatchError::InvalidArgument {
                    reason: e
                        .kind()
                        .as_str()
                        .unwrap_or("unrecognised arguments")
                        .to_string(),
                }
                .to_string(),
            },
            debug: args.iter().skip(1).any(|a| a == "-d" || a == "--debug"),
        },
    }
}

fn resolve_mode(watchfile: Option<String>) -> LaunchMode {
    match watchfile {
        Some(path) if !path.is_empty() => LaunchMode::Watch(PathBuf::from(path)),
        Some(_) => LaunchMode::Usage {
            reason: WatchError::InvalidArgument {
                reason: format!("empty value after {}", constants::WATCHFILE_PREFIX),
            }
            .to_string(),
        },
        None => LaunchMode::Usage {
            reason: WatchError::InvalidArgument {
                reason: format!("missing {}PATH", constants::WATCHFILE_PREFIX),
            }
            .to_string(),
        },
    }
}

/// Console usage text, printed alongside the usage window.
pub fn usage_text() -> String {
    format!(
        "{name} - {tagline}\n\
         \n\
         Usage:\n  {usage}\n\
         \n\
         Description:\n  \
         Shows real-time updates from the specified log file in a floating window.\n  \
         The window displays the most recent line from the log file.\n  \
         {exit}.\n\
         \n\
         Example:\n  {example}\n",
        name = constants::APP_NAME,
        tagline = constants::APP_TAGLINE,
        usage = constants::USAGE_LINE,
        exit = constants::EXIT_HINT,
        example = constants::USAGE_EXAMPLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchfile_equals_form() {
        let launch = parse_args(["progress-indicator", "--watchfile=/tmp/p.log"]);
        assert_eq!(launch.mode, LaunchMode::Watch(PathBuf::from("/tmp/p.log")));
        assert!(!launch.debug);
    }

    #[test]
    fn test_debug_flag() {
        let launch = parse_args(["progress-indicator", "--watchfile=rel/p.log", "--debug"]);
        assert_eq!(launch.mode, LaunchMode::Watch(PathBuf::from("rel/p.log")));
        assert!(launch.debug);
    }

    #[test]
    fn test_missing_argument_shows_usage() {
        let launch = parse_args(["progress-indicator"]);
        assert!(matches!(launch.mode, LaunchMode::Usage { .. }));
    }

    #[test]
    fn test_empty_value_shows_usage() {
        let launch = parse_args(["progress-indicator", "--watchfile="]);
        assert!(matches!(launch.mode, LaunchMode::Usage { .. }));
    }

    #[test]
    fn test_bare_path_without_prefix_shows_usage() {
        let launch = parse_args(["progress-indicator", "/tmp/p.log"]);
        assert!(matches!(launch.mode, LaunchMode::Usage { .. }));
    }

    #[test]
    fn test_debug_survives_rejected_arguments() {
        let launch = parse_args(["progress-indicator", "--debug", "bogus"]);
        assert!(matches!(launch.mode, LaunchMode::Usage { .. }));
        assert!(launch.debug);

        let launch = parse_args(["progress-indicator", "bogus"]);
        assert!(!launch.debug);
    }

    #[test]
    fn test_usage_text_mentions_flag_and_example() {
        let text = usage_text();
        assert!(text.contains(constants::USAGE_LINE));
        assert!(text.contains(constants::USAGE_EXAMPLE));
    }
}
