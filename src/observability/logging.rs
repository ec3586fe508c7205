//! Logging setup for annotation runs.
//!
//! Everything is written to stderr. Verbosity flags raise the level of this
//! crate only; dependencies stay at `warn` unless
//! `COMPETENCY_ANNOTATOR_LOG_LEVEL` says otherwise.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding a full `EnvFilter` directive. Wins over `-v`.
pub const LOG_LEVEL_ENV: &str = "COMPETENCY_ANNOTATOR_LOG_LEVEL";

const CRATE_TARGET: &str = "competency_annotator";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact lines without timestamps.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Level for this crate's events at a given `-v` count. Saturates at
/// `trace`.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive for a `-v` count: `warn` globally, with this crate
/// raised to the requested level.
#[must_use]
pub fn filter_directive(verbosity: u8) -> String {
    match verbosity {
        0 => "warn".to_string(),
        v => format!("warn,{CRATE_TARGET}={}", verbosity_to_directive(v)),
    }
}

/// Whether human output gets ANSI colors. `auto` needs a terminal on
/// stderr and no `NO_COLOR`.
#[must_use]
pub const fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber. A second call is ignored.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    // module paths only help when chasing a single row through the pass
    let show_target = verbosity >= 3;

    let _ = match format {
        LogFormat::Human => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(use_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ))
            .with_target(show_target)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(show_target)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_default_is_plain_warn() {
        assert_eq!(filter_directive(0), "warn");
    }

    #[test]
    fn verbosity_raises_only_this_crate() {
        assert_eq!(filter_directive(1), "warn,competency_annotator=info");
        assert_eq!(filter_directive(2), "warn,competency_annotator=debug");
        assert_eq!(filter_directive(9), "warn,competency_annotator=trace");
    }

    #[test]
    fn directives_parse_as_env_filters() {
        for v in 0..4 {
            assert!(EnvFilter::try_new(filter_directive(v)).is_ok());
        }
    }

    #[test]
    fn ansi_auto_needs_terminal_and_no_no_color() {
        assert!(use_ansi(ColorChoice::Auto, true, false));
        assert!(!use_ansi(ColorChoice::Auto, false, false));
        assert!(!use_ansi(ColorChoice::Auto, true, true));
    }

    #[test]
    fn ansi_explicit_choice_wins() {
        assert!(use_ansi(ColorChoice::Always, false, true));
        assert!(!use_ansi(ColorChoice::Never, true, false));
    }

    #[test]
    fn repeated_init_is_ignored() {
        init_logging(LogFormat::Human, 0, ColorChoice::Never);
        init_logging(LogFormat::Json, 3, ColorChoice::Never);
    }
}
