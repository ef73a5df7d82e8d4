//! Logger setup: `log` records rendered by env_logger on stdout.
//!
//! Info lines print bare so `log::info!` can double as plain output;
//! warnings and errors get a colored prefix. `RUST_LOG` still overrides
//! the level picked from the flags.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn init(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Debug | Level::Trace => writeln!(
                buf,
                "{}",
                format!("[{}] {}", record.target(), record.args())
                    .if_supports_color(Stdout, |t| t.dimmed())
            ),
        });

    // A logger may already be installed (tests); keep the first one.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Warn);
        assert_eq!(level_for(true, true), LevelFilter::Warn);
    }
}
