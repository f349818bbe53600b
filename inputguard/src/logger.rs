// inputguard/src/logger.rs
//! Logger setup for the `inputguard` binary.
//!
//! Library code only talks to the `log` facade; this is the one place a
//! backend is installed. `RUST_LOG` is honoured unless the command line
//! forces a level with `--quiet` or `--debug`.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Level used when neither `RUST_LOG` nor a flag says otherwise.
const DEFAULT_FILTER: &str = "warn";

/// Picks the forced level for the `--quiet` / `--debug` flags.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

/// Installs `env_logger` writing to stderr. Calling it twice is harmless.
pub fn init_logger(forced_level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.target(Target::Stderr).format_timestamp(None);
    if let Some(level) = forced_level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        assert_eq!(level_for_flags(true, false), Some(LevelFilter::Off));
        assert_eq!(level_for_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_for_flags(false, false), None);
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logger(Some(LevelFilter::Off));
        init_logger(None);
    }
}
