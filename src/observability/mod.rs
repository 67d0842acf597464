//! Logging setup.
//!
//! All diagnostics go through the `log` facade and are written to stderr by
//! `env_logger`, so stdout stays clean for command output (JSON included).
//!
//! ## Usage
//!
//! ```ignore
//! use caesar::observability::init_logging;
//!
//! fn main() {
//!     init_logging(0);
//!     // ... rest of application
//! }
//! ```

use log::LevelFilter;

/// Map the `-v` count to a log level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise the global logger.
///
/// `RUST_LOG`, when set, overrides the level derived from `verbosity`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .parse_env(env_logger::Env::default())
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
