//! Log output for `launchtrk`.
//!
//! Two event streams matter here: per-request fetch events emitted by
//! [`crate::api`] and load outcomes emitted by [`crate::app`]. Verbosity
//! decides how much of each reaches stderr; stdout is reserved for the
//! rendered views.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Target prefix of fetch events (requests, responses, fetch failures).
pub const FETCH_TARGET: &str = "launchtracker::api";

/// Target prefix of load events (load summary, load failure).
pub const LOAD_TARGET: &str = "launchtracker::app";

const CRATE_TARGET: &str = "launchtracker";

/// How chatty logging is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Load outcomes and fetch failures.
    #[default]
    Normal,
    /// Every request and response size as well.
    Verbose,
    /// Everything, including the HTTP client's own events.
    Trace,
}

impl Verbosity {
    /// Map the `-v` count and `-q` flag to a verbosity; `-q` wins.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// Filter directives for this verbosity.
    #[must_use]
    pub fn directives(self) -> String {
        match self {
            Self::Quiet => format!("{CRATE_TARGET}=error"),
            Self::Normal => format!("{CRATE_TARGET}=warn,{LOAD_TARGET}=info"),
            Self::Verbose => format!("{CRATE_TARGET}=info,{FETCH_TARGET}=debug"),
            Self::Trace => format!("{CRATE_TARGET}=trace,reqwest=debug"),
        }
    }

    /// Build the filter, letting `RUST_LOG` take precedence when set.
    #[must_use]
    pub fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()))
    }
}

/// Install the global subscriber writing to stderr.
///
/// Later calls are no-ops.
///
/// ```no_run
/// use launchtracker::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(1, false));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let subscriber = tracing_subscriber::registry().with(verbosity.env_filter()).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbosity >= Verbosity::Verbose)
            .with_file(false)
            .with_line_number(false),
    );
    let _ = subscriber.try_init();
}
