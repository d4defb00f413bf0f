//! Tracing subscriber setup for the command line
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::Directive, prelude::*};

use crate::{Error, Result};

/// Install the global subscriber, writing to stderr so that command output
/// on stdout stays clean.
///
/// `RUST_LOG` is honoured; on top of it events at `info` and above are shown,
/// and with `verbose` the crate's own `debug` events as well.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let mut env_filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    if verbose {
        let directive: Directive = "pacai=debug".parse().map_err(|err| Error::Logging {
            message: format!("{err}"),
        })?;
        env_filter = env_filter.add_directive(directive);
    }

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        );

    tracing::subscriber::set_global_default(subscriber).map_err(|err| Error::Logging {
        message: err.to_string(),
    })
}
