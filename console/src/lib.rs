//! Shared plumbing for the lab console programs
//!
//! Provides:
//! - `config.toml` loading
//! - tracing initialization (logs go to stderr, the dialogue owns stdout)
//! - prompt / read-line helpers over any `BufRead` + `Write`

pub mod config;
pub mod error;
pub mod prompt;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{ConsoleError, Result};
pub use prompt::{ask, prompt, read_line};

/// Initialize tracing/logging with the given filter level.
///
/// `RUST_LOG` wins over `filter` when set.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
