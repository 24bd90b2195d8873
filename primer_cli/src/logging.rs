//! Logging for the Primer binaries.
//!
//! `primer_core` emits `tracing` events: debug events for each calculation,
//! warnings when a division or overflow policy lets a special value or a
//! clamped sum through. Events are written to stderr, so stdout holds only
//! prompts and results, and tests comparing stdout are not disturbed.
//!
//! The level comes from `RUST_LOG` and defaults to `warn`:
//!
//! ```bash
//! RUST_LOG=primer_core=debug cargo run --bin gravity
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls leave the first one in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::warn!("logging initialized");
    }
}
