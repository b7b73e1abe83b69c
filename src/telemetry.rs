//! Opt-in tracing setup for hosts embedding `chart-interact`.
//!
//! The controller only emits `tracing` events (`debug!` for viewport and
//! cursor changes, `trace!` for rejected input, `warn!` for registration
//! problems). Hosts either install their own subscriber or call one of the
//! helpers below with the `telemetry` feature enabled.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "chart_interact=info";

/// Installs a compact `fmt` subscriber honouring `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Like [`init_default_tracing`] with an explicit fallback directive such as
/// `"chart_interact=trace"`.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::init_default_tracing;

    #[test]
    fn tracing_stays_off_without_the_feature() {
        assert!(!init_default_tracing());
    }
}
