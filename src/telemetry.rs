//! Telemetry helpers for binaries and applications embedding `scatter-rs`.
//!
//! Library code only emits `tracing` events. Installing a subscriber is left
//! to the host, or to `init_default_tracing` when the `telemetry` feature is on.

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// `default_filter` is used when `RUST_LOG` is unset or unparsable.
/// Returns `false` when the feature is disabled or a global subscriber already
/// exists.
#[must_use]
pub fn init_default_tracing(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}
