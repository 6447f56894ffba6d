//! Opt-in tracing bootstrap for hosts embedding the kernel.
//!
//! Nothing here installs itself implicitly. Hosts that already run their own
//! `tracing` subscriber keep it; `init_default_tracing` is for thin callers
//! that want the kernel's range and ruler events on stderr without wiring a
//! subscriber stack themselves.

/// Installs a compact stderr subscriber when the `telemetry` feature is on.
///
/// The filter honors `RUST_LOG` and otherwise defaults to `timeline_rs=info`,
/// so an embedding application stays quiet unless it opts in. Returns `true`
/// only when this call claimed the global subscriber; `false` when the
/// feature is off or a subscriber was already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("timeline_rs=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
