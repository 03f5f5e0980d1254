#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the `debug!` and `trace!` macros are
//! re-exported at the crate root. Without it, no-op macros with the same
//! names stand in so call sites compile unchanged. Container spans are
//! emitted directly through `tracing` behind the same feature.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

// Only the levels the layout passes log at: `debug` for relayouts, `trace`
// for cache traffic.
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Discards a relayout event.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
