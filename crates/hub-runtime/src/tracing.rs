//! # Observability
//!
//! One-shot initialisation of the `tracing` subscriber shared by every binary
//! built on this runtime.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) at `info`, every
//! request at `debug` with its payload, and failed requests at `warn`.
//!
//! ```bash
//! RUST_LOG=info cargo run            # lifecycle + successful mutations
//! RUST_LOG=debug cargo run           # full payloads
//! RUST_LOG=hub_runtime=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs a compact `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"`)
/// is used. Fails if a global subscriber is already installed.
pub fn setup_tracing(default_directive: &str) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}
