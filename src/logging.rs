//! Log subscriber setup for hosts embedding the timetable core.
//!
//! The library itself only emits `tracing` events; nothing is printed
//! until a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber filtered by `RUST_LOG`
/// (e.g. `RUST_LOG=u_timetable=debug`), defaulting to `info`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
