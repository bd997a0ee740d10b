//! Logging setup based on `tracing-subscriber`.
//!
//! Library code only emits `tracing` events. Nothing is printed until a
//! binary or test installs a subscriber with one of these helpers.

/// Default filter: verbose for our crates, quiet for everything else.
pub const DEFAULT_FILTER: &str = "warn,horizontally=debug,horizontally_core=debug,horizontally_widget=debug,horizontally_web=debug";

pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a global fmt subscriber with the given `EnvFilter` directives.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .try_init();
}
