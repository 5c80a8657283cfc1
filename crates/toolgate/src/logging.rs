//! Tracing initialization

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Honors `RUST_LOG` when set; otherwise logs warnings globally and info
/// for this workspace's crates. Diagnostics go to stderr so that stdout
/// stays clean for the comment sinks.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "warn,toolgate=info,toolgate_application=info,\
             toolgate_analysis=info,toolgate_providers=info",
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
