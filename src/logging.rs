use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs to stderr, filtered by `RUST_LOG` (defaults to this crate at `info`).
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_graph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
