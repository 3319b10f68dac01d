use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a stderr fmt subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .init();
    });
}
