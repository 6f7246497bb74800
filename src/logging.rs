use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a stderr subscriber filtered by `ESTIMATES_LOG`
/// (e.g. `ESTIMATES_LOG=estimates=debug`), defaulting to warnings only.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ESTIMATES_LOG")
            .unwrap_or_else(|_| EnvFilter::new("estimates=warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
