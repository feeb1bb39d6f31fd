//! Browser console logging.
//!
//! Events from every crate go through a `tracing` registry whose only layer
//! writes to the devtools console.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Installs the console subscriber. Calling it again keeps the first one.
pub fn init(level: Level) {
    let console = WASMLayer::new(
        WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .set_report_logs_in_timings(false)
            .build(),
    );
    let registry = Registry::default().with(console);

    if tracing::subscriber::set_global_default(registry).is_err() {
        tracing::warn!("console subscriber already installed");
    }
}
