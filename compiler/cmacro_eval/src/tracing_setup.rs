//! Process-wide tracing subscriber.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable selecting the hierarchical (tree) output.
pub const LOG_TREE_VAR: &str = "CMACRO_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=cmacro_eval=debug` (failures and deferred
/// resolution) or `RUST_LOG=cmacro_parse=trace` (token cursor). Set
/// `CMACRO_LOG_TREE` to render spans as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber already installed by the host stays in place.
        let _ = if std::env::var_os(LOG_TREE_VAR).is_some() {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
    });
}
