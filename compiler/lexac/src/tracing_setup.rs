//! Tracing subscriber setup for the CLI.

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding filter directives. `RUST_LOG` is the fallback.
const LOG_ENV: &str = "LEXA_LOG";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Only installs a subscriber when `LEXA_LOG` or `RUST_LOG` is set, e.g.
/// `LEXA_LOG=lexa_scanner=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = log_directives() else {
            return;
        };
        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .init();
    });
}

fn log_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|directives| !directives.trim().is_empty())
}
