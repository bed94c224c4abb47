//! The sift command-line driver.
//!
//! Library half of the `sift` binary: command handlers, option parsing, the
//! bundled demo grammar, and logging setup. `main.rs` only dispatches.

pub mod commands;
pub mod config;
pub mod grammar;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sift_lexer=trace`. With `SIFT_LOG_TREE=1` spans are rendered as
/// an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("SIFT_LOG_TREE").is_ok_and(|v| v == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
