//! Tracing subscriber setup.
//!
//! Logging stays silent unless asked for: without `RUST_LOG` or
//! `STUDYTRACK_DEBUG` no subscriber is installed and the `msg_*` macros print
//! plain text instead.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "studytrack=debug";

pub fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr),
    );

    // Ignore the error if a subscriber is already set (tests).
    let _ = subscriber.try_init();
}
