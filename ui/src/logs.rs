//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::utils::is_dev_mode;

/// Install the console subscriber. Safe to call more than once; only the
/// first call installs anything.
pub fn init_logging() {
    let env_filter = if is_dev_mode() {
        EnvFilter::new("warn,ui=debug,payloads=debug")
    } else {
        EnvFilter::new("error,ui=info")
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(dev_mode = is_dev_mode(), "Initialized logs");
    }
}
