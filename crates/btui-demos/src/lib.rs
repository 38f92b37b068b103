#![forbid(unsafe_code)]

//! Shared setup for the btui demo binaries.
//!
//! # Running
//!
//! ```sh
//! cargo run -p btui-demos --bin canvas
//! cargo run -p btui-demos --bin window_layout
//! RUST_LOG=btui_tty=debug cargo run -p btui-demos --bin keyboard 2>log.txt
//! ```

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr log subscriber filtered by `RUST_LOG`.
///
/// Logs go to stderr so they never interleave with the drawn screen on
/// stdout. Calling this twice is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Sample `f` over `[from, to)` every `step`.
pub fn sample(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(from), move |x| Some(x + step)).take_while(move |&x| x < to)
}
