//! Logging utilities and structured logging support
//!
//! The library only emits records through the `log` facade; binaries pick
//! the backend. [`init`] installs `env_logger`, honouring `RUST_LOG`.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Safe to call more than once: later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
