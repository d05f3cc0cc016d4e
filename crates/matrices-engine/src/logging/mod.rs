//! Logging setup.
//!
//! Library code logs through the `log` facade only; the binary installs the
//! `env_logger` backend once at startup.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
