//! Logging setup.
//!
//! The engine only talks to the `log` facade; binaries call [`init_logging`]
//! early in `main` to route records through `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
