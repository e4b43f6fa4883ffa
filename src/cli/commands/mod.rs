//! CLI command implementations
//!
//! Each command lives in its own module and exposes an `execute` method
//! returning a process exit code: 0 success, 2 configuration error,
//! 4 remote store unreachable, 5 fatal.

pub mod init;
pub mod refresh;
pub mod transition;
pub mod validate;
