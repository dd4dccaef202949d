//! SNESMOD CLI library.
//!
//! Command implementations behind the `snesmod-tools` binary. Each command
//! takes already-parsed arguments and returns the process exit code.

pub mod commands;
