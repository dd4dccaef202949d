//! Command implementations.

pub mod bin2ca;
pub mod ftab;
