//! I/O helpers for solver commands.

pub mod config;
pub mod input;
