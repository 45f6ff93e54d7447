//! Advent of Code 2023 puzzle solutions.
//!
//! Each day is a narrow one-off computation over a fixed input shape. The
//! crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic puzzle logic (parsing, grid and graph
//!   walks, arithmetic). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (config file, input files).
//!
//! [`solve`] maps a day and part onto the core and is what the `advent`
//! binary calls.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
