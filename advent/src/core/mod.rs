//! Deterministic puzzle logic.
//!
//! Core modules must be free of I/O side effects. They operate on parsed,
//! in-memory input and return deterministic outputs suitable for tests.

pub mod calibration;
pub mod error;
pub mod network;
pub mod pipe_maze;
pub mod races;
pub mod schematic;
