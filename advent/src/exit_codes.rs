//! Stable exit codes for the `advent` CLI.

use crate::core::error::PuzzleError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid usage, config, or unreadable input file.
pub const INVALID: i32 = 1;
/// Exit code clap uses for argument errors. Not returned by [`for_error`].
pub const USAGE: i32 = 2;
/// Input text does not have the shape the puzzle expects.
pub const MALFORMED_INPUT: i32 = 3;
/// Input references a label or position that does not exist.
pub const LOOKUP_FAILURE: i32 = 4;
/// A walk hit its step cap or never reached an end node.
pub const NO_TERMINATION: i32 = 5;

/// Exit code for a failed command: the first [`PuzzleError`] in the chain
/// decides, anything else is [`INVALID`].
pub fn for_error(err: &anyhow::Error) -> i32 {
    let puzzle_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<PuzzleError>());
    match puzzle_error {
        Some(PuzzleError::MalformedInput(_)) => MALFORMED_INPUT,
        Some(PuzzleError::LookupFailure(_)) => LOOKUP_FAILURE,
        Some(PuzzleError::NoTerminationDetected { .. }) => NO_TERMINATION,
        None => INVALID,
    }
}
