//! Locating and reading puzzle input files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::config::SolverConfig;

/// Input path for `day`: the explicit override if given, otherwise
/// `<input_dir>/input_day_<day>.txt`.
pub fn resolve_input_path(cfg: &SolverConfig, day: u8, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => cfg.input_path(day),
    }
}

/// Read the whole input file. Fails if the file is missing or blank.
pub fn read_input(path: &Path) -> Result<String> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    if contents.trim().is_empty() {
        bail!("input {} is empty", path.display());
    }
    debug!(path = %path.display(), bytes = contents.len(), "input loaded");
    Ok(contents)
}
