//! Solver configuration stored in `advent.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "advent.toml";

/// Solver configuration (TOML).
///
/// Missing fields default to values that fit the published puzzle inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Directory holding `input_day_<N>.txt` files.
    pub input_dir: PathBuf,

    /// Step cap for a day 8 network walk before it is declared
    /// non-terminating. Pipe loops are capped by the grid size instead.
    pub max_walk_steps: u64,

    pub network: NetworkConfig,
}

/// Start and end labels for day 8.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Start label for the single walk.
    pub start_label: String,
    /// End label for the single walk.
    pub end_label: String,
    /// Label suffix marking a ghost start node.
    pub ghost_start_suffix: String,
    /// Label suffix marking a ghost end node.
    pub ghost_end_suffix: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            start_label: "AAA".to_string(),
            end_label: "ZZZ".to_string(),
            ghost_start_suffix: "A".to_string(),
            ghost_end_suffix: "Z".to_string(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input_files"),
            max_walk_steps: 10_000_000,
            network: NetworkConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(anyhow!("input_dir must not be empty"));
        }
        if self.max_walk_steps == 0 {
            return Err(anyhow!("max_walk_steps must be > 0"));
        }
        let labels = [
            ("network.start_label", &self.network.start_label),
            ("network.end_label", &self.network.end_label),
            ("network.ghost_start_suffix", &self.network.ghost_start_suffix),
            ("network.ghost_end_suffix", &self.network.ghost_end_suffix),
        ];
        for (key, value) in labels {
            if value.trim().is_empty() {
                return Err(anyhow!("{key} must be a non-empty string"));
            }
        }
        Ok(())
    }

    /// Path of the input file for `day`.
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.input_dir.join(format!("input_day_{day}.txt"))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SolverConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
