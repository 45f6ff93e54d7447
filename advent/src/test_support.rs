//! Test-only sample inputs and fixture helpers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Day 1 sample with numerals only.
pub const CALIBRATION_DIGITS: &str = "1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

/// Day 1 sample with spelled-out digits.
pub const CALIBRATION_WORDS: &str = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

pub const SCHEMATIC: &str = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

pub const RACES: &str = "Time:      7  15   30
Distance:  9  40  200
";

/// Day 8 sample reaching `ZZZ` in two steps.
pub const NETWORK_SIMPLE: &str = "RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

/// Day 8 sample that wraps the instruction sequence twice.
pub const NETWORK_REPEATING: &str = "LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

/// Day 8 sample with two ghosts arriving together at step 6.
pub const NETWORK_GHOSTS: &str = "LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

/// Day 10 square loop, farthest point 4 steps away.
pub const PIPE_MAZE_SQUARE: &str = ".....
.S-7.
.|.|.
.L-J.
.....
";

/// Day 10 winding loop, farthest point 8 steps away.
pub const PIPE_MAZE_COMPLEX: &str = "..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

/// Write `contents` as the conventional input file for `day` under `dir`.
pub fn write_input(dir: &Path, day: u8, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(format!("input_day_{day}.txt"));
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Temporary working directory with an `input_files/` folder, as the CLI
/// expects by default.
#[cfg(feature = "test-support")]
pub struct TestWorkspace {
    dir: tempfile::TempDir,
}

#[cfg(feature = "test-support")]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_dir(&self) -> PathBuf {
        self.path().join("input_files")
    }

    /// Write the default-location input file for `day`.
    pub fn write_input(&self, day: u8, contents: &str) -> Result<PathBuf> {
        write_input(&self.input_dir(), day, contents)
    }
}
