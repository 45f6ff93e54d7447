//! Dispatch from a day and part to the matching puzzle computation.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};
use num::BigUint;
use tracing::{info, instrument};

use crate::core::calibration::{DigitSet, calibration_sum};
use crate::core::network::{Network, steps_to_end, synchronized_arrival_step};
use crate::core::pipe_maze::{PipeGrid, farthest_distance};
use crate::core::races::{RaceSheet, margin_of_error};
use crate::core::schematic::Schematic;
use crate::io::config::SolverConfig;
use crate::io::input::read_input;

/// Days with a solution in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    Trebuchet,
    GearRatios,
    WaitForIt,
    HauntedWasteland,
    PipeMaze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Puzzle {
    pub const ALL: [Puzzle; 5] = [
        Self::Trebuchet,
        Self::GearRatios,
        Self::WaitForIt,
        Self::HauntedWasteland,
        Self::PipeMaze,
    ];

    pub fn from_day(day: u8) -> Result<Self> {
        match Self::ALL.into_iter().find(|puzzle| puzzle.day() == day) {
            Some(puzzle) => Ok(puzzle),
            None => {
                let days: Vec<String> = Self::ALL.iter().map(|p| p.day().to_string()).collect();
                bail!("day {day} has no solution (available: {})", days.join(", "))
            }
        }
    }

    pub fn day(self) -> u8 {
        match self {
            Self::Trebuchet => 1,
            Self::GearRatios => 3,
            Self::WaitForIt => 6,
            Self::HauntedWasteland => 8,
            Self::PipeMaze => 10,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Trebuchet => "Trebuchet?!",
            Self::GearRatios => "Gear Ratios",
            Self::WaitForIt => "Wait For It",
            Self::HauntedWasteland => "Haunted Wasteland",
            Self::PipeMaze => "Pipe Maze",
        }
    }

    /// Parts this crate answers for the day.
    pub fn parts(self) -> &'static [Part] {
        match self {
            Self::PipeMaze => &[Part::One],
            _ => &[Part::One, Part::Two],
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => bail!("part must be 1 or 2 (got {other})"),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Two => f.write_str("2"),
        }
    }
}

/// A puzzle answer. Synchronized graph walks can outgrow `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Count(u64),
    Big(BigUint),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(value) => write!(f, "{value}"),
            Self::Big(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub puzzle: Puzzle,
    pub part: Part,
    pub answer: Answer,
}

/// Parts to run: the requested one, or every part the day provides.
pub fn parts_to_solve(puzzle: Puzzle, requested: Option<Part>) -> Result<Vec<Part>> {
    match requested {
        None => Ok(puzzle.parts().to_vec()),
        Some(part) if puzzle.parts().contains(&part) => Ok(vec![part]),
        Some(part) => bail!("day {} has no solution for part {part}", puzzle.day()),
    }
}

/// Solve one part against already-loaded input text.
pub fn solve_part(puzzle: Puzzle, part: Part, input: &str, cfg: &SolverConfig) -> Result<Answer> {
    let network_cfg = &cfg.network;
    let answer = match (puzzle, part) {
        (Puzzle::Trebuchet, Part::One) => {
            Answer::Count(calibration_sum(input, DigitSet::Numerals)?)
        }
        (Puzzle::Trebuchet, Part::Two) => {
            Answer::Count(calibration_sum(input, DigitSet::NumeralsAndWords)?)
        }
        (Puzzle::GearRatios, Part::One) => {
            Answer::Count(Schematic::parse(input)?.part_number_sum()?)
        }
        (Puzzle::GearRatios, Part::Two) => {
            Answer::Count(Schematic::parse(input)?.gear_ratio_sum()?)
        }
        (Puzzle::WaitForIt, Part::One) => {
            let races = RaceSheet::parse(input)?.races()?;
            Answer::Count(margin_of_error(&races)?)
        }
        (Puzzle::WaitForIt, Part::Two) => {
            Answer::Count(RaceSheet::parse(input)?.single_race()?.ways_to_win())
        }
        (Puzzle::HauntedWasteland, Part::One) => {
            let network = Network::parse(input)?;
            let arrival = steps_to_end(
                &network,
                &network_cfg.start_label,
                |label| label == network_cfg.end_label,
                cfg.max_walk_steps,
            )?;
            Answer::Count(arrival.steps)
        }
        (Puzzle::HauntedWasteland, Part::Two) => {
            let network = Network::parse(input)?;
            let start_suffix = network_cfg.ghost_start_suffix.as_str();
            let end_suffix = network_cfg.ghost_end_suffix.as_str();
            let starts = network.labels_where(|label| label.ends_with(start_suffix));
            let step = synchronized_arrival_step(
                &network,
                &starts,
                |label| label.ends_with(end_suffix),
                cfg.max_walk_steps,
            )?;
            Answer::Big(step)
        }
        (Puzzle::PipeMaze, Part::One) => {
            Answer::Count(farthest_distance(&PipeGrid::parse(input)?)?)
        }
        (Puzzle::PipeMaze, Part::Two) => bail!("day 10 has no solution for part 2"),
    };
    Ok(answer)
}

/// Read the input at `path` once and solve each of `parts` against it.
#[instrument(skip_all, fields(day = puzzle.day(), input = %path.display()))]
pub fn solve_file(
    cfg: &SolverConfig,
    puzzle: Puzzle,
    parts: &[Part],
    path: &Path,
) -> Result<Vec<Solution>> {
    let input = read_input(path)?;
    parts
        .iter()
        .map(|&part| {
            let answer = solve_part(puzzle, part, &input, cfg)
                .with_context(|| format!("solve day {} part {part}", puzzle.day()))?;
            info!(part = %part, %answer, "solved");
            Ok(Solution {
                puzzle,
                part,
                answer,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PuzzleError;
    use crate::test_support::{
        CALIBRATION_DIGITS, NETWORK_GHOSTS, NETWORK_REPEATING, PIPE_MAZE_COMPLEX, RACES, SCHEMATIC,
        write_input,
    };

    fn solve(puzzle: Puzzle, part: Part, input: &str) -> Answer {
        solve_part(puzzle, part, input, &SolverConfig::default()).expect("solve")
    }

    #[test]
    fn dispatches_every_supported_part() {
        assert_eq!(
            solve(Puzzle::Trebuchet, Part::One, CALIBRATION_DIGITS),
            Answer::Count(142)
        );
        assert_eq!(
            solve(Puzzle::GearRatios, Part::Two, SCHEMATIC),
            Answer::Count(467835)
        );
        assert_eq!(solve(Puzzle::WaitForIt, Part::One, RACES), Answer::Count(288));
        assert_eq!(
            solve(Puzzle::HauntedWasteland, Part::One, NETWORK_REPEATING),
            Answer::Count(6)
        );
        assert_eq!(
            solve(Puzzle::HauntedWasteland, Part::Two, NETWORK_GHOSTS),
            Answer::Big(BigUint::from(6_u32))
        );
        assert_eq!(
            solve(Puzzle::PipeMaze, Part::One, PIPE_MAZE_COMPLEX),
            Answer::Count(8)
        );
    }

    #[test]
    fn network_labels_come_from_config() {
        let cfg = SolverConfig {
            network: crate::io::config::NetworkConfig {
                start_label: "11A".to_string(),
                end_label: "11Z".to_string(),
                ..Default::default()
            },
            ..SolverConfig::default()
        };
        let answer =
            solve_part(Puzzle::HauntedWasteland, Part::One, NETWORK_GHOSTS, &cfg).expect("solve");
        assert_eq!(answer, Answer::Count(2));
    }

    #[test]
    fn puzzle_errors_stay_downcastable() {
        let err = solve_part(
            Puzzle::PipeMaze,
            Part::One,
            "...\n...\n",
            &SolverConfig::default(),
        )
        .expect_err("no origin");
        assert!(matches!(
            err.downcast_ref::<PuzzleError>(),
            Some(PuzzleError::MalformedInput(_))
        ));
    }

    #[test]
    fn unknown_day_and_part_are_rejected() {
        let err = Puzzle::from_day(2).expect_err("day 2");
        assert_eq!(
            err.to_string(),
            "day 2 has no solution (available: 1, 3, 6, 8, 10)"
        );
        let err = parts_to_solve(Puzzle::PipeMaze, Some(Part::Two)).expect_err("part 2");
        assert_eq!(err.to_string(), "day 10 has no solution for part 2");
        assert_eq!(
            parts_to_solve(Puzzle::GearRatios, None).expect("parts"),
            vec![Part::One, Part::Two]
        );
        assert!(Part::try_from(3).is_err());
    }

    #[test]
    fn solve_file_reads_once_and_answers_each_part() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_input(temp.path(), 6, RACES).expect("write input");
        let solutions = solve_file(
            &SolverConfig::default(),
            Puzzle::WaitForIt,
            &[Part::One, Part::Two],
            &path,
        )
        .expect("solve");
        let answers: Vec<String> = solutions
            .iter()
            .map(|solution| solution.answer.to_string())
            .collect();
        assert_eq!(answers, vec!["288", "71503"]);
    }
}
