//! Day 6: boat races won by holding the button long enough.

use crate::core::error::{PuzzleError, PuzzleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    /// Number of hold times that beat the record distance.
    ///
    /// Distance `h * (time - h)` rises up to `time / 2` and mirrors after it,
    /// so the first winning hold is binary searched on the rising half.
    /// Distances are compared as `u128` since the product can exceed `u64`.
    pub fn ways_to_win(&self) -> u64 {
        let beats = |hold: u64| {
            u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
        };
        let peak = self.time / 2;
        if !beats(peak) {
            return 0;
        }
        let (mut low, mut high) = (0, peak);
        while low < high {
            let mid = low + (high - low) / 2;
            if beats(mid) {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        // Hold 0 never wins, so `low >= 1` and the count stays below `time`.
        self.time - 2 * low + 1
    }
}

/// Races sheet: one `Time:` line and one `Distance:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSheet {
    times: Vec<String>,
    distances: Vec<String>,
}

fn fields(line: &str, label: &str) -> Option<Vec<String>> {
    let rest = line.strip_prefix(label)?;
    Some(rest.split_whitespace().map(str::to_string).collect())
}

fn parse_number(field: &str) -> PuzzleResult<u64> {
    field
        .parse()
        .map_err(|err| PuzzleError::malformed(format!("invalid number '{field}': {err}")))
}

impl RaceSheet {
    pub fn parse(input: &str) -> PuzzleResult<Self> {
        let mut times = None;
        let mut distances = None;
        for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some(found) = fields(line, "Time:") {
                times = Some(found);
            } else if let Some(found) = fields(line, "Distance:") {
                distances = Some(found);
            } else {
                return Err(PuzzleError::malformed(format!("unexpected line '{line}'")));
            }
        }
        let times = times.ok_or_else(|| PuzzleError::malformed("missing `Time:` line"))?;
        let distances =
            distances.ok_or_else(|| PuzzleError::malformed("missing `Distance:` line"))?;
        if times.len() != distances.len() {
            return Err(PuzzleError::malformed(format!(
                "{} times but {} distances",
                times.len(),
                distances.len()
            )));
        }
        if times.is_empty() {
            return Err(PuzzleError::malformed("sheet lists no races"));
        }
        Ok(Self { times, distances })
    }

    /// Each column read as its own race.
    pub fn races(&self) -> PuzzleResult<Vec<Race>> {
        self.times
            .iter()
            .zip(&self.distances)
            .map(|(time, record)| {
                Ok(Race {
                    time: parse_number(time)?,
                    record: parse_number(record)?,
                })
            })
            .collect()
    }

    /// All columns joined into one race, ignoring the spaces between them.
    pub fn single_race(&self) -> PuzzleResult<Race> {
        Ok(Race {
            time: parse_number(&self.times.concat())?,
            record: parse_number(&self.distances.concat())?,
        })
    }
}

/// Product of the ways to win each race.
pub fn margin_of_error(races: &[Race]) -> PuzzleResult<u64> {
    races.iter().try_fold(1_u64, |product, race| {
        product.checked_mul(race.ways_to_win()).ok_or_else(|| {
            PuzzleError::malformed(format!(
                "margin of error over {} races does not fit in 64 bits",
                races.len()
            ))
        })
    })
}
