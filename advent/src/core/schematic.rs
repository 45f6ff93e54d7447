//! Day 3: engine schematic part numbers and gear ratios.

use std::sync::LazyLock;

use crate::core::error::{PuzzleError, PuzzleResult};

static NUMBER_RE: LazyLock<regex::Regex> = LazyLock::new(|| regex::Regex::new(r"\d+").unwrap());

/// A run of digits in the schematic. Columns are byte offsets, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartNumber {
    pub value: u64,
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl PartNumber {
    /// True if `(row, col)` touches the number, diagonals included.
    fn touches(&self, row: usize, col: usize) -> bool {
        row.abs_diff(self.row) <= 1 && col + 1 >= self.start && col <= self.end
    }
}

#[derive(Debug, Clone)]
pub struct Schematic {
    rows: Vec<String>,
    numbers: Vec<PartNumber>,
}

fn is_symbol(cell: u8) -> bool {
    !cell.is_ascii_digit() && cell != b'.'
}

impl Schematic {
    pub fn parse(input: &str) -> PuzzleResult<Self> {
        let rows: Vec<String> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let mut numbers = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            for found in NUMBER_RE.find_iter(line) {
                let value = found.as_str().parse().map_err(|err| {
                    PuzzleError::malformed(format!(
                        "number '{}' at row {row} does not fit: {err}",
                        found.as_str()
                    ))
                })?;
                numbers.push(PartNumber {
                    value,
                    row,
                    start: found.start(),
                    end: found.end(),
                });
            }
        }
        Ok(Self { rows, numbers })
    }

    pub fn numbers(&self) -> &[PartNumber] {
        &self.numbers
    }

    fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row)?.as_bytes().get(col).copied()
    }

    fn borders_symbol(&self, number: &PartNumber) -> bool {
        let cols = number.start.saturating_sub(1)..=number.end;
        (number.row.saturating_sub(1)..=number.row + 1)
            .flat_map(|row| cols.clone().map(move |col| (row, col)))
            .filter_map(|(row, col)| self.cell(row, col))
            .any(is_symbol)
    }

    /// Sum of numbers next to at least one symbol.
    pub fn part_number_sum(&self) -> PuzzleResult<u64> {
        self.numbers
            .iter()
            .filter(|number| self.borders_symbol(number))
            .try_fold(0_u64, |total, number| {
                total
                    .checked_add(number.value)
                    .ok_or_else(|| too_large("part number sum"))
            })
    }

    /// Sum over `*` cells of the product of their neighboring numbers, for
    /// every `*` touching two or more numbers.
    pub fn gear_ratio_sum(&self) -> PuzzleResult<u64> {
        let mut total: u64 = 0;
        for (row, line) in self.rows.iter().enumerate() {
            for (col, _) in line.match_indices('*') {
                let touching: Vec<u64> = self
                    .numbers
                    .iter()
                    .filter(|number| number.touches(row, col))
                    .map(|number| number.value)
                    .collect();
                if touching.len() < 2 {
                    continue;
                }
                let ratio = touching
                    .iter()
                    .try_fold(1_u64, |product, &value| product.checked_mul(value))
                    .ok_or_else(|| too_large(&format!("gear ratio at row {row}, column {col}")))?;
                total = total
                    .checked_add(ratio)
                    .ok_or_else(|| too_large("gear ratio sum"))?;
            }
        }
        Ok(total)
    }
}

fn too_large(what: &str) -> PuzzleError {
    PuzzleError::malformed(format!("{what} does not fit in 64 bits"))
}
