//! Day 1: recovering calibration values from the first and last digit of
//! each line.

use crate::core::error::{PuzzleError, PuzzleResult};

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Which tokens count as digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitSet {
    /// ASCII numerals only.
    Numerals,
    /// Numerals plus the spelled words `one`..`nine`.
    NumeralsAndWords,
}

/// Digit whose token starts at byte `index` of `line`, if any.
fn digit_at(line: &str, index: usize, digits: DigitSet) -> Option<u32> {
    let rest = &line[index..];
    let first = rest.chars().next()?;
    if let Some(value) = first.to_digit(10) {
        return Some(value);
    }
    if digits == DigitSet::NumeralsAndWords {
        return DIGIT_WORDS
            .iter()
            .position(|word| rest.starts_with(word))
            .map(|position| position as u32 + 1);
    }
    None
}

/// Two-digit calibration value of one line.
///
/// Spelled words may share letters (`eightwo` holds both 8 and 2), so every
/// start position is tried from both ends rather than consuming matches.
pub fn calibration_value(line: &str, digits: DigitSet) -> PuzzleResult<u32> {
    let starts = line.char_indices().map(|(index, _)| index);
    let first = starts
        .clone()
        .find_map(|index| digit_at(line, index, digits))
        .ok_or_else(|| PuzzleError::malformed(format!("no digit in line '{line}'")))?;
    let last = starts
        .rev()
        .find_map(|index| digit_at(line, index, digits))
        .unwrap_or(first);
    Ok(first * 10 + last)
}

/// Sum of calibration values over all non-blank lines.
pub fn calibration_sum(input: &str, digits: DigitSet) -> PuzzleResult<u64> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| calibration_value(line, digits).map(u64::from))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CALIBRATION_DIGITS, CALIBRATION_WORDS};

    #[test]
    fn numeral_sample_sums_to_142() {
        assert_eq!(
            calibration_sum(CALIBRATION_DIGITS, DigitSet::Numerals).expect("sum"),
            142
        );
    }

    #[test]
    fn word_sample_sums_to_281() {
        assert_eq!(
            calibration_sum(CALIBRATION_WORDS, DigitSet::NumeralsAndWords).expect("sum"),
            281
        );
    }

    #[test]
    fn single_digit_counts_twice() {
        assert_eq!(
            calibration_value("treb7uchet", DigitSet::Numerals).expect("value"),
            77
        );
    }

    #[test]
    fn overlapping_words_both_count() {
        assert_eq!(
            calibration_value("eightwothree", DigitSet::NumeralsAndWords).expect("value"),
            83
        );
        assert_eq!(
            calibration_value("twone", DigitSet::NumeralsAndWords).expect("value"),
            21
        );
        assert_eq!(
            calibration_value("5eightwo", DigitSet::NumeralsAndWords).expect("value"),
            52
        );
    }

    #[test]
    fn words_are_ignored_for_numerals_only() {
        assert_eq!(
            calibration_value("two1nine3four", DigitSet::Numerals).expect("value"),
            13
        );
    }

    #[test]
    fn line_without_digit_is_malformed() {
        let err = calibration_value("abcdef", DigitSet::NumeralsAndWords).expect_err("no digit");
        assert_eq!(err, PuzzleError::malformed("no digit in line 'abcdef'"));
    }
}
