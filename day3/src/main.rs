#![warn(clippy::all, clippy::pedantic)]
use log::{debug, trace};
use std::env;
use std::ops::AddAssign;
use thiserror::Error;

/// Widest bit string accepted; two rates of this width still multiply within a `u64`
const MAX_WIDTH: usize = 32;

#[derive(Debug, Error)]
enum Error {
    #[error("Unexpected char '{0}'")]
    InvalidChar(char),
    #[error("No diagnostic values were given")]
    EmptyInput,
    #[error("Bit string is {0} bits wide, more than the {} supported", MAX_WIDTH)]
    TooWide(usize),
    #[error("Filtering left {0} values, expected exactly one")]
    NoSingleRating(usize),
}

/// Which bit a rating keeps at each position while filtering
#[derive(Debug, Clone, Copy)]
enum BitCriteria {
    /// Keep the most common bit; ties keep 1
    MostCommon,
    /// Keep the least common bit; ties keep 0
    LeastCommon,
}

/// The number of zeroes and ones seen at a single bit position
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BitCounts {
    zeroes: u32,
    ones: u32,
}

impl TryFrom<char> for BitCounts {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Self { zeroes: 1, ones: 0 }),
            '1' => Ok(Self { zeroes: 0, ones: 1 }),
            _ => Err(Error::InvalidChar(c)),
        }
    }
}

impl AddAssign for BitCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.zeroes += rhs.zeroes;
        self.ones += rhs.ones;
    }
}

impl BitCounts {
    fn most_common(self) -> char {
        if self.zeroes > self.ones {
            '0'
        } else {
            '1'
        }
    }

    fn least_common(self) -> char {
        if self.zeroes > self.ones {
            '1'
        } else {
            '0'
        }
    }

    fn pick(self, criteria: BitCriteria) -> char {
        match criteria {
            BitCriteria::MostCommon => self.most_common(),
            BitCriteria::LeastCommon => self.least_common(),
        }
    }
}

/// Count the number of zeroes and ones in each position for every bit string
fn count_bits<S: AsRef<str>>(bit_strings: &[S]) -> Result<Vec<BitCounts>, Error> {
    let mut counts = Vec::<BitCounts>::new();
    for bit_string in bit_strings {
        for (i, c) in bit_string.as_ref().chars().enumerate() {
            let count = BitCounts::try_from(c)?;
            match counts.get_mut(i) {
                Some(current_count) => *current_count += count,
                None => counts.push(count),
            }
        }
    }

    Ok(counts)
}

/// Convert a string of binary digits into its value
fn binary_value(bits: &str) -> Result<u64, Error> {
    if bits.len() > MAX_WIDTH {
        return Err(Error::TooWide(bits.len()));
    }

    bits.chars().try_fold(0_u64, |total, c| match c {
        '0' => Ok(total << 1),
        '1' => Ok((total << 1) | 1),
        _ => Err(Error::InvalidChar(c)),
    })
}

/// Calculate the power consumption: the gamma rate (most common bits) times the epsilon rate (least common bits)
fn part1(input_lines: &[String]) -> Result<u64, Error> {
    let bit_counts = count_bits(input_lines)?;
    if bit_counts.is_empty() {
        return Err(Error::EmptyInput);
    }

    let gamma_bits = bit_counts.iter().map(|counts| counts.most_common()).collect::<String>();
    let epsilon_bits = bit_counts.iter().map(|counts| counts.least_common()).collect::<String>();
    debug!("gamma = {}, epsilon = {}", gamma_bits, epsilon_bits);

    Ok(binary_value(&gamma_bits)? * binary_value(&epsilon_bits)?)
}

/// Find a rating by repeatedly discarding the values whose bit at each position doesn't match the criteria,
/// stopping once only one value remains
fn find_rating(input_lines: &[String], criteria: BitCriteria) -> Result<u64, Error> {
    let mut remaining_values = input_lines.iter().map(String::as_str).collect::<Vec<&str>>();
    let width = remaining_values.first().ok_or(Error::EmptyInput)?.len();

    for i in 0..width {
        if remaining_values.len() == 1 {
            break;
        }

        let counts = count_bits(&remaining_values)?;
        let wanted_bit = counts.get(i).copied().unwrap_or_default().pick(criteria);
        remaining_values.retain(|value| value.chars().nth(i) == Some(wanted_bit));
        trace!(
            "{:?}: kept {} values with '{}' at position {}",
            criteria,
            remaining_values.len(),
            wanted_bit,
            i
        );
    }

    match remaining_values.as_slice() {
        [rating] => binary_value(rating),
        values => Err(Error::NoSingleRating(values.len())),
    }
}

/// Calculate the life support rating: the oxygen generator rating times the CO2 scrubber rating
fn part2(input_lines: &[String]) -> Result<u64, Error> {
    let oxygen_rating = find_rating(input_lines, BitCriteria::MostCommon)?;
    let co2_rating = find_rating(input_lines, BitCriteria::LeastCommon)?;
    debug!("oxygen = {}, co2 = {}", oxygen_rating, co2_rating);

    Ok(oxygen_rating * co2_rating)
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let input_lines = puzzle_input::read_lines_from_file(input_file_name)
        .expect("Could not open input file")
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    println!("Part 1: {}", part1(&input_lines).expect("Failed to calculate power consumption"));
    println!("Part 2: {}", part2(&input_lines).expect("Failed to calculate life support rating"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const SAMPLE: [&str; 12] = [
        "00100", "11110", "10110", "10111", "10101", "01111", "00111", "11100", "10000", "11001", "00010", "01010",
    ];

    fn sample() -> Vec<String> {
        SAMPLE.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_part1_sample() {
        assert_eq!(198, part1(&sample()).unwrap());
    }

    #[test]
    fn test_ratings_sample() {
        assert_eq!(23, find_rating(&sample(), BitCriteria::MostCommon).unwrap());
        assert_eq!(10, find_rating(&sample(), BitCriteria::LeastCommon).unwrap());
    }

    #[test]
    fn test_part2_sample() {
        assert_eq!(230, part2(&sample()).unwrap());
    }

    #[test]
    fn test_ties_pick_one_for_most_and_zero_for_least() {
        let counts = BitCounts { zeroes: 2, ones: 2 };
        assert_eq!('1', counts.pick(BitCriteria::MostCommon));
        assert_eq!('0', counts.pick(BitCriteria::LeastCommon));
    }

    #[test]
    fn test_invalid_char_is_rejected() {
        let input = vec!["0120".to_string()];
        assert!(matches!(part1(&input), Err(Error::InvalidChar('2'))));
    }

    #[test]
    fn test_full_width_rates_do_not_wrap() {
        let high_half = "1".repeat(16) + &"0".repeat(16);
        let input = vec![high_half.clone(), high_half, "0".repeat(32)];

        // gamma is 0xFFFF_0000 and epsilon 0x0000_FFFF; their product doesn't fit in 32 bits
        assert_eq!(0xFFFF_0000 * 0xFFFF, part1(&input).unwrap());
    }

    #[test]
    fn test_too_wide_is_rejected() {
        let input = vec!["1".repeat(33)];
        assert!(matches!(part1(&input), Err(Error::TooWide(33))));
        assert!(matches!(part2(&input), Err(Error::TooWide(33))));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(part1(&[]), Err(Error::EmptyInput)));
        assert!(matches!(part2(&[]), Err(Error::EmptyInput)));
    }
}
