#![warn(clippy::all, clippy::pedantic)]
use log::{debug, trace};
use std::env;
use std::num::ParseIntError;
use thiserror::Error;

/// Timers run from 0 up to this value; newborn fish start here
const NEW_FISH_TIMER: usize = 8;
/// A fish that spawns resets to this timer
const RESET_TIMER: usize = 6;

#[derive(Debug, Error)]
enum Error {
    #[error("Invalid number in input: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error("Timer {0} is out of range")]
    InvalidTimer(usize),
}

/// A school of lanternfish, tracked only by how many fish have each timer value
#[derive(Debug, Clone, PartialEq, Eq)]
struct School([u64; NEW_FISH_TIMER + 1]);

impl School {
    fn from_timers(timers: &[usize]) -> Result<Self, Error> {
        let mut counts = [0; NEW_FISH_TIMER + 1];
        for &timer in timers {
            let count = counts.get_mut(timer).ok_or(Error::InvalidTimer(timer))?;
            *count += 1;
        }

        Ok(Self(counts))
    }

    /// Advance the school by one day. Every timer counts down; fish at zero reset and each spawn a new fish.
    fn step(&mut self) {
        let spawning = self.0[0];
        self.0.rotate_left(1);
        self.0[RESET_TIMER] += spawning;
    }

    fn population(&self) -> u64 {
        self.0.iter().sum()
    }

    /// The size of the population after the given number of days
    fn population_after(&self, num_days: u32) -> u64 {
        let mut school = self.clone();
        for day in 1..=num_days {
            school.step();
            trace!("Day {}: {:?}", day, school.0);
        }

        school.population()
    }
}

fn part1(school: &School) -> u64 {
    const NUM_DAYS: u32 = 80;
    school.population_after(NUM_DAYS)
}

fn part2(school: &School) -> u64 {
    const NUM_DAYS: u32 = 256;
    school.population_after(NUM_DAYS)
}

fn parse_input(raw_input: &str) -> Result<School, Error> {
    let timers = raw_input
        .trim()
        .split(',')
        .map(|n| n.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()?;

    School::from_timers(&timers)
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let raw_input = puzzle_input::read_text_from_file(input_file_name).expect("Failed to read input file");
    let school = parse_input(&raw_input).expect("Invalid input");
    debug!("Starting with {} fish", school.population());

    println!("Part 1: {}", part1(&school));
    println!("Part 2: {}", part2(&school));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const SAMPLE: &str = "3,4,3,1,2\n";

    fn sample_school() -> School {
        parse_input(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn test_sample_after_18_days() {
        assert_eq!(26, sample_school().population_after(18));
    }

    #[test]
    fn test_part1_sample() {
        assert_eq!(5934, part1(&sample_school()));
    }

    #[test]
    fn test_part2_sample() {
        assert_eq!(26_984_457_539, part2(&sample_school()));
    }

    #[test]
    fn test_step_spawns_and_resets() {
        let mut school = School::from_timers(&[0, 0, 5]).unwrap();
        school.step();

        assert_eq!(School([0, 0, 0, 0, 1, 0, 2, 0, 2]), school);
    }

    #[test]
    fn test_one_more_day_is_one_more_step() {
        let school = sample_school();
        for num_days in [0, 1, 17, 79] {
            let mut stepped = school.clone();
            for _ in 0..num_days {
                stepped.step();
            }
            stepped.step();

            assert_eq!(school.population_after(num_days + 1), stepped.population());
        }
    }

    #[test]
    fn test_invalid_timer() {
        assert!(matches!(parse_input("3,9"), Err(Error::InvalidTimer(9))));
        assert!(matches!(parse_input("3,x"), Err(Error::InvalidNumber(_))));
    }
}
