#![warn(clippy::all, clippy::pedantic)]
use itertools::{Itertools, MinMaxResult};
use log::debug;
use std::env;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("Invalid number in input: {0}")]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone, Copy)]
enum Part {
    Part1,
    Part2,
}

impl Part {
    /// The fuel needed for a single crab to move the given number of steps
    fn fuel_cost(self, steps: i64) -> i64 {
        match self {
            Part::Part1 => steps,
            // 1 + 2 + 3 + ... + n => n(n+1)/2
            Part::Part2 => steps * (steps + 1) / 2,
        }
    }
}

/// Find the cheapest total fuel cost to line every crab up on one position. Only positions between the
/// leftmost and rightmost crab (inclusive) are candidates. Returns `None` if there are no crabs.
fn run(input: &[i64], part: Part) -> Option<i64> {
    let (smallest, largest) = match input.iter().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(&n) => (n, n),
        MinMaxResult::MinMax(&min, &max) => (min, max),
    };

    let (destination, cost) = (smallest..=largest)
        .map(|possible_destination| {
            let cost = input
                .iter()
                .map(|crab_location| part.fuel_cost((crab_location - possible_destination).abs()))
                .sum::<i64>();
            (possible_destination, cost)
        })
        .min_by_key(|&(_, cost)| cost)?;
    debug!("{:?}: cheapest destination is {} for {} fuel", part, destination, cost);

    Some(cost)
}

fn parse_input(raw_input: &str) -> Result<Vec<i64>, Error> {
    let positions = raw_input
        .trim()
        .split(',')
        .map(|n| n.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(positions)
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let raw_input = puzzle_input::read_text_from_file(input_file_name).expect("Failed to read input file");
    let input = parse_input(&raw_input).expect("Invalid input");
    debug!("Parsed {} crabs", input.len());

    println!("Part 1: {}", run(&input, Part::Part1).expect("Input should have more than zero elements"));
    println!("Part 2: {}", run(&input, Part::Part2).expect("Input should have more than zero elements"));
}
