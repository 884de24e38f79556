#![warn(clippy::all, clippy::pedantic)]
use itertools::Itertools;
use log::debug;
use std::env;
use std::num::ParseIntError;

const WINDOW_SIZE: usize = 3;

/// Count the number of measurements that are larger than the one before them
fn count_increases(items: &[i32]) -> usize {
    items.iter().tuple_windows().filter(|(prev, cur)| cur > prev).count()
}

/// Count the number of times the sum of a sliding window of `window_size` measurements increases.
/// If there are fewer measurements than the window size, there are no windows to compare.
fn count_window_increases(items: &[i32], window_size: usize) -> usize {
    if window_size == 0 {
        return 0;
    }

    let window_sums = items
        .windows(window_size)
        .map(|window| window.iter().sum())
        .collect::<Vec<i32>>();

    count_increases(&window_sums)
}

fn part1(items: &[i32]) -> usize {
    count_increases(items)
}

fn part2(items: &[i32]) -> usize {
    count_window_increases(items, WINDOW_SIZE)
}

fn parse_input(lines: &[String]) -> Result<Vec<i32>, ParseIntError> {
    lines.iter().map(|line| line.trim().parse::<i32>()).collect()
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let lines = puzzle_input::read_lines_from_file(input_file_name).expect("Could not open input file");
    let items = parse_input(&lines).expect("Failed to convert input line to integer");
    debug!("Parsed {} measurements", items.len());

    println!("Part 1: {}", part1(&items));
    println!("Part 2: {}", part2(&items));
}
