#![warn(clippy::all, clippy::pedantic)]
use std::collections::HashMap;
use std::env;

use log::{debug, trace};
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{eof, map, map_res},
    sequence::{separated_pair, terminated},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("The segment {0:?} is not in line with the given strategy {1:?}")]
    InvalidDirection(Segment, Strategy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Coordinate(i32, i32);

/// A line of vents, running from `start` to `end` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start: Coordinate,
    end: Coordinate,
}

#[derive(Debug, Clone, Copy)]
enum Strategy {
    OrthogonalOnly,
    OrthogonalAnd45Degrees,
}

impl Strategy {
    fn allows(self, segment: Segment) -> bool {
        let run = (segment.end.0 - segment.start.0).abs();
        let rise = (segment.end.1 - segment.start.1).abs();

        match self {
            Self::OrthogonalOnly => run == 0 || rise == 0,
            Self::OrthogonalAnd45Degrees => run == 0 || rise == 0 || run == rise,
        }
    }
}

impl Segment {
    /// Create an iterator over every point on this segment, from its start to its end.
    ///
    /// # Errors
    /// If the segment does not run in a direction that matches the given strategy,
    /// [`Error::InvalidDirection`] is returned
    fn points(self, strategy: Strategy) -> Result<impl Iterator<Item = Coordinate>, Error> {
        if !strategy.allows(self) {
            return Err(Error::InvalidDirection(self, strategy));
        }

        let dx = (self.end.0 - self.start.0).signum();
        let dy = (self.end.1 - self.start.1).signum();
        // The "max norm": like the manhattan distance, but a diagonal step counts as one
        let travel_distance = (self.end.0 - self.start.0)
            .abs()
            .max((self.end.1 - self.start.1).abs());

        let start = self.start;
        Ok((0..=travel_distance).map(move |n| Coordinate(start.0 + dx * n, start.1 + dy * n)))
    }
}

/// Build a map of the number of segments covering each point. Segments that the strategy does not allow are
/// skipped. Points that no segment covers are absent from the map.
fn build_intersection_count_map(segments: &[Segment], strategy: Strategy) -> HashMap<Coordinate, u32> {
    let mut counts = HashMap::new();
    for &segment in segments {
        let points = match segment.points(strategy) {
            Ok(points) => points,
            Err(err) => {
                trace!("Skipping segment: {}", err);
                continue;
            }
        };

        for coord in points {
            *counts.entry(coord).or_insert(0) += 1;
        }
    }

    counts
}

fn count_overlaps(segments: &[Segment], strategy: Strategy) -> usize {
    let map = build_intersection_count_map(segments, strategy);
    debug!("{:?} covered {} points", strategy, map.len());

    map.values().filter(|&&n| n >= 2).count()
}

fn part1(segments: &[Segment]) -> usize {
    count_overlaps(segments, Strategy::OrthogonalOnly)
}

fn part2(segments: &[Segment]) -> usize {
    count_overlaps(segments, Strategy::OrthogonalAnd45Degrees)
}

fn parse_number(s: &str) -> IResult<&str, i32> {
    map_res(take_while1(|c: char| c.is_ascii_digit()), str::parse)(s)
}

fn parse_coordinate(s: &str) -> IResult<&str, Coordinate> {
    map(separated_pair(parse_number, char(','), parse_number), |(x, y)| {
        Coordinate(x, y)
    })(s)
}

fn parse_line(line: &str) -> IResult<&str, Segment> {
    terminated(
        map(
            separated_pair(parse_coordinate, tag(" -> "), parse_coordinate),
            |(start, end)| Segment { start, end },
        ),
        eof,
    )(line.trim_end())
}

fn parse_input(lines: &[String]) -> Vec<Segment> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (_, segment) = parse_line(line)
                .unwrap_or_else(|err| panic!("Failed to parse line '{}': {}", line, err));

            segment
        })
        .collect()
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let lines = puzzle_input::read_lines_from_file(input_file_name).expect("Could not open input file");
    let segments = parse_input(&lines);
    debug!("Parsed {} segments", segments.len());

    println!("Part 1: {}", part1(&segments));
    println!("Part 2: {}", part2(&segments));
}
