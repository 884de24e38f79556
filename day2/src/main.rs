#![warn(clippy::all, clippy::pedantic)]

use log::{debug, trace};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::{eof, map_res, value},
    sequence::{separated_pair, terminated},
    IResult,
};
use std::env;

#[derive(Debug, Clone, Copy)]
enum Part {
    Part1,
    Part2,
}

/// The direction of a sub command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward(i64),
    Down(i64),
    Up(i64),
}

/// The location of the sub
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Location {
    position: i64,
    depth: i64,
    aim: i64,
}

impl Location {
    /// Produce a new location that is moved based on simple directionality:
    /// forward/up/down map to positions and depths
    fn perform_directional_move(self, direction: Direction) -> Location {
        match direction {
            Direction::Up(n) => Location {
                depth: self.depth - n,
                ..self
            },
            Direction::Down(n) => Location {
                depth: self.depth + n,
                ..self
            },
            Direction::Forward(n) => Location {
                position: self.position + n,
                ..self
            },
        }
    }

    /// Produce a new location that is moved based on the current aim; depth is controlled by a multiple of aim
    fn perform_aim_based_move(self, direction: Direction) -> Location {
        match direction {
            Direction::Up(n) => Location {
                aim: self.aim - n,
                ..self
            },
            Direction::Down(n) => Location {
                aim: self.aim + n,
                ..self
            },
            Direction::Forward(n) => Location {
                position: self.position + n,
                depth: self.depth + (self.aim * n),
                ..self
            },
        }
    }
}

fn simulate(directions: &[Direction], part: Part) -> i64 {
    let final_location = directions
        .iter()
        .fold(Location::default(), |memo, &direction| match part {
            Part::Part1 => memo.perform_directional_move(direction),
            Part::Part2 => memo.perform_aim_based_move(direction),
        });
    trace!("{:?} finished at {:?}", part, final_location);

    final_location.position * final_location.depth
}

fn parse_direction(input: &str) -> IResult<&str, fn(i64) -> Direction> {
    alt((
        value(Direction::Forward as fn(i64) -> Direction, tag("forward")),
        value(Direction::Down as fn(i64) -> Direction, tag("down")),
        value(Direction::Up as fn(i64) -> Direction, tag("up")),
    ))(input)
}

fn parse_magnitude(input: &str) -> IResult<&str, i64> {
    map_res(take_while1(|c: char| c.is_ascii_digit()), str::parse)(input)
}

fn parse_line(line: &str) -> IResult<&str, Direction> {
    let (remaining, (make_direction, magnitude)) = terminated(
        separated_pair(parse_direction, tag(" "), parse_magnitude),
        eof,
    )(line.trim_end())?;

    Ok((remaining, make_direction(magnitude)))
}

fn parse_input(lines: &[String]) -> Vec<Direction> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (_, direction) = parse_line(line)
                .unwrap_or_else(|err| panic!("Failed to parse line '{}': {}", line, err));

            direction
        })
        .collect()
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let lines = puzzle_input::read_lines_from_file(input_file_name).expect("Could not open input file");
    let directions = parse_input(&lines);
    debug!("Parsed {} sub commands", directions.len());

    println!("Part 1: {}", simulate(&directions, Part::Part1));
    println!("Part 2: {}", simulate(&directions, Part::Part2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const SAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    fn sample_directions() -> Vec<Direction> {
        let lines = SAMPLE.lines().map(str::to_string).collect::<Vec<_>>();
        parse_input(&lines)
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(Direction::Forward(5), parse_line("forward 5").unwrap().1);
        assert_eq!(Direction::Down(12), parse_line("down 12").unwrap().1);
        assert_eq!(Direction::Up(3), parse_line("up 3\r").unwrap().1);
    }

    #[test]
    fn test_parse_line_rejects_unknown_command() {
        assert!(parse_line("backward 5").is_err());
        assert!(parse_line("up five").is_err());
        assert!(parse_line("up 5 6").is_err());
    }

    #[test]
    fn test_part1_sample() {
        assert_eq!(150, simulate(&sample_directions(), Part::Part1));
    }

    #[test]
    fn test_part2_sample() {
        assert_eq!(900, simulate(&sample_directions(), Part::Part2));
    }

    #[test]
    fn test_part2_answer_wider_than_i32() {
        let lines = vec![
            "down 1000".to_string(),
            "forward 1100".to_string(),
            "forward 1000".to_string(),
        ];

        assert_eq!(4_410_000_000, simulate(&parse_input(&lines), Part::Part2));
    }

    #[test]
    fn test_aim_does_not_move_without_forward() {
        let location = Location::default()
            .perform_aim_based_move(Direction::Down(4))
            .perform_aim_based_move(Direction::Up(1));

        assert_eq!(
            Location {
                position: 0,
                depth: 0,
                aim: 3
            },
            location
        );
    }
}
