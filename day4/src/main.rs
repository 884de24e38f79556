#![warn(clippy::all, clippy::pedantic)]

use log::{debug, trace};
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, space0, space1},
    combinator::{eof, map_opt, map_res},
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated},
    IResult,
};
use std::collections::VecDeque;
use std::env;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

const BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BingoTile {
    Unmarked(u8),
    Marked(u8),
}

#[derive(Clone, PartialEq, Eq)]
struct BingoBoard([[BingoTile; BOARD_SIZE]; BOARD_SIZE]);

#[derive(Debug, Clone)]
struct Input {
    calls: Vec<u8>,
    boards: Vec<BingoBoard>,
}

/// A board, along with whether or not it has already won
struct BoardState {
    won: bool,
    board: BingoBoard,
}

/// A game in progress. Iterating over the game draws numbers until at least one board wins with the draw,
/// and yields that draw along with every board that won with it, in board order.
struct BingoGame {
    calls: VecDeque<u8>,
    boards: Vec<BoardState>,
}

impl BingoTile {
    fn is_marked(self) -> bool {
        matches!(self, BingoTile::Marked(_))
    }
}

impl Display for BingoTile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(2);
        match self {
            BingoTile::Marked(_) => write!(f, "{:>width$}", "x", width = width),
            BingoTile::Unmarked(n) => write!(f, "{:>width$}", n, width = width),
        }
    }
}

impl Debug for BingoBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for tile in row {
                write!(f, "{:2} ", tile)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl From<Input> for BingoGame {
    /// Start a new game from the given puzzle input
    fn from(input: Input) -> Self {
        let calls = VecDeque::from(input.calls);
        let boards = input
            .boards
            .into_iter()
            .map(|board| BoardState { won: false, board })
            .collect();

        Self { calls, boards }
    }
}

impl BingoBoard {
    /// Build a board from parsed rows, if they make up a full board
    fn from_rows(rows: Vec<Vec<u8>>) -> Option<Self> {
        if rows.len() != BOARD_SIZE {
            return None;
        }

        let mut board = [[BingoTile::Unmarked(0); BOARD_SIZE]; BOARD_SIZE];
        for (board_row, raw_row) in board.iter_mut().zip(rows) {
            if raw_row.len() != BOARD_SIZE {
                return None;
            }

            for (tile, n) in board_row.iter_mut().zip(raw_row) {
                *tile = BingoTile::Unmarked(n);
            }
        }

        Some(Self(board))
    }

    /// Check if this board has a fully marked row or column
    fn is_winner(&self) -> bool {
        let won_by_row = self.0.iter().any(|row| row.iter().all(|tile| tile.is_marked()));
        let won_by_col = (0..BOARD_SIZE).any(|col| self.0.iter().all(|row| row[col].is_marked()));

        won_by_row || won_by_col
    }

    /// Mark the given number on the board, if it exists
    fn mark_n(&mut self, n: u8) {
        for tile in self.0.iter_mut().flatten() {
            if *tile == BingoTile::Unmarked(n) {
                *tile = BingoTile::Marked(n);
            }
        }
    }

    fn unmarked_sum(&self) -> u32 {
        self.0
            .iter()
            .flatten()
            .filter_map(|&tile| match tile {
                BingoTile::Unmarked(n) => Some(u32::from(n)),
                BingoTile::Marked(_) => None,
            })
            .sum()
    }

    /// The score of a winning board: the sum of its unmarked numbers times the number that made it win
    fn score(&self, winning_call: u8) -> u32 {
        self.unmarked_sum() * u32::from(winning_call)
    }
}

impl Iterator for BingoGame {
    // Yields the winning call and all of the boards that won with that call
    type Item = (u8, Vec<BingoBoard>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(call) = self.calls.pop_front() {
            let mut winning_boards = vec![];
            // Boards that have won are out of the game; they are never marked or checked again
            for BoardState { won, board } in self.boards.iter_mut().filter(|state| !state.won) {
                board.mark_n(call);
                if board.is_winner() {
                    // Keep going after a winner; more than one board can win on the same call
                    trace!("Board won with call {}\n{:?}", call, board);
                    winning_boards.push(board.clone());
                    *won = true;
                }
            }

            if !winning_boards.is_empty() {
                return Some((call, winning_boards));
            }
        }

        None
    }
}

/// The score of the first board to win, if any board wins
fn part1(input: &Input) -> Option<u32> {
    let mut game = BingoGame::from(input.clone());
    let (winning_call, winning_boards) = game.next()?;
    let winning_board = winning_boards.first()?;

    Some(winning_board.score(winning_call))
}

/// The score of the last board to win, if any board wins
fn part2(input: &Input) -> Option<u32> {
    let game = BingoGame::from(input.clone());
    let (winning_call, winning_boards) = game.last()?;
    let winning_board = winning_boards.last()?;

    Some(winning_board.score(winning_call))
}

fn parse_bingo_number(input: &str) -> IResult<&str, u8> {
    map_res(take_while1(|c: char| c.is_ascii_digit()), str::parse)(input)
}

fn parse_bingo_calls(calls_line: &str) -> IResult<&str, Vec<u8>> {
    separated_list1(char(','), parse_bingo_number)(calls_line)
}

fn parse_bingo_row(input: &str) -> IResult<&str, Vec<u8>> {
    preceded(space0, separated_list1(space1, parse_bingo_number))(input)
}

fn parse_bingo_board(input_chunk: &str) -> IResult<&str, BingoBoard> {
    map_opt(
        separated_list1(terminated(char('\n'), space0), parse_bingo_row),
        BingoBoard::from_rows,
    )(input_chunk)
}

fn parse_input(input: &str) -> IResult<&str, Input> {
    let (remaining, (calls, boards)) = terminated(
        separated_pair(
            parse_bingo_calls,
            tag("\n\n"),
            separated_list1(tag("\n\n"), parse_bingo_board),
        ),
        preceded(multispace0, eof),
    )(input)?;

    Ok((remaining, Input { calls, boards }))
}

fn main() {
    env_logger::init();

    let input_file_name = puzzle_input::input_path(env::args().nth(1), env!("CARGO_MANIFEST_DIR"));
    let raw_input = puzzle_input::read_text_from_file(input_file_name)
        .expect("Could not open input file")
        .replace("\r\n", "\n");
    let (_, parsed_input) = parse_input(&raw_input).expect("Failed to parse input");
    debug!(
        "Parsed {} calls and {} boards",
        parsed_input.calls.len(),
        parsed_input.boards.len()
    );

    println!(
        "Part 1: {}",
        part1(&parsed_input).expect("Puzzle produced no winner for any bingo boards")
    );
    println!(
        "Part 2: {}",
        part2(&parsed_input).expect("Puzzle produced no winner for any bingo boards")
    );
}
