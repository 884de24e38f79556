#![warn(clippy::all, clippy::pedantic)]
//! Reading puzzle input files.
//!
//! Every day binary takes its input path as the first argument, falling back to the `input.txt` that lives
//! next to the day's `Cargo.toml`.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The name of the input file each day's crate keeps alongside its manifest
pub const DEFAULT_INPUT_FILE_NAME: &str = "input.txt";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not read input file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Pick the input path for a day: the given argument if there is one, otherwise `input.txt` inside `crate_dir`.
///
/// `crate_dir` is expected to be the calling crate's `env!("CARGO_MANIFEST_DIR")`.
pub fn input_path(arg: Option<String>, crate_dir: &str) -> PathBuf {
    let path = arg.map_or_else(
        || Path::new(crate_dir).join(DEFAULT_INPUT_FILE_NAME),
        PathBuf::from,
    );
    debug!("Using input file {}", path.display());

    path
}

/// Read the whole input file as a string.
///
/// # Errors
/// Returns [`Error::Read`] if the file cannot be opened or is not valid UTF-8.
pub fn read_text_from_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the input file as a list of lines, without their line terminators.
///
/// # Errors
/// Returns [`Error::Read`] if the file cannot be opened or is not valid UTF-8.
pub fn read_lines_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let lines = read_text_from_file(path)?
        .lines()
        .map(str::to_string)
        .collect::<Vec<_>>();
    debug!("Read {} lines of input", lines.len());

    Ok(lines)
}
