#![warn(clippy::all, clippy::pedantic)]
//! Writes the boilerplate crate for a new day: `day<N>/Cargo.toml`, `day<N>/src/main.rs` and an empty
//! `day<N>/input.txt`. The workspace picks up any `day*` directory on its own.

use clap::Parser;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const MANIFEST_TEMPLATE: &str = include_str!("../templates/Cargo.toml.in");
const MAIN_TEMPLATE: &str = include_str!("../templates/main.rs.in");

#[derive(Debug, Error)]
enum Error {
    #[error("Failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{} already exists; refusing to overwrite it", .0.display())]
    AlreadyExists(PathBuf),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates a template crate for a day in Advent of Code.")]
struct Args {
    /// Number of the day
    day_num: u32,
    /// Name of the day's puzzle
    puzzle_name: String,
    /// URL of the day's puzzle
    puzzle_url: String,
    /// Directory to create the day's crate in
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

/// What goes into a generated day
struct DayTemplate<'a> {
    day_name: String,
    puzzle_name: &'a str,
    puzzle_url: &'a str,
}

impl<'a> DayTemplate<'a> {
    fn new(day_num: u32, puzzle_name: &'a str, puzzle_url: &'a str) -> Self {
        Self {
            day_name: format!("day{}", day_num),
            puzzle_name,
            puzzle_url,
        }
    }

    fn render(&self, template: &str) -> String {
        template
            .replace("{{day_name}}", &self.day_name)
            .replace("{{puzzle_name}}", self.puzzle_name)
            .replace("{{puzzle_url}}", self.puzzle_url)
    }

    fn manifest(&self) -> String {
        self.render(MANIFEST_TEMPLATE)
    }

    fn main_source(&self) -> String {
        self.render(MAIN_TEMPLATE)
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `contents` to a file that must not exist yet
fn write_new_file(path: &Path, contents: &str) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => Error::AlreadyExists(path.to_path_buf()),
            _ => io_error(path)(err),
        })?;
    file.write_all(contents.as_bytes()).map_err(io_error(path))?;
    debug!("Wrote {}", path.display());

    Ok(())
}

/// Create the crate for a day under `root`, returning the crate's directory.
///
/// The crate directory is reused if it exists, but its `Cargo.toml` and `src/main.rs` are never overwritten,
/// and an existing `input.txt` is left alone.
fn scaffold(root: &Path, template: &DayTemplate) -> Result<PathBuf, Error> {
    let day_dir = root.join(&template.day_name);
    let src_dir = day_dir.join("src");
    let manifest_path = day_dir.join("Cargo.toml");
    let main_path = src_dir.join("main.rs");
    let input_path = day_dir.join("input.txt");

    // Check both up front so a refusal doesn't leave half a crate behind
    for path in [&manifest_path, &main_path] {
        if path.exists() {
            return Err(Error::AlreadyExists(path.clone()));
        }
    }

    fs::create_dir_all(&src_dir).map_err(io_error(&src_dir))?;
    write_new_file(&manifest_path, &template.manifest())?;
    write_new_file(&main_path, &template.main_source())?;

    if input_path.exists() {
        debug!("Keeping existing {}", input_path.display());
    } else {
        write_new_file(&input_path, "")?;
    }

    Ok(day_dir)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let template = DayTemplate::new(args.day_num, &args.puzzle_name, &args.puzzle_url);
    let day_dir = scaffold(&args.root, &template)
        .unwrap_or_else(|err| panic!("Failed to create {}: {}", template.day_name, err));
    info!("Created {} for {}", day_dir.display(), args.puzzle_name);

    println!("{}", day_dir.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const PUZZLE_NAME: &str = "Day 8: Seven Segment Search";
    const PUZZLE_URL: &str = "https://adventofcode.com/2021/day/8";

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["scaffold", "8", PUZZLE_NAME, PUZZLE_URL]).unwrap();
        assert_eq!(8, args.day_num);
        assert_eq!(PUZZLE_NAME, args.puzzle_name);
        assert_eq!(PathBuf::from("."), args.root);

        assert!(Args::try_parse_from(["scaffold", "eight", PUZZLE_NAME, PUZZLE_URL]).is_err());
        assert!(Args::try_parse_from(["scaffold", "8", PUZZLE_NAME]).is_err());
    }

    #[test]
    fn test_render_fills_every_placeholder() {
        let template = DayTemplate::new(8, PUZZLE_NAME, PUZZLE_URL);
        let manifest = template.manifest();
        let main_source = template.main_source();

        assert!(manifest.contains("name = \"day8\""));
        assert!(main_source.contains(PUZZLE_NAME));
        assert!(main_source.contains(PUZZLE_URL));
        assert!(!manifest.contains("{{"));
        assert!(!main_source.contains("{{"));
    }

    #[test]
    fn test_generated_main_uses_every_dependency() {
        let template = DayTemplate::new(8, PUZZLE_NAME, PUZZLE_URL);
        let manifest = template.manifest();
        let main_source = template.main_source();

        for (dependency, usage) in [
            ("nom", "use nom::"),
            ("log", "use log::"),
            ("env_logger", "env_logger::init()"),
            ("puzzle-input", "puzzle_input::"),
        ] {
            assert!(manifest.contains(&format!("{} = ", dependency)));
            assert!(main_source.contains(usage), "template never uses {}", dependency);
        }
    }

    #[test]
    fn test_scaffold_creates_day_crate() {
        let root = tempfile::tempdir().unwrap();
        let template = DayTemplate::new(8, PUZZLE_NAME, PUZZLE_URL);

        let day_dir = scaffold(root.path(), &template).unwrap();

        assert_eq!(root.path().join("day8"), day_dir);
        assert_eq!(template.manifest(), fs::read_to_string(day_dir.join("Cargo.toml")).unwrap());
        assert_eq!(template.main_source(), fs::read_to_string(day_dir.join("src/main.rs")).unwrap());
        assert_eq!("", fs::read_to_string(day_dir.join("input.txt")).unwrap());
    }

    #[test]
    fn test_scaffold_refuses_to_overwrite() {
        let root = tempfile::tempdir().unwrap();
        let template = DayTemplate::new(8, PUZZLE_NAME, PUZZLE_URL);
        let day_dir = scaffold(root.path(), &template).unwrap();
        fs::write(day_dir.join("src/main.rs"), "fn main() {}\n").unwrap();

        let err = scaffold(root.path(), &template).unwrap_err();

        assert!(matches!(err, Error::AlreadyExists(_)));
        assert_eq!("fn main() {}\n", fs::read_to_string(day_dir.join("src/main.rs")).unwrap());
    }

    #[test]
    fn test_scaffold_keeps_existing_input() {
        let root = tempfile::tempdir().unwrap();
        let day_dir = root.path().join("day8");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), "be cfbegad\n").unwrap();

        scaffold(root.path(), &DayTemplate::new(8, PUZZLE_NAME, PUZZLE_URL)).unwrap();

        assert_eq!("be cfbegad\n", fs::read_to_string(day_dir.join("input.txt")).unwrap());
        assert!(day_dir.join("src/main.rs").exists());
    }
}
