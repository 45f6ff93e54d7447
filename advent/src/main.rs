//! Advent of Code 2023 solver.
//!
//! Reads a day's puzzle input (`input_files/input_day_<N>.txt` unless told
//! otherwise) and prints the answer for each part.

use std::path::{Path, PathBuf};

use advent::exit_codes;
use advent::io::config::{CONFIG_FILE, SolverConfig, load_config, write_config};
use advent::io::input::resolve_input_path;
use advent::solve::{Part, Puzzle, parts_to_solve, solve_file};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "advent", version, about = "Advent of Code 2023 puzzle solutions")]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one day. Prints the bare answer with `--part`, one line per part otherwise.
    Solve {
        /// Day number.
        day: u8,
        /// Only solve this part.
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,
        /// Input file (default: `<input_dir>/input_day_<DAY>.txt`).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List the days with a solution.
    List,
    /// Write the default config file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    advent::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { day, part, input } => {
            cmd_solve(&cli.config, day, part, input.as_deref())
        }
        Command::List => cmd_list(),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn cmd_solve(config_path: &Path, day: u8, part: Option<u8>, input: Option<&Path>) -> Result<()> {
    let cfg = load_config(config_path)?;
    let puzzle = Puzzle::from_day(day)?;
    let requested = part.map(Part::try_from).transpose()?;
    let parts = parts_to_solve(puzzle, requested)?;
    let path = resolve_input_path(&cfg, day, input);
    debug!(day, path = %path.display(), parts = parts.len(), "solving");

    for solution in solve_file(&cfg, puzzle, &parts, &path)? {
        if requested.is_some() {
            println!("{}", solution.answer);
        } else {
            println!("part {}: {}", solution.part, solution.answer);
        }
    }
    Ok(())
}

fn cmd_list() -> Result<()> {
    for puzzle in Puzzle::ALL {
        let parts: Vec<String> = puzzle.parts().iter().map(Part::to_string).collect();
        println!(
            "day {:>2}: {} (parts {})",
            puzzle.day(),
            puzzle.title(),
            parts.join(", ")
        );
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &SolverConfig::default())?;
    println!("init: wrote {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve_with_part_and_input() {
        let cli = Cli::parse_from(["advent", "solve", "8", "--part", "2", "-i", "map.txt"]);
        match cli.command {
            Command::Solve { day, part, input } => {
                assert_eq!(day, 8);
                assert_eq!(part, Some(2));
                assert_eq!(input, Some(PathBuf::from("map.txt")));
            }
            _ => panic!("expected solve"),
        }
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn parse_rejects_part_three() {
        assert!(Cli::try_parse_from(["advent", "solve", "8", "--part", "3"]).is_err());
    }

    #[test]
    fn parse_init_force_with_config() {
        let cli = Cli::parse_from(["advent", "init", "--force", "--config", "custom.toml"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
