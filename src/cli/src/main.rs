#![warn(clippy::pedantic)]

mod config;
mod net;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use cube_core::{
    ColorCounts, FaceletCube, MoveSequence, Solver, apply_moves, is_complete, is_plausible,
    scramble,
};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;

use crate::config::CliConfig;

/// Turns, scrambles and checks a 3x3x3 cube described sticker by sticker.
///
/// Cubes are given as 54-character facelet strings: the faces in U R F D L B
/// order, each read row by row, each sticker written as the letter of the
/// face whose color it has, `.` for a sticker that is not filled in yet.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file, in TOML format. Defaults to `cube/config.toml` in
    /// the platform config directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a solved cube with random quarter turns
    Scramble {
        /// Number of moves; defaults to the configured scramble length
        #[arg(short = 'n', long)]
        moves: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence, e.g. "R U' F2"
    Apply {
        /// The moves to apply
        sequence: String,
        /// The cube to start from; a solved cube if not given
        #[arg(long, short = 'f')]
        facelets: Option<String>,
    },
    /// Check whether a cube is completely filled in and has plausible colors
    Check {
        /// The cube to check
        facelets: String,
    },
    /// Run the layer-by-layer solver
    Solve {
        /// The cube to solve
        facelets: String,
    },
    /// Print the sequence that undoes the given one
    Invert {
        /// The moves to invert
        sequence: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Scramble { moves, seed } => {
            let mut rng = match seed.or(config.seed) {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let mut cube = FaceletCube::solved();
            let moves = scramble(
                &mut cube,
                moves.unwrap_or(config.scramble_length),
                &mut rng,
            );

            println!("Scramble: {moves}");
            print_cube(&cube, &config);
        }
        Commands::Apply { sequence, facelets } => {
            let moves = sequence.parse::<MoveSequence>()?;
            let mut cube = match facelets {
                Some(facelets) => facelets.parse::<FaceletCube>()?,
                None => FaceletCube::solved(),
            };

            info!("Applying {} moves", moves.len());
            apply_moves(&mut cube, &moves);
            print_cube(&cube, &config);
        }
        Commands::Check { facelets } => {
            let cube = facelets.parse::<FaceletCube>()?;
            let counts = ColorCounts::of(&cube);

            println!("{counts}");
            report("Complete", is_complete(&cube), &config);
            report("Plausible", is_plausible(&cube), &config);

            let uneven = counts
                .uneven()
                .map(|(color, count)| format!("{color} ({count})"))
                .join(", ");
            if is_complete(&cube) && !uneven.is_empty() {
                println!("Colors not appearing 9 times: {uneven}");
            }
        }
        Commands::Solve { facelets } => {
            let mut cube = facelets.parse::<FaceletCube>()?;
            let solution = Solver::new().solve(&mut cube)?;

            println!("{solution}");
            print_cube(&cube, &config);
        }
        Commands::Invert { sequence } => {
            println!("{}", sequence.parse::<MoveSequence>()?.inverse());
        }
    }

    Ok(())
}

fn print_cube(cube: &FaceletCube, config: &CliConfig) {
    println!("{}", net::render(cube, config.color));
    println!("{cube}");
}

fn report(what: &str, ok: bool, config: &CliConfig) {
    let verdict = match (ok, config.color) {
        (true, true) => "yes".green().to_string(),
        (false, true) => "no".red().to_string(),
        (true, false) => "yes".to_owned(),
        (false, false) => "no".to_owned(),
    };
    println!("{what}: {verdict}");
}
