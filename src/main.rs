use std::process::ExitCode;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cube_reduce::cube333::moves::Move333;
use cube_reduce::cube333::reduction_solver::ReductionSolver;
use cube_reduce::cube333::BitCube;
use cube_reduce::moves::MoveSequence;
use cube_reduce::notation::{describe_sequence, group_description};
use cube_reduce::scramble::scramble;

/// Scramble a cube (or apply the given moves) and solve it one subgroup at a time.
#[derive(Parser, Clone)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Length of the random scramble.
    #[clap(short, long, value_parser, default_value_t = 20)]
    scramble: usize,

    /// Seed for the random scramble.
    #[clap(long, value_parser)]
    seed: Option<u64>,

    /// Moves to apply instead of a random scramble, e.g. "R U R' U'".
    #[clap(short, long, value_parser)]
    moves: Option<String>,

    /// Also print the solution with neighbouring moves merged.
    #[clap(long, action)]
    simplify: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let scrambled: MoveSequence<Move333> = match &cli.moves {
        Some(text) => match text.parse() {
            Ok(seq) => seq,
            Err(e) => {
                eprintln!("could not read moves: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            scramble(cli.scramble, &mut rng)
        }
    };

    let cube = BitCube::SOLVED.make_moves(&scrambled);
    println!("Scramble: {}", describe_sequence(&scrambled));
    println!("{cube}");

    let solver = ReductionSolver::new();
    info!("solving {cube:?}");
    let solution = match solver.solve(&cube) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for (stage, seq) in &solution.stages {
        println!("{stage}: {}", describe_sequence(seq));
        println!("    {}", group_description(*stage));
    }

    let moves = solution.moves();
    println!("Solution ({} moves): {}", moves.len(), describe_sequence(&moves));
    if cli.simplify {
        let simplified = moves.cancel();
        println!(
            "Simplified ({} moves): {}",
            simplified.len(),
            describe_sequence(&simplified)
        );
    }

    ExitCode::SUCCESS
}
