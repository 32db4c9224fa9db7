//! Self-play driver: plays the engine against itself from a FEN and prints
//! each move, the board, and the result.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use sable_chess::engines::engine_greedy::GreedyEngine;
use sable_chess::engines::engine_negamax::{NegamaxEngine, MAX_DEPTH, MIN_DEPTH};
use sable_chess::engines::engine_trait::Engine;
use sable_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use sable_chess::game_state::game_state::GameState;
use sable_chess::search::negamax::SearchConfig;
use sable_chess::utils::render_game_state::render_game_state;

/// Sable chess self-play.
#[derive(Parser)]
#[command(name = "sable_chess")]
#[command(about = "Play the negamax engine against itself")]
struct Cli {
    /// Starting position in FEN.
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Search depth in plies.
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(MIN_DEPTH as i64..=MAX_DEPTH as i64))]
    depth: u8,

    /// Stop after this many plies even if the game is not over.
    #[arg(short, long, default_value_t = 200)]
    max_plies: usize,

    /// Print the board after every move.
    #[arg(long)]
    show_board: bool,

    /// Play with the 1-ply greedy engine instead of negamax.
    #[arg(long)]
    greedy: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut game = match GameState::from_fen(&cli.fen) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "could not set up the starting position");
            return ExitCode::FAILURE;
        }
    };
    let mut engine: Box<dyn Engine> = if cli.greedy {
        Box::new(GreedyEngine::new())
    } else {
        Box::new(NegamaxEngine::new(SearchConfig { depth: cli.depth }))
    };
    info!(engine = engine.name(), depth = cli.depth, "starting self-play");

    println!("{}", render_game_state(&game));

    let mut plies = 0;
    loop {
        game.legal_moves();
        if game.is_checkmate() {
            let winner = game.side_to_move().opposite();
            println!("Checkmate, {winner:?} wins");
            break;
        }
        if game.is_stalemate() {
            println!("Stalemate");
            break;
        }
        if plies >= cli.max_plies {
            println!("Stopped after {plies} plies");
            break;
        }

        let output = match engine.choose_move(&game) {
            Ok(output) => output,
            Err(err) => {
                error!(%err, "engine failed to choose a move");
                return ExitCode::FAILURE;
            }
        };
        for line in &output.info_lines {
            debug!("{line}");
        }
        let Some(mv) = output.best_move else {
            error!("no move available in a non-terminal position");
            return ExitCode::FAILURE;
        };

        let number = plies / 2 + 1;
        if plies % 2 == 0 {
            println!("{number}. {mv}");
        } else {
            println!("{number}... {mv}");
        }

        game.make_move(mv);
        plies += 1;
        if cli.show_board {
            println!("{}", render_game_state(&game));
        }
    }

    info!(plies, fen = %game.get_fen(), "self-play finished");
    ExitCode::SUCCESS
}
