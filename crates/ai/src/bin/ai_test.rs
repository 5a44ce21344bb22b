use std::time::Instant;

use ai::{search, Difficulty};
use engine::{Board, Game, GameLogger};

fn main() {
    println!("Search smoke test");
    println!("{}", "=".repeat(50));

    let board = Board::initial();
    for depth in 1..=4 {
        let start = Instant::now();
        let result = search(&board, engine::Color::White, depth);
        let elapsed = start.elapsed().as_secs_f64();
        match result.best_move {
            Some(mv) => println!(
                "depth {depth}: {mv} (eval {}, {} nodes, {elapsed:.3}s)",
                result.evaluation, result.nodes_searched
            ),
            None => println!("depth {depth}: no move"),
        }
    }

    println!("\nSelf-play, intermediate tier");
    println!("{}", "=".repeat(50));

    let tier = Difficulty::Intermediate;
    let depth = tier.search_depth().unwrap_or(0);
    let mut game = Game::new();
    let mut logger = GameLogger::new();

    for _ in 0..10 {
        if game.status().is_game_over() {
            break;
        }
        let result = search(game.board(), game.side_to_move(), depth);
        let Some(mv) = result.best_move else {
            break;
        };
        match game.apply_move(mv) {
            Ok(record) => logger.log_engine_move(&record, result.evaluation, depth),
            Err(err) => {
                println!("engine produced a rejected move: {err}");
                break;
            }
        }
    }
    logger.log_game_end(game.status());

    println!("{}", logger.contents());
    println!("{}", game.board().render());
    println!("status: {:?}", game.status());
}
