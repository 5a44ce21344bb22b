use std::env;
use std::process;

use engine::perft::{run_position, PERFT_POSITIONS};

fn main() {
    let max_depth: u32 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4);

    println!("Perft to depth {max_depth}");

    let mut failed = 0;
    for position in PERFT_POSITIONS {
        if !run_position(position, max_depth) {
            failed += 1;
        }
    }

    if failed > 0 {
        println!("\n{failed} position(s) failed");
        process::exit(1);
    }
    println!("\nall positions passed");
}
