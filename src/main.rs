#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use knights_tour::prelude::*;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

/// Knight's Tour puzzle: visit every cell exactly once using knight moves.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Difficulty level, clamped to the preset table (0..=5).
    #[arg(long, default_value_t = 0)]
    level: i32,
    /// Resume a saved game from a token printed by 'save'.
    #[arg(long)]
    resume: Option<String>,
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Option<(i32, i32)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_lowercase();
    if !col_ch.is_ascii_lowercase() {
        return None;
    }
    let col = (col_ch as u8 - b'a') as i32;
    let row_str: String = chars.collect();
    let row: i32 = row_str.trim().parse().ok()?;
    Some((col, row - 1))
}

#[cfg(feature = "std")]
fn announce(engine: &GameEngine) {
    if engine.is_solved() {
        println!("Solved in {} moves!", engine.move_count());
    } else {
        println!("Game over after {} moves, no legal move left.", engine.move_count());
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut engine = GameEngine::new(cli.level);
    if let Some(token) = cli.resume.as_deref() {
        engine.restore(token);
    }
    log::info!("{}x{} board", engine.width(), engine.height());
    println!("Place the knight anywhere, then tour the board.");
    println!("Enter a cell like 'b3', or 'save', 'new', 'quit'.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&engine);
        if engine.is_end() {
            announce(&engine);
            print!("'new' to start over, 'quit' to exit> ");
        } else {
            print!("move> ");
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_ascii_lowercase();
        match input.as_str() {
            "" => continue,
            "quit" | "q" => break,
            "new" => engine.reset(cli.level),
            "save" => println!("{}", engine.to_token()),
            _ => {
                let Some((x, y)) = parse_coord(&input) else {
                    println!("unrecognized input: {}", input);
                    continue;
                };
                if !engine.attempt_move(x, y) {
                    println!("illegal move");
                }
            }
        }
    }

    Ok(())
}
