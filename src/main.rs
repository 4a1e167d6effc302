#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use tictactoe::{ui, GameEngine, GameStatus, Intent, BOARD_SIZE};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game on this terminal.
    Play,
    /// Apply a scripted sequence of moves and print the final position.
    Replay {
        #[arg(
            long,
            value_delimiter = ',',
            help = "Cell indices 0-8 in move order (e.g., --moves 0,4,8)"
        )]
        moves: Vec<usize>,
        #[arg(long, help = "Emit the final view model as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play => play(),
        Commands::Replay { moves, json } => replay(&moves, json),
    }
}

#[cfg(feature = "std")]
fn play() -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    println!("Commands: cell (0-8 or A1-C3), jump <step>, sort, quit");
    loop {
        ui::print_view(&engine.view(), engine.current_step());
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            break;
        }
        let intent = match parse_intent(line) {
            Some(intent) => intent,
            None => {
                println!("Invalid input");
                continue;
            }
        };
        match engine.apply(intent) {
            Ok(view) => {
                if matches!(intent, Intent::PlaceMark(_))
                    && !matches!(engine.status(), GameStatus::InProgress)
                {
                    log::info!("game over after {} plies: {}", engine.current_step(), view.status_text);
                }
            }
            Err(e) => println!("Rejected: {}", e),
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn replay(moves: &[usize], json: bool) -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    for &index in moves {
        match engine.apply(Intent::PlaceMark(index)) {
            Ok(view) => log::debug!("move at {} -> {}", index, view.status_text),
            Err(e) => log::warn!("move at {} rejected: {}", index, e),
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&engine.view())?);
    } else {
        ui::print_view(&engine.view(), engine.current_step());
    }
    Ok(())
}

#[cfg(feature = "std")]
fn parse_intent(line: &str) -> Option<Intent> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    if head.eq_ignore_ascii_case("sort") {
        return Some(Intent::ToggleSort);
    }
    if head.eq_ignore_ascii_case("jump") {
        let step: usize = parts.next()?.parse().ok()?;
        return Some(Intent::JumpTo(step));
    }
    parse_cell(head).map(Intent::PlaceMark)
}

/// Accepts a bare cell index (`0`-`8`) or a column-letter/row-number
/// coordinate such as `B2`.
#[cfg(feature = "std")]
fn parse_cell(input: &str) -> Option<usize> {
    if let Ok(index) = input.parse::<usize>() {
        return Some(index);
    }
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1) * BOARD_SIZE + col)
}
