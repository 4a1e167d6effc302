#![cfg(feature = "std")]

//! Terminal rendering of the game view.
//!
//! Everything here consumes the read-only [`GameView`]; nothing reaches back
//! into engine state.

use crate::config::BOARD_SIZE;
use crate::view::GameView;

fn cell_in_line(line: Option<[usize; 3]>, index: usize) -> bool {
    line.map(|l| l.contains(&index)).unwrap_or(false)
}

/// Print the board grid with column letters and row numbers. Cells on the
/// winning line are bracketed.
pub fn print_board(view: &GameView) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!("  {} ", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let index = r * BOARD_SIZE + c;
            let mark = match view.board[index] {
                "" => ".",
                m => m,
            };
            if cell_in_line(view.winning_line, index) {
                print!(" [{}]", mark);
            } else {
                print!("  {} ", mark);
            }
        }
        println!();
    }
}

/// Print the move list in display order, marking the current step.
pub fn print_move_list(view: &GameView, current_step: usize) {
    println!(
        "Moves ({}):",
        if view.is_ascending {
            "ascending"
        } else {
            "descending"
        }
    );
    for entry in &view.move_list {
        let marker = if entry.step == current_step { '>' } else { ' ' };
        println!(" {} [{}] {}", marker, entry.step, entry.label);
    }
}

/// Display one full frame: board, status line, and move list.
pub fn print_view(view: &GameView, current_step: usize) {
    println!();
    print_board(view);
    println!("\n{}", view.status_text);
    print_move_list(view, current_step);
}
