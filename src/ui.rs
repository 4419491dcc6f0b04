#![cfg(feature = "std")]
//! Terminal rendering of the puzzle board.

use crate::common::CellState;
use crate::game::GameEngine;

/// Print the board with column letters and 1-based row numbers. The knight
/// is `K`, visited cells `x`, candidate cells `+`, empty cells `.`.
pub fn print_board(engine: &GameEngine) {
    print!("   ");
    for x in 0..engine.width() {
        let ch = (b'a' + x as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for y in 0..engine.height() {
        print!("{:2} ", y + 1);
        for x in 0..engine.width() {
            let ch = if engine.knight() == Some((x, y)) {
                'K'
            } else {
                match engine.cell(x, y).unwrap_or(CellState::Empty) {
                    CellState::Visited => 'x',
                    CellState::Candidate => '+',
                    CellState::Empty => '.',
                }
            };
            print!(" {}", ch);
        }
        println!();
    }
}
