//! Text rendering of the two board views for the CLI layer.

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::game::{Game, Side};

/// Print the human player's own waters: ships, incoming hits and misses,
/// plus per-ship status lines.
pub fn print_own_board(game: &Game) {
    let board = game.board(Side::Human);
    println!("\n    Your territory:");
    print_grid(|coord| {
        let attacked = board.was_attacked(coord);
        let ship = board.has_ship_at(coord);
        match (attacked, ship) {
            (true, true) => 'X',
            (true, false) => 'o',
            (false, true) => 'S',
            (false, false) => '.',
        }
    });
    println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
    println!("\n    Fleet:");
    for (ship, remaining) in board.ships().iter().zip(board.remaining()) {
        let status = if remaining.is_sunk() { "SUNK" } else { "Afloat" };
        println!("      {} ({}): {}", ship.class(), ship.len(), status);
    }
}

/// Print the tracking view of the automated side's waters: only what the
/// human has learned from attacks so far.
pub fn print_tracking_board(game: &Game) {
    let board = game.board(Side::Automated);
    println!("\n    Enemy waters:");
    print_grid(|coord| {
        if !board.was_attacked(coord) {
            '.'
        } else if board.has_ship_at(coord) {
            'X'
        } else {
            'o'
        }
    });
    println!("    Legend: X=Hit  o=Miss  .=Unknown");
}

fn print_grid<F: Fn(Coord) -> char>(cell: F) {
    println!("    ╔═══════════════════════╗");
    print!("    ║  ");
    for col in 0..BOARD_SIZE {
        print!(" {}", (b'A' + col) as char);
    }
    println!(" ║");
    println!("    ╠═══════════════════════╣");
    for coord in Coord::all() {
        if coord.col() == 1 {
            print!("    ║ {:2}", coord.row());
        }
        print!(" {}", cell(coord));
        if coord.col() == BOARD_SIZE {
            println!(" ║");
        }
    }
    println!("    ╚═══════════════════════╝");
}
