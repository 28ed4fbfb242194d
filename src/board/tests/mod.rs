//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move and attack geometry
//! - `castling.rs` - Castling preconditions and rook relocation
//! - `detector.rs` - Check, checkmate and stalemate
//! - `make_move.rs` - Move application, rejection and copy independence
//! - `perft.rs` - Move tree counts from the initial position
//! - `proptest.rs` - Property-based tests over random games

mod proptest;

use crate::board::{Board, BoardBuilder, Move, PieceColor, PieceKind, Position};

/// Board holding just the given pieces, all unmoved.
pub(super) fn board_with(pieces: &[(Position, PieceColor, PieceKind)]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &(pos, color, kind)| {
            builder.piece(pos, color, kind)
        })
        .build()
}

/// Destinations of `moves`, sorted.
pub(super) fn targets(moves: &[Move]) -> Vec<Position> {
    let mut squares: Vec<Position> = moves.iter().map(Move::to).collect();
    squares.sort();
    squares
}

/// Play coordinate moves on `board`, panicking on any rejection.
pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        board
            .make_move_str(text)
            .unwrap_or_else(|err| panic!("{text} rejected: {err}"));
    }
}
