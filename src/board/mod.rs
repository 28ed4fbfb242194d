//! Chess board representation and rules.
//!
//! An 8x8 grid of owned piece values with per-color piece lists, per-piece
//! move and attack generation, and check/checkmate/stalemate detection.
//! Castling is fully supported; pawn promotion and en passant are left as
//! extension points.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, PieceColor};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(PieceColor::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod detector;
mod display;
mod error;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use detector::{AttackMap, CheckStatus};
pub use error::{BoardError, MoveBuildError, MoveParseError, PositionError};
pub use state::Board;
pub use types::{Move, MoveBuilder, Piece, PieceColor, PieceKind, Position, BOARD_SIZE};
