//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status(PieceColor::White), CheckStatus::NotInCheck);
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, CheckStatus, Move, MoveParseError, Piece, PieceColor,
    PieceKind, Position, PositionError,
};
