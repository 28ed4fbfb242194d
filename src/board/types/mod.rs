//! Core chess types.
//!
//! This module contains the value types the rest of the crate is built on:
//! - `Position` - (file, rank) coordinate, valid or not
//! - `PieceKind` and `PieceColor` - piece kinds and sides
//! - `Piece` - a piece with its location and moved flag
//! - `Move` and `MoveBuilder` - move records

mod moves;
mod piece;
mod position;

pub use moves::{Move, MoveBuilder};
pub use piece::{Piece, PieceColor, PieceKind};
pub use position::{Position, BOARD_SIZE};
