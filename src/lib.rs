pub mod board;
pub mod game;

pub use board::{Board, CheckStatus, Move, Piece, PieceColor, PieceKind, Position};
pub use game::{Game, GameResult};
