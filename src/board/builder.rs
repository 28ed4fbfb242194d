//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece instead of replaying moves from
//! the initial setup.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, PieceColor, PieceKind, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position(4, 7), PieceColor::White, PieceKind::King)
//!     .piece(Position(4, 0), PieceColor::Black, PieceKind::King)
//!     .piece(Position(0, 6), PieceColor::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces(PieceColor::White).len(), 2);
//! ```

use super::{Board, Piece, PieceColor, PieceKind, Position};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = PieceColor::BOTH
            .iter()
            .flat_map(|&color| board.pieces(color))
            .collect();
        BoardBuilder { pieces }
    }

    /// Place an unmoved piece, replacing whatever the square held.
    #[must_use]
    pub fn piece(self, pos: Position, color: PieceColor, kind: PieceKind) -> Self {
        self.with(Piece::new(kind, color, pos))
    }

    /// Place a piece that counts as having moved already (no double step,
    /// no castling).
    #[must_use]
    pub fn moved_piece(self, pos: Position, color: PieceColor, kind: PieceKind) -> Self {
        self.with(Piece::new(kind, color, pos).with_moved(true))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|p| p.position() != pos);
        self
    }

    fn with(mut self, piece: Piece) -> Self {
        self.pieces.retain(|p| p.position() != piece.position());
        self.pieces.push(piece);
        self
    }

    /// Build the board. Pieces placed off the board are dropped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.place(piece);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        let standard = Board::new();
        assert_eq!(built.to_string(), standard.to_string());
        assert!(built.validate().is_ok());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Position(4, 7), PieceColor::White, PieceKind::King)
            .piece(Position(4, 0), PieceColor::Black, PieceKind::King)
            .build();

        assert!(board.piece_at(Position(4, 7)).is_some());
        assert!(board.piece_at(Position(4, 0)).is_some());
        assert!(board.piece_at(Position(0, 0)).is_none());
        assert_eq!(board.king_position(PieceColor::White), Some(Position(4, 7)));
    }

    #[test]
    fn test_replacing_a_square() {
        let board = BoardBuilder::new()
            .piece(Position(3, 3), PieceColor::White, PieceKind::Rook)
            .piece(Position(3, 3), PieceColor::Black, PieceKind::Knight)
            .build();
        let piece = board.piece_at(Position(3, 3)).unwrap();
        assert_eq!(piece.kind(), PieceKind::Knight);
        assert_eq!(board.piece_count(PieceColor::White), 0);
    }

    #[test]
    fn test_moved_piece_and_clear() {
        let board = BoardBuilder::starting_position()
            .clear(Position(0, 7))
            .moved_piece(Position(3, 4), PieceColor::White, PieceKind::Pawn)
            .build();

        assert!(board.piece_at(Position(0, 7)).is_none());
        assert!(board.piece_at(Position(1, 7)).is_some());
        assert!(board.piece_at(Position(3, 4)).unwrap().has_moved());
    }

    #[test]
    fn test_off_board_pieces_are_dropped() {
        let board = BoardBuilder::new()
            .piece(Position(9, 9), PieceColor::White, PieceKind::Queen)
            .build();
        assert_eq!(board.piece_count(PieceColor::White), 0);
    }
}
