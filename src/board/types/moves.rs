//! Move record and its builder.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::position::Position;
use crate::board::error::MoveBuildError;

/// One proposed transition of the board.
///
/// A move only describes the change; applying it is the board's job.
/// `piece` and `captured` are snapshots taken when the move was generated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
    piece: Piece,
    captured: Option<Piece>,
    is_castling: bool,
    is_promotion: bool,
    is_en_passant: bool,
}

impl Move {
    /// Start building a move.
    #[must_use]
    pub fn builder() -> MoveBuilder {
        MoveBuilder::default()
    }

    /// A plain move or capture of `piece` to `to`.
    #[must_use]
    pub(crate) const fn simple(piece: Piece, to: Position, captured: Option<Piece>) -> Self {
        Move {
            from: piece.position(),
            to,
            piece,
            captured,
            is_castling: false,
            is_promotion: false,
            is_en_passant: false,
        }
    }

    /// A castling king move.
    #[must_use]
    pub(crate) const fn castle(king: Piece, to: Position) -> Self {
        Move {
            from: king.position(),
            to,
            piece: king,
            captured: None,
            is_castling: true,
            is_promotion: false,
            is_en_passant: false,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Position {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Position {
        self.to
    }

    /// The moving piece as it stood before the move.
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.is_castling
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    /// True if this move goes from `from` to `to`.
    #[inline]
    #[must_use]
    pub fn connects(&self, from: Position, to: Position) -> bool {
        self.from == from && self.to == to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Named-field construction of a [`Move`].
///
/// # Example
/// ```
/// use chess_core::board::{Board, Move, Position};
///
/// let board = Board::new();
/// let pawn = board.piece_at(Position(4, 6)).unwrap();
/// let mv = Move::builder()
///     .from(pawn.position())
///     .to(Position(4, 4))
///     .piece(pawn)
///     .build()
///     .unwrap();
/// assert_eq!(mv.to_string(), "e2e4");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveBuilder {
    from: Option<Position>,
    to: Option<Position>,
    piece: Option<Piece>,
    captured: Option<Piece>,
    is_castling: bool,
    is_promotion: bool,
    is_en_passant: bool,
}

impl MoveBuilder {
    #[must_use]
    pub const fn from(mut self, from: Position) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub const fn to(mut self, to: Position) -> Self {
        self.to = Some(to);
        self
    }

    #[must_use]
    pub const fn piece(mut self, piece: Piece) -> Self {
        self.piece = Some(piece);
        self
    }

    #[must_use]
    pub const fn captured(mut self, captured: Piece) -> Self {
        self.captured = Some(captured);
        self
    }

    #[must_use]
    pub const fn castling(mut self, is_castling: bool) -> Self {
        self.is_castling = is_castling;
        self
    }

    #[must_use]
    pub const fn promotion(mut self, is_promotion: bool) -> Self {
        self.is_promotion = is_promotion;
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, is_en_passant: bool) -> Self {
        self.is_en_passant = is_en_passant;
        self
    }

    /// Finish the move. Origin, destination and piece are mandatory.
    pub fn build(self) -> Result<Move, MoveBuildError> {
        let from = self.from.ok_or(MoveBuildError::MissingField { field: "from" })?;
        let to = self.to.ok_or(MoveBuildError::MissingField { field: "to" })?;
        let piece = self
            .piece
            .ok_or(MoveBuildError::MissingField { field: "piece" })?;

        Ok(Move {
            from,
            to,
            piece,
            captured: self.captured,
            is_castling: self.is_castling,
            is_promotion: self.is_promotion,
            is_en_passant: self.is_en_passant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceColor, PieceKind};

    #[test]
    fn test_builder_requires_mandatory_fields() {
        let knight = Piece::new(PieceKind::Knight, PieceColor::White, Position(6, 7));
        let err = Move::builder().to(Position(5, 5)).piece(knight).build();
        assert_eq!(err, Err(MoveBuildError::MissingField { field: "from" }));

        let err = Move::builder().from(Position(6, 7)).to(Position(5, 5)).build();
        assert_eq!(err, Err(MoveBuildError::MissingField { field: "piece" }));
    }

    #[test]
    fn test_builder_sets_flags() {
        let king = Piece::new(PieceKind::King, PieceColor::White, Position(4, 7));
        let mv = Move::builder()
            .from(Position(4, 7))
            .to(Position(6, 7))
            .piece(king)
            .castling(true)
            .build()
            .unwrap();
        assert!(mv.is_castling());
        assert!(!mv.is_promotion());
        assert!(!mv.is_en_passant());
        assert!(!mv.is_capture());
        assert_eq!(mv, Move::castle(king, Position(6, 7)));
        assert_eq!(mv.to_string(), "e1g1");
    }
}
