//! Piece, kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Parse a piece kind from a character (p, n, b, r, q, k, either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn symbol(self, color: PieceColor) -> char {
        let c = self.to_char();
        if color == PieceColor::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Back rank for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn home_rank(self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Pawn forward direction (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Pawn starting rank (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "WHITE"),
            PieceColor::Black => write!(f, "BLACK"),
        }
    }
}

/// A piece on the board.
///
/// Pieces are plain values owned by the board grid. Copying a piece (or the
/// board holding it) never aliases the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: PieceColor,
    position: Position,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece standing on `position`.
    #[must_use]
    pub const fn new(kind: PieceKind, color: PieceColor, position: Position) -> Self {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> PieceColor {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Whether the piece has moved since setup. Drives pawn double steps and
    /// castling eligibility.
    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[must_use]
    pub const fn with_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
        self.has_moved = true;
    }

    /// Character used in board diagrams (uppercase for White)
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    /// Same kind and color.
    #[inline]
    #[must_use]
    pub(crate) fn same_identity(&self, other: &Piece) -> bool {
        self.kind == other.kind && self.color == other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)
    }
}
