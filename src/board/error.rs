//! Error types for board operations.

use std::fmt;

use super::{PieceColor, Position};

/// Error type for position parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: i8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for incomplete move construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveBuildError {
    /// A mandatory field was never set
    MissingField { field: &'static str },
}

impl fmt::Display for MoveBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveBuildError::MissingField { field } => {
                write!(f, "Move is missing mandatory field '{field}'")
            }
        }
    }
}

impl std::error::Error for MoveBuildError {}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<PositionError> for MoveParseError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidNotation { notation } => {
                MoveParseError::InvalidSquare { notation }
            }
            other => MoveParseError::InvalidSquare {
                notation: other.to_string(),
            },
        }
    }
}

/// Error type for rejected board mutations and broken invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No piece stands on the move's origin
    EmptyOrigin { from: Position },
    /// The piece on the origin is not the one the move was generated for
    StalePiece { from: Position },
    /// Destination is off the board, or not where the move kind can land
    InvalidDestination { to: Position },
    /// The recorded captured piece does not stand on the destination
    CaptureMismatch { to: Position },
    /// Destination is occupied but the move records no capture
    DestinationOccupied { to: Position },
    /// Castling asked of a king that has already moved
    KingAlreadyMoved { from: Position },
    /// Castling rook is not where the king's destination requires
    MissingCastlingRook { rook_from: Position },
    /// Move uses a rule this engine leaves as an extension point
    Unsupported { feature: &'static str },
    /// Grid cell and piece roster disagree
    GridMismatch { position: Position },
    /// A color does not have exactly one king
    KingCount { color: PieceColor, count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyOrigin { from } => write!(f, "No piece on {from}"),
            BoardError::StalePiece { from } => {
                write!(f, "Piece on {from} does not match the move")
            }
            BoardError::InvalidDestination { to } => {
                write!(f, "Invalid destination {to}")
            }
            BoardError::CaptureMismatch { to } => {
                write!(f, "Captured piece is not on {to}")
            }
            BoardError::DestinationOccupied { to } => {
                write!(f, "Destination {to} is occupied but no capture was recorded")
            }
            BoardError::KingAlreadyMoved { from } => {
                write!(f, "King on {from} has already moved and cannot castle")
            }
            BoardError::MissingCastlingRook { rook_from } => {
                write!(f, "No unmoved castling rook on {rook_from}")
            }
            BoardError::Unsupported { feature } => {
                write!(f, "{feature} is not supported")
            }
            BoardError::GridMismatch { position } => {
                write!(f, "Grid and piece lists disagree at {position}")
            }
            BoardError::KingCount { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
        }
    }
}

impl std::error::Error for BoardError {}
