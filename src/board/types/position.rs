//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Board dimension along either axis.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board, represented as (file, rank).
///
/// File 0 is the a-file. Rank 0 is Black's back rank (algebraic rank 8) and
/// rank 7 is White's back rank, so `Position(4, 6)` is `e2`.
///
/// Any pair of values is representable; whether it lies on the board is a
/// separate question answered by [`Position::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position(pub i8, pub i8); // (file, rank)

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Position(file, rank)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.0
    }

    /// Get the rank (0-7, where 0 = algebraic rank 8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.1
    }

    /// True iff both coordinates are in `[0, 8)`.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0 && self.0 < BOARD_SIZE && self.1 >= 0 && self.1 < BOARD_SIZE
    }

    /// The square `df` files and `dr` ranks away. May be off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Position(self.0.saturating_add(df), self.1.saturating_add(dr))
    }

    /// Grid index (0-63) for an on-board square, `None` otherwise.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.1 as usize * 8 + self.0 as usize)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position((idx % 8) as i8, (idx / 8) as i8)
    }

    /// Iterate over all 64 on-board squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (self.0 as u8 + b'a') as char, 8 - self.1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.1, self.0).cmp(&(other.1, other.0))
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = PositionError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        if !(0..BOARD_SIZE).contains(&file) {
            return Err(PositionError::FileOutOfBounds { file });
        }
        if !(0..BOARD_SIZE).contains(&rank) {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        Ok(Position(file, rank))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as i8,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => 7 - (bytes[1] - b'1') as i8,
            _ => return Err(invalid()),
        };

        Ok(Position(file, rank))
    }
}
