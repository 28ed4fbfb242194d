//! Coordinate move notation (`e2e4`).

use super::error::MoveParseError;
use super::{Board, Move, Position};

impl Board {
    /// Parse a coordinate move (`e2e4`, castling as `e1g1`) against this
    /// board. Returns the matching legal move for the piece on the origin
    /// square.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let from: Position = text[..2].parse()?;
        let to: Position = text[2..].parse()?;

        self.piece_legal_moves(from)
            .into_iter()
            .find(|mv| mv.connects(from, to))
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a coordinate move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use chess_core::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_str("e2e4").unwrap();
    /// board.make_move_str("e7e5").unwrap();
    /// assert_eq!(board.history().len(), 2);
    /// ```
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(&mv)
            .map_err(|_| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_bad_text() {
        let board = Board::new();
        assert_eq!(
            board.parse_move("e2e"),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            board.parse_move("z2e4"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        // Empty origin.
        assert!(matches!(
            board.parse_move("e4e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_finds_capture() {
        let mut board = Board::new();
        for mv in ["e2e4", "d7d5"] {
            board.make_move_str(mv).unwrap();
        }
        let capture = board.parse_move("e4d5").unwrap();
        assert!(capture.is_capture());
        assert_eq!(capture.captured().unwrap().position(), Position(3, 3));
    }
}
