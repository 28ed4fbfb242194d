//! Game session: turn order and result tracking over a board.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{AttackMap, Board, BoardError, CheckStatus, Move, PieceColor, Position};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    Checkmate { winner: PieceColor },
    Stalemate,
    Surrender { winner: PieceColor },
}

impl GameResult {
    /// The winning side, `None` for a draw.
    #[must_use]
    pub const fn winner(&self) -> Option<PieceColor> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Surrender { winner } => Some(*winner),
            GameResult::Stalemate => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameResult::Stalemate => write!(f, "Draw by stalemate"),
            GameResult::Surrender { winner } => write!(f, "{winner} wins by surrender"),
        }
    }
}

/// Error type for rejected game actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already has a result
    GameOver,
    /// No piece on the selected square
    EmptySquare { at: Position },
    /// The selected piece belongs to the side not on move
    WrongTurn {
        expected: PieceColor,
        found: PieceColor,
    },
    /// The move is not among the legal moves of the selected piece
    IllegalMove { from: Position, to: Position },
    /// The board refused the move
    Board(BoardError),
    /// The board cannot start a game
    InvalidPosition { reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is over"),
            GameError::EmptySquare { at } => write!(f, "No piece on {at}"),
            GameError::WrongTurn { expected, found } => {
                write!(f, "It is {expected}'s turn, not {found}'s")
            }
            GameError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            GameError::Board(err) => write!(f, "Board rejected move: {err}"),
            GameError::InvalidPosition { reason } => {
                write!(f, "Invalid starting position: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

/// One game: a board, whose turn it is, and the result once there is one.
///
/// The board itself is turn-agnostic; this type enforces alternation and
/// only ever hands the board moves it generated.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_turn: PieceColor,
    status: CheckStatus,
    result: Option<GameResult>,
    attacks: AttackMap,
}

impl Game {
    /// A new game from the standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::start(Board::new(), PieceColor::White)
    }

    /// A game continuing from `board` with `to_move` on turn. A position
    /// that is already mate or stalemate starts out finished.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidPosition` when the board fails
    /// [`Board::validate`], or when the side that just moved is left in
    /// check, which would let its king be captured.
    pub fn from_board(board: Board, to_move: PieceColor) -> Result<Self, GameError> {
        board
            .validate()
            .map_err(|err| GameError::InvalidPosition {
                reason: err.to_string(),
            })?;
        let waiting = to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(GameError::InvalidPosition {
                reason: format!("{waiting} is in check with {to_move} to move"),
            });
        }
        Ok(Game::start(board, to_move))
    }

    fn start(board: Board, to_move: PieceColor) -> Self {
        let attacks = AttackMap::new(&board);
        let mut game = Game {
            board,
            current_turn: to_move,
            status: CheckStatus::NotInCheck,
            result: None,
            attacks,
        };
        game.classify(to_move.opponent());
        game
    }

    /// Start over from the initial position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> PieceColor {
        self.current_turn
    }

    /// Check status of the side to move.
    #[inline]
    #[must_use]
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Attacker map of the current position.
    #[inline]
    #[must_use]
    pub fn attacks(&self) -> &AttackMap {
        &self.attacks
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Result message, empty while the game is running.
    #[must_use]
    pub fn result_text(&self) -> String {
        self.result.map(|r| r.to_string()).unwrap_or_default()
    }

    /// Legal moves of the side to move; none once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_turn)
    }

    /// Destinations to highlight for the piece on `pos`. Empty unless it
    /// belongs to the side to move.
    #[must_use]
    pub fn legal_destinations(&self, pos: Position) -> Vec<Position> {
        match self.board.piece_at(pos) {
            Some(piece) if piece.color() == self.current_turn && !self.is_game_over() => {
                piece.legal_moves(&self.board).iter().map(Move::to).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Play the user's (origin, destination) choice if it matches a legal
    /// move, returning the move that was made.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<Move, GameError> {
        self.check_selection(from)?;
        let mv = self
            .board
            .piece_legal_moves(from)
            .into_iter()
            .find(|mv| mv.connects(from, to))
            .ok_or(GameError::IllegalMove { from, to })?;
        self.commit(&mv)?;
        Ok(mv)
    }

    /// Play `mv`, which must be one of the legal moves of the side to move.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), GameError> {
        self.check_selection(mv.from())?;
        let is_legal = self.board.piece_legal_moves(mv.from()).contains(mv);
        if !is_legal {
            return Err(GameError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }
        self.commit(mv)
    }

    /// The side to move resigns.
    pub fn surrender(&mut self) -> Result<GameResult, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let result = GameResult::Surrender {
            winner: self.current_turn.opponent(),
        };
        self.finish(result);
        Ok(result)
    }

    /// `"WHITE's turn"`, with `" (CHECK)"` appended when in check, or the
    /// result once the game is over.
    #[must_use]
    pub fn status_line(&self) -> String {
        if let Some(result) = self.result {
            return result.to_string();
        }
        let mut line = format!("{}'s turn", self.current_turn);
        if self.status == CheckStatus::InCheck {
            line.push_str(" (CHECK)");
        }
        line
    }

    fn check_selection(&self, from: Position) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare { at: from })?;
        if piece.color() != self.current_turn {
            return Err(GameError::WrongTurn {
                expected: self.current_turn,
                found: piece.color(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, mv: &Move) -> Result<(), GameError> {
        self.board.make_move(mv)?;
        let mover = self.current_turn;
        self.current_turn = mover.opponent();
        self.attacks.update(&self.board);
        self.classify(mover);
        Ok(())
    }

    /// Classify the position for the side to move; `mover` is the side that
    /// produced it.
    fn classify(&mut self, mover: PieceColor) {
        self.status = self.board.status(self.current_turn);
        match self.status {
            CheckStatus::Checkmated => self.finish(GameResult::Checkmate { winner: mover }),
            CheckStatus::Stalemated => self.finish(GameResult::Stalemate),
            CheckStatus::InCheck | CheckStatus::NotInCheck => {}
        }
    }

    fn finish(&mut self, result: GameResult) {
        #[cfg(feature = "logging")]
        log::info!("game over: {result}");
        self.result = Some(result);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
