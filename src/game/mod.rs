//! Game orchestration on top of the board.
//!
//! The board executes whatever move it is handed. `Game` owns the turn
//! order and the result, and is the layer a front end talks to: select a
//! square, ask for destinations, submit an (origin, destination) pair, read
//! the status line. `RandomPlayer` and `SharedGame` cover the automated
//! opponent, which runs on its own thread and serializes on the game lock.

mod auto;
mod session;

pub use auto::{AutoPlayerHandle, RandomPlayer, SharedGame};
pub use session::{Game, GameError, GameResult};
