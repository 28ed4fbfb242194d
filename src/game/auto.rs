//! Automated players and a lock-guarded game handle for driving them from
//! background threads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::session::{Game, GameError};
use crate::board::{Move, PieceColor};

/// Plays a uniformly random legal move. No evaluation, no search.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Player seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a legal move for the side to move, `None` if there is none.
    pub fn choose(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves().choose(&mut self.rng).copied()
    }

    /// Choose and play one move.
    pub fn play_turn(&mut self, game: &mut Game) -> Result<Option<Move>, GameError> {
        match self.choose(game) {
            Some(mv) => {
                game.make_move(&mv)?;
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// A game shared between threads. Every access goes through one lock, so
/// a move is always applied in full before anyone else looks at the board.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
    /// Per color: an auto player for that side has exited.
    retired: Arc<[AtomicBool; 2]>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            game: Arc::new(Mutex::new(game)),
            retired: Arc::default(),
        }
    }

    /// Lock the game for the duration of the guard.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock()
    }

    /// An independent copy of the current game.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        self.game.lock().clone()
    }

    /// Run `player` for `color` on a background thread.
    ///
    /// The thread waits `delay` before each attempt, then plays one move if
    /// it is `color`'s turn. It exits when the game ends, when it has made
    /// `max_moves` moves, or when stopped through the returned handle. It
    /// also exits while waiting for a reply that an opposing auto player,
    /// now exited, will never give, so unequal budgets end both threads.
    /// With no opposing auto player at all (a human on the other side) it
    /// keeps waiting until stopped.
    pub fn spawn_auto_player(
        &self,
        color: PieceColor,
        mut player: RandomPlayer,
        delay: Duration,
        max_moves: usize,
    ) -> AutoPlayerHandle {
        let game = self.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        self.retired[color.index()].store(false, Ordering::Release);

        let handle = thread::spawn(move || {
            let mut played = 0;
            while played < max_moves && !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(delay);
                let mut guard = game.lock();
                if guard.is_game_over() {
                    break;
                }
                if guard.current_turn() != color {
                    if game.retired[color.opponent().index()].load(Ordering::Acquire) {
                        break;
                    }
                    continue;
                }
                match player.play_turn(&mut guard) {
                    Ok(Some(_mv)) => {
                        played += 1;
                        #[cfg(feature = "logging")]
                        log::debug!("auto player {color} played {_mv}");
                    }
                    Ok(None) => break,
                    Err(_err) => {
                        #[cfg(feature = "logging")]
                        log::warn!("auto player {color} stopped: {_err}");
                        break;
                    }
                }
            }
            game.retired[color.index()].store(true, Ordering::Release);
            played
        });

        AutoPlayerHandle { stop, handle }
    }
}

/// Handle to a running automated player thread.
pub struct AutoPlayerHandle {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<usize>,
}

impl AutoPlayerHandle {
    /// Ask the player to stop after its current attempt.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Wait for the thread to finish, returning how many moves it made.
    pub fn join(self) -> usize {
        self.handle.join().unwrap_or(0)
    }

    /// Stop the player and wait for the thread to finish.
    pub fn stop_and_wait(self) -> usize {
        self.signal_stop();
        self.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_player_only_plays_legal_moves() {
        let mut game = Game::new();
        let mut player = RandomPlayer::seeded(7);
        for _ in 0..30 {
            let legal = game.legal_moves();
            match player.play_turn(&mut game).unwrap() {
                Some(mv) => assert!(legal.contains(&mv)),
                None => break,
            }
        }
        assert!(game.board().validate().is_ok());
    }

    #[test]
    fn test_seeded_players_are_reproducible() {
        let mut a = Game::new();
        let mut b = Game::new();
        let mut pa = RandomPlayer::seeded(42);
        let mut pb = RandomPlayer::seeded(42);
        for _ in 0..10 {
            let ma = pa.play_turn(&mut a).unwrap();
            let mb = pb.play_turn(&mut b).unwrap();
            assert_eq!(ma, mb);
        }
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_two_auto_players_alternate() {
        let shared = SharedGame::new(Game::new());
        let delay = Duration::from_millis(1);
        let white = shared.spawn_auto_player(PieceColor::White, RandomPlayer::seeded(1), delay, 8);
        let black = shared.spawn_auto_player(PieceColor::Black, RandomPlayer::seeded(2), delay, 8);

        let white_moves = white.join();
        let black_moves = black.join();

        let game = shared.snapshot();
        let history = game.board().history();
        assert_eq!(history.len(), white_moves + black_moves);
        for (ply, mv) in history.iter().enumerate() {
            let expected = if ply % 2 == 0 {
                PieceColor::White
            } else {
                PieceColor::Black
            };
            assert_eq!(mv.piece().color(), expected);
        }
    }

    #[test]
    fn test_stopped_player_exits() {
        let shared = SharedGame::new(Game::new());
        // Black never gets a partner, so this player only ever waits.
        let black = shared.spawn_auto_player(
            PieceColor::Black,
            RandomPlayer::seeded(3),
            Duration::from_millis(1),
            usize::MAX,
        );
        assert_eq!(black.stop_and_wait(), 0);
        assert!(shared.lock().board().history().is_empty());
    }

    #[test]
    fn test_unequal_budgets_both_finish() {
        let shared = SharedGame::new(Game::new());
        let delay = Duration::from_millis(1);
        let white = shared.spawn_auto_player(PieceColor::White, RandomPlayer::seeded(5), delay, 2);
        let black = shared.spawn_auto_player(PieceColor::Black, RandomPlayer::seeded(6), delay, 5);

        // Black is never stopped; it exits once White has used its budget.
        assert_eq!(white.join(), 2);
        assert_eq!(black.join(), 2);
        assert_eq!(shared.lock().board().history().len(), 4);
    }
}
