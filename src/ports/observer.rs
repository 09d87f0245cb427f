//! Observer port - abstraction for watching a series of games
//!
//! Observers collect data while a series runs without coupling the game loop
//! to a particular output format or metric.

use crate::{
    Result,
    tictactoe::{Board, Game, Player},
};

/// Observer trait for monitoring a series
///
/// # Event Sequence
///
/// 1. `on_series_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - For each move in the game
///    - `on_game_end(game_num, game)`
/// 3. `on_series_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use noughts::{ports::Observer, tictactoe::Game};
///
/// struct GameCounter {
///     games: usize,
/// }
///
/// impl Observer for GameCounter {
///     fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> noughts::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first game.
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move, with the board as it was before the move.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _player: Player,
        _move_pos: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a win or draw, with its full record.
    fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    ///
    /// Use this to finalize outputs, close files, or display summaries.
    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Shared observers, so a caller can keep a handle and read results after the
/// series has consumed the boxed copy.
impl<O: Observer> Observer for std::sync::Arc<std::sync::Mutex<O>> {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        lock(self)?.on_series_start(total_games)
    }

    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        lock(self)?.on_game_start(game_num)
    }

    fn on_move(
        &mut self,
        game_num: usize,
        step_num: usize,
        board: &Board,
        player: Player,
        move_pos: usize,
    ) -> Result<()> {
        lock(self)?.on_move(game_num, step_num, board, player, move_pos)
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        lock(self)?.on_game_end(game_num, game)
    }

    fn on_series_end(&mut self) -> Result<()> {
        lock(self)?.on_series_end()
    }
}

fn lock<O>(shared: &std::sync::Mutex<O>) -> Result<std::sync::MutexGuard<'_, O>> {
    shared.lock().map_err(|_| crate::Error::InvalidConfiguration {
        message: "shared observer lock poisoned".to_string(),
    })
}
