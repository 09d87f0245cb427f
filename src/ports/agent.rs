//! Agent port - abstraction for anything that picks a move for one side
//!
//! Implementations include:
//! - Engine-backed agents at a difficulty level
//! - Uniform random baselines

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Agent trait - unified interface for move selection
///
/// The series pipeline and the CLI only talk to agents through this trait,
/// so strategies can be paired freely.
///
/// # Examples
///
/// ```
/// use noughts::{
///     Result,
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// /// Always takes the first free cell
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn select_move(&mut self, board: &Board, _me: Player, _opponent: Player) -> Result<usize> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `me` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board is full.
    fn select_move(&mut self, board: &Board, me: Player, opponent: Player) -> Result<usize>;

    /// Get the agent's name.
    ///
    /// Used for identification in series reports and logging.
    fn name(&self) -> &str;

    /// Reseed any internal randomness for reproducible runs.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for deterministic agents.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
