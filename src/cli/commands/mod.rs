//! Subcommand implementations

pub mod best_move;
pub mod play;
pub mod series;
pub mod verify;
