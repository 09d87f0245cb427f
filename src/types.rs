//! Newtype wrappers for board indices.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell index on the 3x3 board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < 9 {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Row (0-2) of this cell.
    pub fn row(&self) -> usize {
        self.0 / 3
    }

    /// Column (0-2) of this cell.
    pub fn column(&self) -> usize {
        self.0 % 3
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<usize>()
            .map_err(|_| crate::Error::InvalidConfiguration {
                message: format!("'{trimmed}' is not a cell index (expected 0-8)"),
            })?;
        Position::new(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
