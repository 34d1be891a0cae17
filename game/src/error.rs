use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::position::Position;

/// A map resource that doesn't describe a playable grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapFormatError {
    #[error("map is empty")]
    Empty,
    #[error("map has no start tile 'S'")]
    MissingStart,
    #[error("map has more than one start tile 'S' (at {first:?} and {second:?})")]
    DuplicateStart { first: Position, second: Position },
    #[error("map has no exit tile 'E'")]
    MissingExit,
    #[error("map has more than one exit tile 'E' (at {first:?} and {second:?})")]
    DuplicateExit { first: Position, second: Position },
}

/// Failure to bring a level into play. `level` is the 1-based ordinal shown to players.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {level} does not exist")]
    Missing { level: usize },
    #[error("level {level}: failed to read {path:?}: {source}")]
    Read {
        level: usize,
        path: PathBuf,
        source: io::Error,
    },
    #[error("level {level}: {source}")]
    Format {
        level: usize,
        source: MapFormatError,
    },
    #[error("level {level} is not solvable: no path from start to exit")]
    Unsolvable { level: usize },
}

impl LevelError {
    pub fn level(&self) -> usize {
        match self {
            Self::Missing { level }
            | Self::Read { level, .. }
            | Self::Format { level, .. }
            | Self::Unsolvable { level } => *level,
        }
    }
}

/// The scoreboard call failed. Never surfaced to the player.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("scoreboard request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("scoreboard rejected the report with status {0}")]
    Status(u16),
}
