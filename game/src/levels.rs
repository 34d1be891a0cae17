use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use crate::error::LevelError;
use crate::grid::{Grid, ParsedMap};
use crate::position::Position;
use crate::reachability::path_exists;
use crate::storage::level_key;

pub(crate) const LEVEL_COUNT: usize = 5;

const BUILTIN_MAPS: [&str; LEVEL_COUNT] = [
    include_str!("../../maps/level1.txt"),
    include_str!("../../maps/level2.txt"),
    include_str!("../../maps/level3.txt"),
    include_str!("../../maps/level4.txt"),
    include_str!("../../maps/level5.txt"),
];

/// A level that has been parsed and proven solvable.
#[derive(Clone, Debug)]
pub(crate) struct Level {
    pub(crate) index: usize,
    pub(crate) grid: Grid,
    pub(crate) start: Position,
    pub(crate) exit: Position,
}

impl Level {
    /// Ordinal shown to players.
    pub(crate) fn number(&self) -> usize {
        self.index + 1
    }

    pub(crate) fn key(&self) -> String {
        level_key(self.index)
    }
}

enum MapResource {
    Text(String),
    File(PathBuf),
}

impl MapResource {
    fn read(&self, level: usize) -> Result<String, LevelError> {
        match self {
            MapResource::Text(text) => Ok(text.clone()),
            MapResource::File(path) => read_to_string(path).map_err(|source| LevelError::Read {
                level,
                path: path.clone(),
                source,
            }),
        }
    }
}

/// The fixed, ordered set of maps a run plays through.
pub(crate) struct LevelSet {
    maps: Vec<MapResource>,
}

impl LevelSet {
    pub(crate) fn builtin() -> Self {
        Self::from_texts(BUILTIN_MAPS)
    }

    /// `dir/level1.txt` through `dir/level5.txt`.
    pub(crate) fn from_dir(dir: &Path) -> Self {
        let maps = (1..=LEVEL_COUNT)
            .map(|n| MapResource::File(dir.join(format!("level{n}.txt"))))
            .collect();
        Self { maps }
    }

    pub(crate) fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let maps = texts
            .into_iter()
            .map(|text| MapResource::Text(text.into()))
            .collect();
        Self { maps }
    }

    pub(crate) fn len(&self) -> usize {
        self.maps.len()
    }

    /// Reads, parses and solvability-checks the level at `index`. A level that fails any of
    /// these is never handed out.
    pub(crate) fn load(&self, index: usize) -> Result<Level, LevelError> {
        let level = index + 1;
        let resource = self.maps.get(index).ok_or(LevelError::Missing { level })?;
        let text = resource.read(level)?;
        let ParsedMap { grid, start, exit } =
            ParsedMap::parse(&text).map_err(|source| LevelError::Format { level, source })?;

        if !path_exists(&grid, start, exit) {
            return Err(LevelError::Unsolvable { level });
        }

        log::info!(
            "Loaded level {level} ({}x{})",
            grid.width(),
            grid.height()
        );
        log::debug!("Level {level} layout:\n{}", grid.to_text());

        Ok(Level {
            index,
            grid,
            start,
            exit,
        })
    }
}
