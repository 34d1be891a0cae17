use std::collections::BTreeMap;
use std::fs::{create_dir_all, read_to_string, write};
use std::io;
use std::path::{Path, PathBuf};

/// Best completion time in whole seconds, keyed by [`level_key`].
pub(crate) type BestTimes = BTreeMap<String, u64>;

macro_rules! warn_err {
    ($expr:expr, $($arg:tt)+) => {
        $expr.map_err(|e| log::warn!($($arg)+, e)).ok()
    };
}

pub(crate) fn level_key(index: usize) -> String {
    format!("level_{}", index + 1)
}

/// Reads the best-time file. A missing or unreadable file is an empty record.
pub(crate) fn load_best_times(path: &Path) -> BestTimes {
    try_load_best_times(path).unwrap_or_default()
}

fn try_load_best_times(path: &Path) -> Option<BestTimes> {
    if !path.exists() {
        return None;
    }
    let s = warn_err!(
        read_to_string(path),
        "Failed to read {}: {}",
        path.display()
    )?;
    warn_err!(
        serde_json::from_str(&s),
        "Failed to parse {}: {}",
        path.display()
    )
}

pub(crate) fn save_best_times(path: &Path, times: &BestTimes) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(times).map_err(io::Error::other)?;
    write(path, json)
}

/// Best times held in memory and written through to disk on every new record.
pub(crate) struct BestTimeStore {
    path: Option<PathBuf>,
    times: BestTimes,
}

impl BestTimeStore {
    pub(crate) fn open(path: PathBuf) -> Self {
        let times = load_best_times(&path);
        log::info!(
            "Loaded {} best time(s) from {}",
            times.len(),
            path.display()
        );
        Self {
            path: Some(path),
            times,
        }
    }

    /// A store that never touches the filesystem.
    pub(crate) fn in_memory() -> Self {
        Self {
            path: None,
            times: BestTimes::new(),
        }
    }

    pub(crate) fn best(&self, key: &str) -> Option<u64> {
        self.times.get(key).copied()
    }

    pub(crate) fn times(&self) -> &BestTimes {
        &self.times
    }

    /// Returns whether `elapsed` beats the stored time for `key`. Only a strict improvement
    /// is stored and persisted.
    pub(crate) fn record(&mut self, key: &str, elapsed: u64) -> bool {
        if self.best(key).is_some_and(|best| elapsed >= best) {
            return false;
        }
        self.times.insert(key.to_string(), elapsed);
        if let Some(path) = &self.path {
            warn_err!(
                save_best_times(path, &self.times),
                "Failed to save {}: {}",
                path.display()
            );
        }
        true
    }
}
