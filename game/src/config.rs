//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use directories::ProjectDirs;

use crate::levels::LevelSet;
use crate::scoreboard::{DEFAULT_TIMEOUT, Scoreboard};
use crate::skin::Skin;
use crate::storage::BestTimeStore;

const BEST_TIMES_FILE: &str = "best_times.json";

#[derive(Parser, Debug)]
#[command(version, about = "Guide your ghost through five mazes against the clock.")]
pub struct Args {
    /// Directory holding level1.txt through level5.txt. Uses the built-in maps when omitted.
    #[arg(long)]
    pub levels_dir: Option<PathBuf>,

    /// Where best times are kept. Defaults to the platform data directory.
    #[arg(long, conflicts_with = "no_save")]
    pub best_times: Option<PathBuf>,

    /// Keep best times in memory only.
    #[arg(long)]
    pub no_save: bool,

    /// Scoreboard endpoint that receives the run total on completion.
    #[arg(long, env = "MAZE_SCOREBOARD_URL")]
    pub scoreboard_url: Option<String>,

    /// Name sent with the scoreboard report.
    #[arg(long)]
    pub player: Option<String>,

    /// Seconds to wait for the scoreboard before giving up.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub report_timeout_secs: u64,

    /// Skip the selection screen and play with this ghost.
    #[arg(long, value_enum)]
    pub skin: Option<Skin>,
}

/// Resolved settings for one run of the game.
#[derive(Debug, Clone)]
pub struct Config {
    levels_dir: Option<PathBuf>,
    best_times: Option<PathBuf>,
    scoreboard_url: Option<String>,
    player: Option<String>,
    report_timeout: Duration,
    pub(crate) skin: Option<Skin>,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let best_times = if args.no_save {
            None
        } else {
            Some(args.best_times.unwrap_or_else(default_best_times_path))
        };
        Self {
            levels_dir: args.levels_dir,
            best_times,
            scoreboard_url: args.scoreboard_url,
            player: args.player,
            report_timeout: Duration::from_secs(args.report_timeout_secs),
            skin: args.skin,
        }
    }

    pub(crate) fn level_set(&self) -> LevelSet {
        match &self.levels_dir {
            Some(dir) => LevelSet::from_dir(dir),
            None => LevelSet::builtin(),
        }
    }

    pub(crate) fn best_time_store(&self) -> BestTimeStore {
        match &self.best_times {
            Some(path) => BestTimeStore::open(path.clone()),
            None => BestTimeStore::in_memory(),
        }
    }

    pub(crate) fn scoreboard(&self) -> Scoreboard {
        Scoreboard::new(
            self.scoreboard_url.clone(),
            self.player.clone(),
            self.report_timeout,
        )
    }
}

fn default_best_times_path() -> PathBuf {
    ProjectDirs::from("", "", "MazeEscape").map_or_else(
        || PathBuf::from(BEST_TIMES_FILE),
        |dirs| dirs.data_dir().join(BEST_TIMES_FILE),
    )
}
