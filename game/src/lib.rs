pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod input;
pub(crate) mod levels;
pub(crate) mod movement;
pub(crate) mod position;
pub(crate) mod reachability;
pub(crate) mod render;
pub(crate) mod run;
pub(crate) mod scoreboard;
pub(crate) mod session;
pub(crate) mod storage;

pub mod config;
pub mod error;
pub mod game_app;
pub mod skin;
