use clap::Parser;
use macroquad::window::{Conf, next_frame};
use tracing_subscriber::EnvFilter;

use maze_escape::config::{Args, Config};
use maze_escape::game_app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: "Maze Escape".to_string(),
        window_width: 640,
        window_height: 480,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let config = Config::from_args(Args::parse());

    let mut app = App::new(config);
    loop {
        match app.tick() {
            Ok(true) => next_frame().await,
            Ok(false) => break,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }
}
