use macroquad::prelude::*;

use crate::config::Config;
use crate::error::LevelError;
use crate::input::{InputState, poll_skin_choice, quit_requested};
use crate::render::{render_finished, render_session, render_skin_choice, window_size};
use crate::run::{RunController, RunStatus, RunTotals};
use crate::scoreboard::ScoreReporter;
use crate::skin::Skin;

/// How long the completion screen stays up before the game closes.
const FINISHED_SCREEN_SECS: f64 = 2.0;

enum Screen {
    ChooseSkin,
    Playing {
        run: RunController,
        skin: Skin,
    },
    Finished {
        run: RunController,
        totals: RunTotals,
        until: f64,
    },
    Closed,
}

pub struct App {
    config: Config,
    screen: Screen,
    input: InputState,
    /// Level whose dimensions the window currently has.
    sized_for: Option<usize>,
}

impl App {
    pub fn new(config: Config) -> Self {
        prevent_quit();
        Self {
            config,
            screen: Screen::ChooseSkin,
            input: InputState::new(),
            sized_for: None,
        }
    }

    /// Run one frame. Returns false once the game should exit; an error means a level could
    /// not be brought into play and the run is over.
    pub fn tick(&mut self) -> Result<bool, LevelError> {
        let now = get_time();
        let dt = get_frame_time();

        match std::mem::replace(&mut self.screen, Screen::Closed) {
            Screen::ChooseSkin => {
                if quit_requested() {
                    return Ok(false);
                }
                match self.config.skin.or_else(poll_skin_choice) {
                    Some(skin) => {
                        log::info!("Playing as the {} ghost", skin.label());
                        let run = RunController::start(
                            self.config.level_set(),
                            self.config.best_time_store(),
                            self.config.scoreboard(),
                            now,
                        )?;
                        self.input.reset();
                        self.screen = Self::after_tick(run, skin, now);
                    }
                    None => {
                        render_skin_choice();
                        self.screen = Screen::ChooseSkin;
                    }
                }
            }
            Screen::Playing { mut run, skin } => {
                let controls = self.input.poll(dt);
                run.tick(&controls, now)?;
                self.screen = Self::after_tick(run, skin, now);
            }
            Screen::Finished { run, totals, until } => {
                if now >= until || quit_requested() {
                    self.close(run);
                    return Ok(false);
                }
                render_finished(totals);
                self.screen = Screen::Finished { run, totals, until };
            }
            Screen::Closed => return Ok(false),
        }

        if let Screen::Playing { run, skin } = &self.screen
            && let Some(session) = run.session()
        {
            let index = session.level().index;
            if self.sized_for != Some(index) {
                let (w, h) = window_size(&session.level().grid);
                request_new_screen_size(w, h);
                self.sized_for = Some(index);
                self.input.reset();
            }
            render_session(session, *skin, now);
        }

        Ok(!matches!(self.screen, Screen::Closed))
    }

    fn after_tick(mut run: RunController, skin: Skin, now: f64) -> Screen {
        match run.status() {
            RunStatus::Playing => Screen::Playing { run, skin },
            RunStatus::Completed(totals) => Screen::Finished {
                run,
                totals,
                until: now + FINISHED_SCREEN_SECS,
            },
            RunStatus::Quit => {
                run.reporter_mut().finish();
                Screen::Closed
            }
        }
    }

    fn close(&mut self, mut run: RunController) {
        run.reporter_mut().finish();
        self.screen = Screen::Closed;
    }
}
