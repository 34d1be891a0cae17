use crate::error::LevelError;
use crate::levels::LevelSet;
use crate::movement::Controls;
use crate::scoreboard::{ScoreReporter, Scoreboard};
use crate::session::{LevelSession, SessionOutcome};
use crate::storage::BestTimeStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RunTotals {
    /// Sum of completion times of every level finished so far.
    pub(crate) total_seconds: u64,
    pub(crate) levels_completed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RunStatus {
    Playing,
    Quit,
    Completed(RunTotals),
}

/// Plays the level set in order, one session at a time.
pub(crate) struct RunController<R = Scoreboard> {
    levels: LevelSet,
    store: BestTimeStore,
    reporter: R,
    index: usize,
    totals: RunTotals,
    session: Option<LevelSession>,
    status: RunStatus,
}

impl<R: ScoreReporter> RunController<R> {
    /// Loads the first level and starts its session at `now`.
    pub(crate) fn start(
        levels: LevelSet,
        store: BestTimeStore,
        reporter: R,
        now: f64,
    ) -> Result<Self, LevelError> {
        log::info!("Starting run over {} level(s)", levels.len());
        let mut run = Self {
            levels,
            store,
            reporter,
            index: 0,
            totals: RunTotals::default(),
            session: None,
            status: RunStatus::Playing,
        };
        run.enter_level(now)?;
        Ok(run)
    }

    pub(crate) fn session(&self) -> Option<&LevelSession> {
        self.session.as_ref()
    }

    pub(crate) fn totals(&self) -> RunTotals {
        self.totals
    }

    pub(crate) fn status(&self) -> RunStatus {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &BestTimeStore {
        &self.store
    }

    pub(crate) fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Runs one frame of the current session and acts on its outcome. Only a level that
    /// fails to load is an error; it ends the run.
    pub(crate) fn tick(&mut self, controls: &Controls, now: f64) -> Result<RunStatus, LevelError> {
        if self.status != RunStatus::Playing {
            return Ok(self.status);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(self.status);
        };
        let Some(outcome) = session.tick(controls, now, &mut self.store) else {
            return Ok(self.status);
        };

        match outcome {
            SessionOutcome::Quit => {
                log::info!("Run quit during level {}", self.index + 1);
                self.session = None;
                self.status = RunStatus::Quit;
            }
            SessionOutcome::Restart => {
                log::info!("Restarting level {}", self.index + 1);
                self.enter_level(now)?;
            }
            SessionOutcome::Advance(elapsed) => {
                self.totals.total_seconds += elapsed;
                self.totals.levels_completed += 1;
                self.index += 1;
                self.enter_level(now)?;
            }
        }
        Ok(self.status)
    }

    /// Starts a fresh session for the current index, or completes the run past the last level.
    fn enter_level(&mut self, now: f64) -> Result<(), LevelError> {
        self.session = None;
        if self.index >= self.levels.len() {
            self.complete();
            return Ok(());
        }
        let level = self.levels.load(self.index)?;
        self.session = Some(LevelSession::new(level, now, &self.store));
        Ok(())
    }

    fn complete(&mut self) {
        self.status = RunStatus::Completed(self.totals);
        log::info!(
            "Run complete: {} level(s) in {}s",
            self.totals.levels_completed,
            self.totals.total_seconds
        );
        log::debug!("Best times: {:?}", self.store.times());
        self.reporter.report(self.totals.total_seconds);
    }
}
