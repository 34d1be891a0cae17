use crate::levels::Level;
use crate::movement::{Controls, resolve_move};
use crate::position::Position;
use crate::storage::BestTimeStore;

/// Seconds the win acknowledgement stays up before the session advances.
pub(crate) const WIN_DELAY: f64 = 1.0;

/// How a session ended. Produced once and handed to the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionOutcome {
    Quit,
    Restart,
    Advance(u64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SessionState {
    Playing,
    /// The player reached the exit at `at`; `elapsed` is the frozen completion time.
    Won {
        at: f64,
        elapsed: u64,
    },
    Finished(SessionOutcome),
}

fn whole_seconds(duration: f64) -> u64 {
    duration.max(0.0).floor() as u64
}

/// One attempt at a single level. Timestamps are seconds on the caller's clock.
pub(crate) struct LevelSession {
    level: Level,
    position: Position,
    started_at: f64,
    state: SessionState,
    elapsed: u64,
    previous_best: Option<u64>,
    new_record: bool,
}

impl LevelSession {
    pub(crate) fn new(level: Level, now: f64, store: &BestTimeStore) -> Self {
        let previous_best = store.best(&level.key());
        log::debug!(
            "Starting level {} at {:?}, previous best {:?}",
            level.number(),
            level.start,
            previous_best
        );
        Self {
            position: level.start,
            level,
            started_at: now,
            state: SessionState::Playing,
            elapsed: 0,
            previous_best,
            new_record: false,
        }
    }

    pub(crate) fn level(&self) -> &Level {
        &self.level
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    /// Whole seconds since the session started, as of the last tick.
    pub(crate) fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Best time for this level before this session began.
    pub(crate) fn previous_best(&self) -> Option<u64> {
        self.previous_best
    }

    /// Whether this session's completion beat the stored best time.
    pub(crate) fn new_record(&self) -> bool {
        self.new_record
    }

    /// Advances the session by one frame. Returns the outcome on the tick the session
    /// finishes and `None` on every other tick, including all ticks after it finished.
    pub(crate) fn tick(
        &mut self,
        controls: &Controls,
        now: f64,
        store: &mut BestTimeStore,
    ) -> Option<SessionOutcome> {
        if matches!(self.state, SessionState::Finished(_)) {
            return None;
        }
        if controls.quit {
            return Some(self.finish(SessionOutcome::Quit));
        }
        if controls.restart {
            return Some(self.finish(SessionOutcome::Restart));
        }

        self.elapsed = whole_seconds(now - self.started_at);

        match self.state {
            SessionState::Playing => {
                self.position = resolve_move(&self.level.grid, self.position, controls.direction());
                if self.position == self.level.exit {
                    self.win(now, store);
                }
                None
            }
            SessionState::Won { at, elapsed } => {
                (now - at >= WIN_DELAY).then(|| self.finish(SessionOutcome::Advance(elapsed)))
            }
            SessionState::Finished(_) => None,
        }
    }

    fn win(&mut self, now: f64, store: &mut BestTimeStore) {
        let elapsed = whole_seconds(now - self.started_at);
        self.state = SessionState::Won { at: now, elapsed };
        self.new_record = store.record(&self.level.key(), elapsed);
        log::info!(
            "Level {} completed in {elapsed}s{}",
            self.level.number(),
            if self.new_record { " (new best)" } else { "" }
        );
    }

    fn finish(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        self.state = SessionState::Finished(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests;
