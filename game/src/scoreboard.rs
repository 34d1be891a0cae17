use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::Serialize;
use ureq::Agent;

use crate::error::ReportError;

pub(crate) const DEFAULT_PLAYER_NAME: &str = "Anonymous";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Receives the run total once every level is complete.
pub(crate) trait ScoreReporter {
    fn report(&mut self, total_seconds: u64);

    /// Blocks until any report in flight has finished.
    fn finish(&mut self) {}
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct ScoreReport {
    player: String,
    total_seconds: u64,
}

/// Posts the run total to a remote scoreboard on a background thread. Failures are logged.
pub(crate) struct Scoreboard {
    url: Option<String>,
    player: String,
    timeout: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Scoreboard {
    pub(crate) fn new(url: Option<String>, player: Option<String>, timeout: Duration) -> Self {
        Self {
            url,
            player: player
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
            timeout,
            pending: None,
        }
    }

    fn payload(&self, total_seconds: u64) -> ScoreReport {
        ScoreReport {
            player: self.player.clone(),
            total_seconds,
        }
    }
}

impl ScoreReporter for Scoreboard {
    fn report(&mut self, total_seconds: u64) {
        let Some(url) = self.url.clone() else {
            log::info!("No scoreboard configured; run total {total_seconds}s not reported");
            return;
        };
        let report = self.payload(total_seconds);
        let timeout = self.timeout;

        let spawned = thread::Builder::new()
            .name("scoreboard".to_string())
            .spawn(move || match send_report(&url, &report, timeout) {
                Ok(()) => log::info!(
                    "Reported {}s for {} to {url}",
                    report.total_seconds,
                    report.player
                ),
                Err(e) => log::warn!("Failed to report score to {url}: {e}"),
            });
        match spawned {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => log::warn!("Failed to start scoreboard report: {e}"),
        }
    }

    fn finish(&mut self) {
        if let Some(handle) = self.pending.take()
            && handle.join().is_err()
        {
            log::warn!("Scoreboard report thread panicked");
        }
    }
}

fn send_report(url: &str, report: &ScoreReport, timeout: Duration) -> Result<(), ReportError> {
    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into();
    let response = agent.post(url).send_json(report)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ReportError::Status(status.as_u16()));
    }
    Ok(())
}
