//! The thread that runs a simulated test, one phase after another.

use std::{
    sync::{mpsc::Sender, Arc},
    thread::{self, JoinHandle},
    time::Duration,
};

use super::{measure, Measurement, RunError, RunResult, SharedSource};
use crate::{
    app::speed_test::TestPhase, constants::*, event::SpeedEvent,
    utils::cancellation_token::CancellationToken,
};

/// Progress reported by a runner thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerEvent {
    PhaseStarted(TestPhase),
    Measured(Measurement),
    Finished,
    Failed(RunError),
}

/// How long each phase waits before producing its measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDelays {
    pub ping: Duration,
    pub download: Duration,
    pub upload: Duration,
}

impl Default for PhaseDelays {
    fn default() -> Self {
        Self {
            ping: DEFAULT_PING_DELAY,
            download: DEFAULT_DOWNLOAD_DELAY,
            upload: DEFAULT_UPLOAD_DELAY,
        }
    }
}

impl PhaseDelays {
    pub fn for_phase(&self, phase: TestPhase) -> Duration {
        match phase {
            TestPhase::Ping => self.ping,
            TestPhase::Download => self.download,
            TestPhase::Upload => self.upload,
            TestPhase::Idle | TestPhase::Complete => Duration::ZERO,
        }
    }
}

/// Sends events for one run, tagged with its id.
struct RunReporter<'a> {
    run_id: u64,
    sender: &'a Sender<SpeedEvent>,
    finished: bool,
}

impl RunReporter<'_> {
    fn send(&mut self, event: RunnerEvent) -> RunResult<()> {
        if matches!(event, RunnerEvent::Finished | RunnerEvent::Failed(_)) {
            self.finished = true;
        }

        self.sender
            .send(SpeedEvent::Runner {
                run_id: self.run_id,
                event,
            })
            .map_err(|_| RunError::Disconnected)
    }
}

impl Drop for RunReporter<'_> {
    fn drop(&mut self) {
        // Covers the thread unwinding partway through a run, so the app is
        // never left waiting on a run that will not finish.
        if !self.finished {
            let _ = self.sender.send(SpeedEvent::Runner {
                run_id: self.run_id,
                event: RunnerEvent::Failed(RunError::Aborted),
            });
        }
    }
}

/// Walks through ping, download, and upload, waiting each phase's delay and
/// then reporting its measurement.
pub fn run_speed_test(
    run_id: u64, source: &SharedSource, delays: &PhaseDelays,
    cancellation_token: &CancellationToken, sender: &Sender<SpeedEvent>,
) -> RunResult<()> {
    let mut reporter = RunReporter {
        run_id,
        sender,
        finished: false,
    };

    let result = run_phases(&mut reporter, source, delays, cancellation_token);
    match &result {
        Ok(()) => reporter.send(RunnerEvent::Finished)?,
        Err(err) if err.is_reportable() => {
            crate::c_error!("Run {run_id} failed: {err}");
            reporter.send(RunnerEvent::Failed(err.clone()))?;
        }
        Err(_) => {
            // Nobody is listening for these anymore.
            reporter.finished = true;
        }
    }

    result
}

fn run_phases(
    reporter: &mut RunReporter<'_>, source: &SharedSource, delays: &PhaseDelays,
    cancellation_token: &CancellationToken,
) -> RunResult<()> {
    for phase in TestPhase::MEASURED {
        reporter.send(RunnerEvent::PhaseStarted(phase))?;

        if cancellation_token.sleep_with_cancellation(delays.for_phase(phase)) {
            return Err(RunError::Cancelled);
        }

        let measurement = measure(source, phase)?;
        crate::c_debug!("Run {} measured {measurement:?}", reporter.run_id);
        reporter.send(RunnerEvent::Measured(measurement))?;
    }

    Ok(())
}

/// Spawns a thread running [`run_speed_test`].
pub fn spawn_runner(
    run_id: u64, source: SharedSource, delays: PhaseDelays,
    cancellation_token: Arc<CancellationToken>, sender: Sender<SpeedEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = run_speed_test(run_id, &source, &delays, &cancellation_token, &sender);
    })
}
