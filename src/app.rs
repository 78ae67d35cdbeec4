pub mod gauge;
pub mod history;
pub mod notification;

use std::{
    sync::{mpsc::Sender, Arc},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use time::{OffsetDateTime, UtcOffset};
use tui::layout::{Position, Rect};

use self::{
    gauge::{AnimationTimer, GaugeId, SpeedGauge},
    speed_test::SpeedTest,
};
use crate::{
    constants::*,
    event::SpeedEvent,
    measurement::{
        runner::{spawn_runner, PhaseDelays, RunnerEvent},
        RunError, SharedSource,
    },
    utils::cancellation_token::CancellationToken,
};

/// Settings resolved from the command line and config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfigFields {
    pub delays: PhaseDelays,
    pub seed: Option<u64>,
    pub autostart: bool,
    pub disable_click: bool,
}

/// Holds all of the program's state. Only ever touched by the main thread.
pub struct App {
    pub speed_test: SpeedTest,
    pub download_gauge: SpeedGauge,
    pub upload_gauge: SpeedGauge,
    pub app_config_fields: AppConfigFields,
    /// Where the action button was last drawn.
    pub action_bounds: Option<Rect>,
    utc_offset: UtcOffset,
    source: SharedSource,
    sender: Sender<SpeedEvent>,
    run_id: u64,
    run_token: Arc<CancellationToken>,
    runner: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        app_config_fields: AppConfigFields, utc_offset: UtcOffset, source: SharedSource,
        sender: Sender<SpeedEvent>,
    ) -> Self {
        Self {
            speed_test: SpeedTest::default(),
            download_gauge: SpeedGauge::new("Download", DOWNLOAD_MAX_MBPS),
            upload_gauge: SpeedGauge::new("Upload", UPLOAD_MAX_MBPS),
            app_config_fields,
            action_bounds: None,
            utc_offset,
            source,
            sender,
            run_id: 0,
            run_token: Arc::new(CancellationToken::default()),
            runner: None,
        }
    }

    /// The id of the latest run. Events from older runs are dropped.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// The primary action, "Start Test" or "Test Again".
    pub fn on_action(&mut self) {
        self.start_test();
    }

    pub fn on_left_mouse_up(&mut self, x: u16, y: u16) {
        if self
            .action_bounds
            .is_some_and(|bounds| bounds.contains(Position { x, y }))
        {
            self.on_action();
        }
    }

    /// Starts a run on a new runner thread. Returns `false` if a run is
    /// already in progress.
    pub fn start_test(&mut self) -> bool {
        if !self.speed_test.try_start() {
            crate::c_debug!("Ignoring start, run {} is in progress.", self.run_id);
            return false;
        }

        self.run_token.cancel();
        self.run_token = Arc::new(CancellationToken::default());
        self.run_id += 1;
        crate::c_info!("Starting run {}.", self.run_id);

        self.sync_gauges();
        self.runner = Some(spawn_runner(
            self.run_id,
            self.source.clone(),
            self.app_config_fields.delays,
            self.run_token.clone(),
            self.sender.clone(),
        ));

        true
    }

    pub fn handle_runner_event(&mut self, run_id: u64, event: RunnerEvent) {
        if run_id != self.run_id {
            crate::c_debug!("Dropping event from stale run {run_id}.");
            return;
        }

        let result = match event {
            RunnerEvent::PhaseStarted(phase) => self.speed_test.begin_phase(phase),
            RunnerEvent::Measured(measurement) => self.speed_test.record(measurement),
            RunnerEvent::Finished => {
                let timestamp = self.timestamp();
                self.speed_test.complete(timestamp, Instant::now())
            }
            RunnerEvent::Failed(err) => Err(err),
        };

        match result {
            Ok(()) => self.sync_gauges(),
            Err(err) => self.fail_run(err),
        }
    }

    pub fn handle_gauge_tick(&mut self, gauge: GaugeId, generation: u64) {
        self.gauge_mut(gauge).on_tick(generation);
    }

    /// Housekeeping done on every pass of the event loop.
    pub fn update(&mut self, now: Instant) {
        self.speed_test.clear_expired_notification(now);

        if self
            .runner
            .as_ref()
            .is_some_and(|runner| runner.is_finished())
        {
            self.runner = None;
        }
    }

    /// Stops the runner and every animation.
    pub fn shutdown(&mut self) {
        self.run_token.cancel();
        self.download_gauge.cancel_timer();
        self.upload_gauge.cancel_timer();
    }

    pub fn gauge(&self, gauge: GaugeId) -> &SpeedGauge {
        match gauge {
            GaugeId::Download => &self.download_gauge,
            GaugeId::Upload => &self.upload_gauge,
        }
    }

    fn gauge_mut(&mut self, gauge: GaugeId) -> &mut SpeedGauge {
        match gauge {
            GaugeId::Download => &mut self.download_gauge,
            GaugeId::Upload => &mut self.upload_gauge,
        }
    }

    fn fail_run(&mut self, err: RunError) {
        if !self.speed_test.is_running() {
            return;
        }

        crate::c_error!("Run {} failed: {err}", self.run_id);
        self.run_token.cancel();
        self.speed_test.fail(Instant::now());
        self.sync_gauges();
    }

    /// Points both gauges at the current partial result, animating any that
    /// changed.
    fn sync_gauges(&mut self) {
        let current = *self.speed_test.current();
        self.retarget(GaugeId::Download, current.download.unwrap_or(0));
        self.retarget(GaugeId::Upload, current.upload.unwrap_or(0));
    }

    fn retarget(&mut self, id: GaugeId, value: u32) {
        let sender = self.sender.clone();
        let gauge = self.gauge_mut(id);

        if let Some(generation) = gauge.set_target(f64::from(value)) {
            let interval = animation_interval();
            gauge.attach_timer(AnimationTimer::spawn(interval, move || {
                sender
                    .send(SpeedEvent::GaugeTick {
                        gauge: id,
                        generation,
                    })
                    .is_ok()
            }));
        }
    }

    fn timestamp(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.utc_offset)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The time between two animation steps.
pub fn animation_interval() -> Duration {
    ANIMATION_DURATION / ANIMATION_STEPS.max(1)
}
