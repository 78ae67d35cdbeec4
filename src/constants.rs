use std::time::Duration;

// How long the event loop waits for an event before redrawing anyways.
pub const TICK_RATE_IN_MILLISECONDS: u64 = 200;

// Phase delays.
pub const DEFAULT_PING_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_DOWNLOAD_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(2000);

// Measurement ranges, lower bound inclusive and upper bound exclusive.
pub const PING_RANGE_MS: (u32, u32) = (10, 60);
pub const DOWNLOAD_RANGE_MBPS: (u32, u32) = (50, 250);
pub const UPLOAD_RANGE_MBPS: (u32, u32) = (20, 120);

// Gauge scales.
pub const DOWNLOAD_MAX_MBPS: f64 = 300.0;
pub const UPLOAD_MAX_MBPS: f64 = 150.0;
pub const DEFAULT_GAUGE_UNIT: &str = "Mbps";

// Gauge animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);
pub const ANIMATION_STEPS: u32 = 60;

// Gauge geometry. The ring is drawn with a dash of `RING_DASH` units, and the
// progress arc is offset from `RING_GAP` (full) to `RING_DASH` (empty).
pub const RING_RADIUS: f64 = 80.0;
pub const RING_DASH: f64 = 440.0;
pub const RING_GAP: f64 = 85.0;
pub const NEEDLE_SWEEP_DEGREES: f64 = 270.0;
pub const NEEDLE_START_DEGREES: f64 = -135.0;

// Colour band thresholds, in percent.
pub const MEDIUM_BAND_THRESHOLD: f64 = 33.0;
pub const FAST_BAND_THRESHOLD: f64 = 66.0;

// History.
pub const MAX_HISTORY_ENTRIES: usize = 5;

// Notifications.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(4000);
pub const SUCCESS_MESSAGE: &str = "Speed test completed!";
pub const FAILURE_MESSAGE: &str = "Failed to complete speed test";

// Config and flags
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "speedcheck/speedcheck.toml";

pub const CONFIG_TEXT: &str = r##"# This is a default config file for speedcheck. All of the settings are commented
# out by default; if you wish to change them uncomment and modify as you see
# fit.

# These options represent settings that affect how a test runs.
[test]
# How long each phase takes. Accepts milliseconds or a human duration.
#ping_delay = "1s"
#download_delay = "2s"
#upload_delay = "2s"
# Seeds the measurement source, giving the same sequence of results every launch.
#seed = 42
# Starts a test as soon as the program launches.
#autostart = false
# Ignores mouse clicks.
#disable_click = false

# These options represent colour values for the gauges and text.
# Colours accept names, hex values ("#0f0"), or RGB values ("0, 255, 0").
[styles]
#slow_color = "red"
#medium_color = "yellow"
#fast_color = "green"
#text_color = "gray"
#border_color = "gray"
#highlight_color = "light cyan"
"##;
