use crate::app::speed_test::TestPhase;

/// Reasons a simulated test run can fail.
///
/// Apart from [`RunError::Cancelled`], every one of these is reported to the
/// user as a failed run, and the run is reset so it can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The measurement source produced a value outside of the phase's range.
    OutOfRange {
        phase: TestPhase,
        value: u32,
        min: u32,
        max: u32,
    },
    /// A phase or measurement arrived in the wrong order.
    OutOfOrder {
        expected: TestPhase,
        actual: TestPhase,
    },
    /// An event arrived while no run was active.
    NotRunning,
    /// A run tried to complete without all three measurements.
    IncompleteResult,
    /// The receiving end of the event channel went away.
    Disconnected,
    /// The runner thread stopped without finishing.
    Aborted,
    /// The run was cancelled, usually because the program is exiting.
    Cancelled,
}

impl RunError {
    /// Whether this error should be surfaced to the user.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, RunError::Cancelled | RunError::Disconnected)
    }
}

pub type RunResult<T> = Result<T, RunError>;

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::OutOfRange {
                phase,
                value,
                min,
                max,
            } => write!(
                f,
                "{phase} measurement '{value}' is outside of the range [{min}, {max})"
            ),
            RunError::OutOfOrder { expected, actual } => {
                write!(f, "expected the {expected} phase, got {actual}")
            }
            RunError::NotRunning => write!(f, "no test is running"),
            RunError::IncompleteResult => {
                write!(f, "a result needs ping, download, and upload values")
            }
            RunError::Disconnected => write!(f, "the event channel was disconnected"),
            RunError::Aborted => write!(f, "the test runner stopped unexpectedly"),
            RunError::Cancelled => write!(f, "the test was cancelled"),
        }
    }
}

impl std::error::Error for RunError {}
