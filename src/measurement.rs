//! Simulated measurements, and the runner that walks through a test's phases.

mod error;
pub mod runner;

use std::sync::{Arc, Mutex, PoisonError};

pub use error::{RunError, RunResult};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::app::speed_test::TestPhase;

/// A single measurement taken during one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Ping in milliseconds.
    Ping(u32),
    /// Download speed in Mbps.
    Download(u32),
    /// Upload speed in Mbps.
    Upload(u32),
}

impl Measurement {
    /// Wraps `value` as a measurement of `phase`, if that phase measures
    /// anything.
    pub fn new(phase: TestPhase, value: u32) -> Option<Self> {
        match phase {
            TestPhase::Ping => Some(Measurement::Ping(value)),
            TestPhase::Download => Some(Measurement::Download(value)),
            TestPhase::Upload => Some(Measurement::Upload(value)),
            TestPhase::Idle | TestPhase::Complete => None,
        }
    }

    pub fn phase(&self) -> TestPhase {
        match self {
            Measurement::Ping(_) => TestPhase::Ping,
            Measurement::Download(_) => TestPhase::Download,
            Measurement::Upload(_) => TestPhase::Upload,
        }
    }
}

/// Something that produces the numbers standing in for a measurement.
pub trait MeasurementSource {
    /// Returns a value in `[min, max)`.
    fn next_in_range(&mut self, min: u32, max: u32) -> u32;
}

/// A source shared between the app and the runner thread.
pub type SharedSource = Arc<Mutex<Box<dyn MeasurementSource + Send>>>;

pub fn shared_source<S: MeasurementSource + Send + 'static>(source: S) -> SharedSource {
    Arc::new(Mutex::new(Box::new(source)))
}

/// Uniformly random measurements.
#[derive(Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// A source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A source that produces the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementSource for RandomSource {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }

        self.rng.random_range(min..max)
    }
}

/// Takes a measurement for `phase` from `source`, checking it falls in the
/// phase's range.
pub fn measure(source: &SharedSource, phase: TestPhase) -> RunResult<Measurement> {
    let Some((min, max)) = phase.measurement_range() else {
        return Err(RunError::OutOfOrder {
            expected: TestPhase::Ping,
            actual: phase,
        });
    };

    // A source that panicked mid-call is still usable for the next run.
    let value = source
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_in_range(min, max);

    if !(min..max).contains(&value) {
        return Err(RunError::OutOfRange {
            phase,
            value,
            min,
            max,
        });
    }

    Measurement::new(phase, value).ok_or(RunError::OutOfOrder {
        expected: TestPhase::Ping,
        actual: phase,
    })
}


#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::{
        test_utils::{FaultySource, ScriptedSource},
        *,
    };

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomSource::seeded(7);
        let mut b = RandomSource::seeded(7);

        for _ in 0..20 {
            assert_eq!(a.next_in_range(50, 250), b.next_in_range(50, 250));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut source = RandomSource::seeded(1);
        assert_eq!(source.next_in_range(10, 10), 10);
        assert_eq!(source.next_in_range(20, 10), 20);
    }

    #[test]
    fn measure_uses_phase_ranges() {
        let source = shared_source(ScriptedSource::new(&[25, 200, 80]));

        assert_eq!(
            measure(&source, TestPhase::Ping),
            Ok(Measurement::Ping(25))
        );
        assert_eq!(
            measure(&source, TestPhase::Download),
            Ok(Measurement::Download(200))
        );
        assert_eq!(
            measure(&source, TestPhase::Upload),
            Ok(Measurement::Upload(80))
        );
    }

    #[test]
    fn measure_rejects_out_of_range() {
        let source = shared_source(ScriptedSource::new(&[60]));

        assert_eq!(
            measure(&source, TestPhase::Ping),
            Err(RunError::OutOfRange {
                phase: TestPhase::Ping,
                value: 60,
                min: 10,
                max: 60,
            })
        );
    }

    #[test]
    fn measure_recovers_after_source_panic() {
        let source = shared_source(FaultySource::new(&[25]));

        let poisoned = {
            let source = source.clone();
            std::thread::spawn(move || measure(&source, TestPhase::Ping))
                .join()
                .is_err()
        };
        assert!(poisoned);
        assert!(source.is_poisoned());

        assert_eq!(measure(&source, TestPhase::Ping), Ok(Measurement::Ping(25)));
    }

    #[test]
    fn measure_rejects_unmeasured_phases() {
        let source = shared_source(ScriptedSource::new(&[30]));

        assert!(measure(&source, TestPhase::Idle).is_err());
        assert!(measure(&source, TestPhase::Complete).is_err());
    }

    proptest! {
        #[test]
        fn random_measurements_stay_in_range(seed in any::<u64>()) {
            let source = shared_source(RandomSource::seeded(seed));

            for _ in 0..10 {
                let ping = measure(&source, TestPhase::Ping);
                let download = measure(&source, TestPhase::Download);
                let upload = measure(&source, TestPhase::Upload);

                prop_assert!(matches!(ping, Ok(Measurement::Ping(v)) if (10..60).contains(&v)));
                prop_assert!(
                    matches!(download, Ok(Measurement::Download(v)) if (50..250).contains(&v))
                );
                prop_assert!(matches!(upload, Ok(Measurement::Upload(v)) if (20..120).contains(&v)));
            }
        }
    }
}
