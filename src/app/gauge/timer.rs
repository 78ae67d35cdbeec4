use std::{sync::Arc, thread, time::Duration};

use crate::utils::cancellation_token::CancellationToken;

/// A repeating timer running on its own thread. Dropping it cancels it.
pub struct AnimationTimer {
    cancellation_token: Arc<CancellationToken>,
}

impl AnimationTimer {
    /// Calls `on_tick` every `interval` until it returns `false` or the timer
    /// is cancelled.
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let cancellation_token = Arc::new(CancellationToken::default());

        {
            let cancellation_token = cancellation_token.clone();
            thread::spawn(move || {
                loop {
                    if cancellation_token.sleep_with_cancellation(interval) {
                        break;
                    }

                    if !on_tick() {
                        break;
                    }
                }
            });
        }

        Self { cancellation_token }
    }

    /// Stops the timer. No ticks fire once the timer thread sees this.
    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }
}

impl Drop for AnimationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for AnimationTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationTimer")
            .field("cancelled", &self.cancellation_token.try_check())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Instant,
    };

    use super::*;

    fn wait_for(count: &AtomicUsize, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while count.load(Ordering::SeqCst) < expected {
            assert!(Instant::now() < deadline, "timer did not tick");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn stops_when_callback_says_so() {
        let count = Arc::new(AtomicUsize::new(0));
        let _timer = {
            let count = count.clone();
            AnimationTimer::spawn(Duration::from_millis(1), move || {
                count.fetch_add(1, Ordering::SeqCst) + 1 < 5
            })
        };

        wait_for(&count, 5);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn cancel_stops_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let timer = {
            let count = count.clone();
            AnimationTimer::spawn(Duration::from_millis(1), move || {
                count.fetch_add(1, Ordering::SeqCst);
                true
            })
        };

        wait_for(&count, 1);
        timer.cancel();
        thread::sleep(Duration::from_millis(10));

        let after_cancel = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn drop_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let count = count.clone();
            let _timer = AnimationTimer::spawn(Duration::from_millis(50), move || {
                count.fetch_add(1, Ordering::SeqCst);
                true
            });
        }

        thread::sleep(Duration::from_millis(100));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
