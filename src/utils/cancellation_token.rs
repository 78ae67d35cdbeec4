use std::{
    sync::{Condvar, Mutex},
    time::Duration,
};

/// A cancellation token, shared between the main thread and the threads it
/// spawns (input, runner, animation timers).
pub struct CancellationToken {
    // Setting this to true marks the token as cancelled.
    mutex: Mutex<bool>,
    cvar: Condvar,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self {
            mutex: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }
}

impl CancellationToken {
    /// Mark the [`CancellationToken`] as cancelled.
    ///
    /// This is idempotent, and once cancelled, will stay cancelled. Sending it
    /// again will not do anything.
    pub fn cancel(&self) {
        let mut guard = match self.mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    /// Try and check the [`CancellationToken`]'s status. Note that
    /// this will not block.
    pub fn try_check(&self) -> Option<bool> {
        self.mutex.try_lock().ok().map(|guard| *guard)
    }

    /// Whether the token has been cancelled, blocking on the lock if needed.
    pub fn is_cancelled(&self) -> bool {
        match self.mutex.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Allows a thread to sleep while still being interruptible by the token.
    ///
    /// Returns `true` if the token was cancelled before or during the sleep.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let guard = match self.mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match self
            .cvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
        {
            Ok((guard, _)) => *guard,
            Err(poisoned) => *poisoned.into_inner().0,
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::Arc,
        thread,
        time::{Duration, Instant},
    };

    use super::*;

    #[test]
    fn sleep_runs_to_completion_without_cancel() {
        let token = CancellationToken::default();
        let start = Instant::now();

        assert!(!token.sleep_with_cancellation(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(token.try_check(), Some(false));
    }

    #[test]
    fn cancel_interrupts_sleep() {
        let token = Arc::new(CancellationToken::default());
        let sleeper = {
            let token = token.clone();
            thread::spawn(move || token.sleep_with_cancellation(Duration::from_secs(30)))
        };

        thread::sleep(Duration::from_millis(10));
        token.cancel();

        assert!(sleeper.join().unwrap());
        assert!(token.is_cancelled());
    }

    #[test]
    fn already_cancelled_does_not_sleep() {
        let token = CancellationToken::default();
        token.cancel();
        token.cancel();

        let start = Instant::now();
        assert!(token.sleep_with_cancellation(Duration::from_secs(30)));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
