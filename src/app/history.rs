//! The bounded, newest-first list of completed test results.

use std::collections::VecDeque;

use crate::{app::speed_test::TestResult, constants::MAX_HISTORY_ENTRIES};

/// Stores at most [`MAX_HISTORY_ENTRIES`] results, with the newest at the front.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<TestResult>,
}

impl History {
    /// Prepend a result, dropping the oldest entry if over capacity.
    pub fn push(&mut self, result: TestResult) {
        self.entries.push_front(result);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently completed result, if any.
    pub fn latest(&self) -> Option<&TestResult> {
        self.entries.front()
    }

    /// Iterate from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &TestResult> {
        self.entries.iter()
    }
}
