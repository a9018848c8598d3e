//! Cooperative cancellation for long searches

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cancellation signal polled by the search between candidates
///
/// Clones share the same flag, so a handle kept elsewhere can stop a running
/// search. An optional deadline trips the signal on its own.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Interrupt {
    /// Signal that only fires when triggered
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that also fires once `deadline` has passed
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Signal that also fires `timeout` from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now().checked_add(timeout).or(self.deadline);
        Self { deadline, ..self }
    }

    /// Request cancellation
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested or the deadline passed
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
