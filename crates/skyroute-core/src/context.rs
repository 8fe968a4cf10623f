//! Cooperative cancellation for long-running queries.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A cooperative-cancellation token backed by an [`AtomicBool`], with an
/// optional deadline.
///
/// Clones share the same flag, so a query running on one thread can be
/// stopped from another by calling [`cancel`](Self::cancel) on any clone.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// Create a new, non-cancelled context without a deadline.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// Create a context that reports done once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Create a context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// The deadline, if any.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether cancellation has been requested or the deadline has passed.
    #[inline]
    pub fn is_done(&self) -> bool {
        if self.done.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(d) => Instant::now() >= d,
            None => false,
        }
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
