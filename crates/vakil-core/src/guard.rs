//! Deadline guards for datastore operations.
//!
//! This module provides the [`with_fallback`] combinator that races an
//! operation against a deadline. If the deadline elapses first, the caller
//! receives the supplied fallback value and the operation keeps running in
//! the background.
//!
//! Guarded reads are best-effort snapshots: the losing side of the race is
//! never cancelled, so a slow datastore call may still complete after the
//! fallback has been returned. Never guard a write whose completion is
//! required for correctness.

use std::future::Future;
use std::time::Duration;

use crate::TRACING_TARGET_GUARD;

/// A deadline budget for a guarded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Duration);

impl Deadline {
    /// Deadline for latency-sensitive callers (1.5 seconds).
    pub const INTERACTIVE: Self = Self(Duration::from_millis(1500));
    /// Deadline for request-path account lookups (3 seconds).
    pub const STANDARD: Self = Self(Duration::from_secs(3));
    /// Deadline for callers that tolerate slow responses (5 seconds).
    pub const RELAXED: Self = Self(Duration::from_secs(5));

    /// Creates a deadline from an arbitrary duration.
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Returns the deadline as a [`Duration`].
    pub const fn duration(self) -> Duration {
        self.0
    }
}

/// Races `operation` against `deadline`, returning `fallback` on expiry.
///
/// The operation is spawned onto the runtime, so it continues to completion
/// even when the deadline wins the race. A panicking operation also resolves
/// to the fallback rather than poisoning the caller.
pub async fn with_fallback<T, F>(deadline: Deadline, fallback: T, operation: F) -> T
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let handle = tokio::spawn(operation);

    match tokio::time::timeout(deadline.duration(), handle).await {
        Ok(Ok(value)) => value,
        Ok(Err(join_error)) => {
            tracing::error!(
                target: TRACING_TARGET_GUARD,
                error = %join_error,
                "guarded operation panicked, returning fallback"
            );
            fallback
        }
        Err(_elapsed) => {
            tracing::warn!(
                target: TRACING_TARGET_GUARD,
                deadline = ?deadline.duration(),
                "guarded operation exceeded deadline, returning fallback"
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[tokio::test]
    async fn fast_operation_returns_its_result() {
        let value = with_fallback(Deadline::STANDARD, 0, async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn slow_operation_returns_fallback() {
        let deadline = Deadline::new(Duration::from_millis(10));
        let value = with_fallback(deadline, -1, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            42
        })
        .await;
        assert_eq!(value, -1);
    }

    #[tokio::test]
    async fn panicking_operation_returns_fallback() {
        let value = with_fallback(Deadline::STANDARD, 7, async { panic!("boom") }).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn expired_guard_does_not_cancel_the_operation() {
        let completed = Arc::new(AtomicBool::new(false));
        let flag = completed.clone();

        let deadline = Deadline::new(Duration::from_millis(10));
        let value = with_fallback(deadline, false, async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            true
        })
        .await;

        assert!(!value);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(completed.load(Ordering::SeqCst));
    }
}
