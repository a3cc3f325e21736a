//! Operation counters for the order board
//!
//! Counters are plain atomics bumped after the board lock is released, so
//! recording never extends the critical section.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::status::{CancellationResult, SubmissionResult};

/// Board metrics
#[derive(Debug, Default)]
pub struct BoardMetrics {
    /// Submissions accepted
    pub submissions_accepted: AtomicU64,
    /// Submissions rejected as invalid
    pub submissions_rejected_invalid: AtomicU64,
    /// Submissions rejected as duplicates
    pub submissions_rejected_duplicate: AtomicU64,
    /// Cancellations accepted
    pub cancellations_accepted: AtomicU64,
    /// Cancellations for orders that were not live
    pub cancellations_rejected_not_found: AtomicU64,
    /// Ledger invariant violations
    pub internal_errors: AtomicU64,
}

impl BoardMetrics {
    /// Create zeroed metrics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one submission outcome
    #[inline]
    pub fn record_submission(&self, result: SubmissionResult) {
        let counter = match result {
            SubmissionResult::Accepted => &self.submissions_accepted,
            SubmissionResult::RejectedInvalid => &self.submissions_rejected_invalid,
            SubmissionResult::RejectedDuplicate => &self.submissions_rejected_duplicate,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one cancellation outcome
    #[inline]
    pub fn record_cancellation(&self, result: CancellationResult) {
        let counter = match result {
            CancellationResult::Accepted => &self.cancellations_accepted,
            CancellationResult::RejectedNotFound => &self.cancellations_rejected_not_found,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one invariant violation
    #[inline]
    pub fn record_internal_error(&self) {
        self.internal_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Read every counter
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions_accepted: self.submissions_accepted.load(Ordering::Relaxed),
            submissions_rejected_invalid: self.submissions_rejected_invalid.load(Ordering::Relaxed),
            submissions_rejected_duplicate: self
                .submissions_rejected_duplicate
                .load(Ordering::Relaxed),
            cancellations_accepted: self.cancellations_accepted.load(Ordering::Relaxed),
            cancellations_rejected_not_found: self
                .cancellations_rejected_not_found
                .load(Ordering::Relaxed),
            internal_errors: self.internal_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`BoardMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Submissions accepted
    pub submissions_accepted: u64,
    /// Submissions rejected as invalid
    pub submissions_rejected_invalid: u64,
    /// Submissions rejected as duplicates
    pub submissions_rejected_duplicate: u64,
    /// Cancellations accepted
    pub cancellations_accepted: u64,
    /// Cancellations for orders that were not live
    pub cancellations_rejected_not_found: u64,
    /// Ledger invariant violations
    pub internal_errors: u64,
}

impl MetricsSnapshot {
    /// All submissions seen, accepted or not
    #[must_use]
    pub const fn total_submissions(&self) -> u64 {
        self.submissions_accepted
            + self.submissions_rejected_invalid
            + self.submissions_rejected_duplicate
    }

    /// All cancellations seen, accepted or not
    #[must_use]
    pub const fn total_cancellations(&self) -> u64 {
        self.cancellations_accepted + self.cancellations_rejected_not_found
    }
}
