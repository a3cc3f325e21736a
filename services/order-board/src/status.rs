//! Outcomes of board operations
//!
//! Rejections are ordinary values returned inside `Ok`; they are part of
//! normal operation and never signal a fault.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of submitting an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionResult {
    /// Order accepted and added to the board
    #[serde(rename = "SUBMISSION_ACCEPTED")]
    Accepted,
    /// Quantity was not positive or price was negative
    #[serde(rename = "SUBMISSION_REJECTED_INVALID")]
    RejectedInvalid,
    /// An identical order is already live
    #[serde(rename = "SUBMISSION_REJECTED_DUPLICATE")]
    RejectedDuplicate,
}

impl SubmissionResult {
    /// Whether the board state changed
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Human readable description
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Order submitted successfully",
            Self::RejectedInvalid => {
                "Order submission rejected - Price must be >= 0 and Quantity must be >0."
            }
            Self::RejectedDuplicate => {
                "Order submission was rejected - This order is a duplication of a previously successfully submitted order."
            }
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of cancelling an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancellationResult {
    /// Order removed from the board
    #[serde(rename = "CANCELLATION_ACCEPTED")]
    Accepted,
    /// No live order matches the request
    #[serde(rename = "CANCELLATION_REJECTED_NOT_FOUND")]
    RejectedNotFound,
}

impl CancellationResult {
    /// Whether the board state changed
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Human readable description
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Accepted => "Order cancelled successfully.",
            Self::RejectedNotFound => "Order cancellation rejected - No order found.",
        }
    }
}

impl fmt::Display for CancellationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
