//! Errors raised by the session engine
//!
//! Every state-changing call on a [`Session`](crate::session::Session)
//! reports a violated precondition through this type. None of these are
//! transient, so callers should surface them instead of retrying.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when grading, resigning or loading items
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index is outside the active question's items, or no question is loaded
    #[error("index out of range")]
    OutOfRange,
    /// The item has already been graded for this round
    #[error("item has already been answered")]
    AlreadyAnswered,
    /// The round has ended, either fully graded or with both teams resigned
    #[error("round is already complete")]
    RoundAlreadyComplete,
    /// An item was added for a variant other than the active question's
    #[error("active question is of a different kind")]
    KindMismatch,
}
