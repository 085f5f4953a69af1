// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for the collection utilities.

/// A result type alias for collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type shared by stacks, ranges and cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `pop` or `peek` was called on an empty stack.
    #[error("stack is empty")]
    EmptyContainer,

    /// A range was requested with a step of zero.
    #[error("the step argument cannot be zero")]
    InvalidStep,

    /// The sign of the step can never reach `to` from `from`.
    #[error("step {step} has the wrong sign to go from {from} to {to}")]
    InvalidDirection {
        /// First value of the rejected range.
        from: i32,
        /// Exclusive bound of the rejected range.
        to: i32,
        /// Rejected step.
        step: i32,
    },

    /// A cursor was advanced past the end of its range.
    #[error("end of range exceeded")]
    ExhaustedSequence,

    /// Removal was requested on a read-only cursor.
    #[error("range cursors do not support remove")]
    UnsupportedOperation,
}

impl Error {
    /// Returns `true` if the error was raised while building a range.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidStep | Self::InvalidDirection { .. })
    }
}
