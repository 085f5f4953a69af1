// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Stepped integer ranges.
//!
//! A [`Range`] is an immutable `(from, to, step)` descriptor validated at
//! construction. Every traversal goes through a fresh [`RangeCursor`], so the
//! same range can be walked any number of times:
//!
//! ```rust
//! use cogent_collections::base::range::{range, range_step};
//!
//! let r = range_step(2, 19, 3)?;
//! assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![2, 5, 8, 11, 14, 17]);
//!
//! let mut total = 0;
//! for i in range(7)? {
//!     total += i;
//! }
//! assert_eq!(total, 21);
//! # Ok::<(), cogent_collections::base::Error>(())
//! ```

use super::errors::{Error, Result};
use std::fmt;
use std::iter::FusedIterator;

/// Pull-based traversal over a read-only sequence.
pub trait Cursor {
    /// The type of the values produced.
    type Item;

    /// Returns `true` if [`advance`](Cursor::advance) would produce a value.
    fn has_next(&self) -> bool;

    /// Returns the current value and moves past it.
    ///
    /// Fails with [`Error::ExhaustedSequence`] once the sequence is used up.
    fn advance(&mut self) -> Result<Self::Item>;

    /// Removes the last value produced.
    ///
    /// Cursors are read-only unless they say otherwise, so this fails with
    /// [`Error::UnsupportedOperation`].
    fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation)
    }
}

/// An arithmetic progression from `from` (inclusive) toward `to` (exclusive).
///
/// # Invariants
/// `step` is never zero, and `(to - from) / step` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct Range {
    from: i32,
    to: i32,
    step: i32,
}

/// Returns the range `0, 1, ..., to - 1`.
///
/// Fails with [`Error::InvalidDirection`] if `to` is negative.
pub fn range(to: i32) -> Result<Range> {
    Range::new(0, to, 1)
}

/// Returns the range `from, from + 1, ..., to - 1`.
///
/// Fails with [`Error::InvalidDirection`] if `to < from`.
pub fn range_from(from: i32, to: i32) -> Result<Range> {
    Range::new(from, to, 1)
}

/// Returns the range starting at `from` and moving by `step` while short of `to`.
pub fn range_step(from: i32, to: i32, step: i32) -> Result<Range> {
    Range::new(from, to, step)
}

impl Range {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStep`] if `step` is zero.
    /// - [`Error::InvalidDirection`] if the sign of `step` cannot lead from
    ///   `from` to `to`. An empty range (`from == to`) is accepted with any
    ///   nonzero step.
    pub fn new(from: i32, to: i32, step: i32) -> Result<Self> {
        if step == 0 {
            tracing::debug!(from, to, "rejected range with zero step");
            return Err(Error::InvalidStep);
        }
        // Truncating division: a wrong-signed step shorter than the span is
        // accepted and simply yields nothing.
        if span(from, to) / i64::from(step) < 0 {
            tracing::debug!(from, to, step, "rejected range stepping away from its bound");
            return Err(Error::InvalidDirection { from, to, step });
        }
        Ok(Self { from, to, step })
    }

    /// Returns the first value of the range.
    pub fn start(&self) -> i32 {
        self.from
    }

    /// Returns the exclusive bound of the range.
    pub fn end(&self) -> i32 {
        self.to
    }

    /// Returns the step between consecutive values.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Returns a fresh cursor positioned at `from`.
    pub fn to_cursor(&self) -> RangeCursor {
        RangeCursor {
            next: i64::from(self.from),
            to: self.to,
            step: self.step,
        }
    }

    /// Returns the number of values the range yields.
    pub fn len(&self) -> usize {
        self.to_cursor().remaining()
    }

    /// Returns `true` if the range yields no values.
    pub fn is_empty(&self) -> bool {
        !self.to_cursor().has_next()
    }

    /// Returns `true` if `value` is one of the values the range yields.
    pub fn contains(&self, value: i32) -> bool {
        let offset = span(self.from, value);
        let inside = if self.step < 0 {
            self.to < value && value <= self.from
        } else {
            self.from <= value && value < self.to
        };
        inside && offset % i64::from(self.step) == 0
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({}, {}, {})", self.from, self.to, self.step)
    }
}

impl IntoIterator for Range {
    type Item = i32;
    type IntoIter = RangeCursor;

    fn into_iter(self) -> Self::IntoIter {
        self.to_cursor()
    }
}

impl IntoIterator for &Range {
    type Item = i32;
    type IntoIter = RangeCursor;

    fn into_iter(self) -> Self::IntoIter {
        self.to_cursor()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    #[serde(default)]
    from: i32,
    to: i32,
    #[serde(default = "RawRange::default_step")]
    step: i32,
}

#[cfg(feature = "serde")]
impl RawRange {
    fn default_step() -> i32 {
        1
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for Range {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.from, raw.to, raw.step)
    }
}

/// Traversal state over a [`Range`].
///
/// The cursor is held wider than `i32` so stepping past either end of the
/// integer range cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCursor {
    next: i64,
    to: i32,
    step: i32,
}

impl RangeCursor {
    /// Returns the number of values left to produce.
    pub fn remaining(&self) -> usize {
        let left = i64::from(self.to) - self.next;
        let step = i64::from(self.step);
        if left == 0 || (left < 0) != (step < 0) {
            return 0;
        }
        let count = (left.abs() + step.abs() - 1) / step.abs();
        usize::try_from(count).unwrap_or(usize::MAX)
    }
}

impl Cursor for RangeCursor {
    type Item = i32;

    fn has_next(&self) -> bool {
        if self.step < 0 {
            i64::from(self.to) < self.next
        } else {
            self.next < i64::from(self.to)
        }
    }

    fn advance(&mut self) -> Result<i32> {
        if !self.has_next() {
            tracing::trace!(to = self.to, step = self.step, "advance past end of range");
            return Err(Error::ExhaustedSequence);
        }
        // Between from and to, so within i32.
        let value = self.next as i32;
        self.next += i64::from(self.step);
        Ok(value)
    }
}

impl Iterator for RangeCursor {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.advance().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeCursor {}

impl FusedIterator for RangeCursor {}

fn span(from: i32, to: i32) -> i64 {
    i64::from(to) - i64::from(from)
}
