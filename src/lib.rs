// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Small collection utilities used across Cogent Core: a last-in-first-out
//! [`Stack`] built on immutable linked nodes, and stepped integer ranges
//! ([`Range`]) that plug into `for` loops.
//!
//! ```rust
//! use cogent_collections::{range_step, Stack};
//!
//! let mut stack = Stack::new();
//! for i in range_step(10, 0, -4)? {
//!     stack.push(i);
//! }
//! assert_eq!(stack.pop()?, 2);
//! assert_eq!(stack.pop()?, 6);
//! assert_eq!(stack.pop()?, 10);
//! assert!(stack.is_empty());
//! # Ok::<(), cogent_collections::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base;

pub use base::{range, range_from, range_step, Cursor, Error, LifoStack, Range, Result, Stack};
