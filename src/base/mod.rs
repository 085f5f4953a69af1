// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Base utility modules providing foundational functionality.

pub mod errors;
pub mod range;
pub mod stack;
pub mod vec_stack;

pub use errors::{Error, Result};
pub use range::{range, range_from, range_step, Cursor, Range, RangeCursor};
pub use stack::{LifoStack, Stack};
pub use vec_stack::VecStack;
