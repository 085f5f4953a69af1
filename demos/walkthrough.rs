// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Walks through the stack and range utilities.
//!
//! Run with `RUST_LOG=trace` to see the events emitted on rejected ranges
//! and failed stack operations.

use cogent_collections::base::{range, range_from, range_step, Cursor, Error, Result, Stack};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reverse a word with the stack.
    let mut stack = Stack::new();
    for c in "stressed".chars() {
        stack.push(c);
    }
    let reversed: String = stack.into_iter().collect();
    println!("stressed -> {reversed}");

    let mut empty: Stack<char> = Stack::new();
    if let Err(err) = empty.pop() {
        println!("pop on empty stack: {err}");
    }

    for r in [range_step(2, 19, 3)?, range_step(19, 2, -3)?, range_from(2, 9)?, range(7)?] {
        let values: Vec<i32> = r.into_iter().collect();
        println!("{r} -> {values:?}");
    }

    for (from, to, step) in [(2, 19, -3), (2, -19, 3), (2, 19, 0)] {
        match range_step(from, to, step) {
            Ok(r) => println!("{r} accepted"),
            Err(err @ (Error::InvalidStep | Error::InvalidDirection { .. })) => {
                println!("range({from}, {to}, {step}) rejected: {err}")
            }
            Err(err) => return Err(err),
        }
    }

    let mut cursor = range(2)?.to_cursor();
    while cursor.has_next() {
        println!("cursor -> {}", cursor.advance()?);
    }
    if let Err(err) = cursor.advance() {
        println!("advance after end: {err}");
    }

    Ok(())
}
