// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Array-backed stack, the baseline [`Stack`](super::Stack) is measured against.

use super::errors::{Error, Result};
use super::stack::LifoStack;

/// A generic stack implemented using a Vec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecStack<E> {
    items: Vec<E>,
}

impl<E> VecStack<E> {
    /// Creates a new empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a new stack with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an item onto the stack and returns a reference to it.
    pub fn push(&mut self, item: E) -> &E {
        let index = self.items.len();
        self.items.push(item);
        &self.items[index]
    }

    /// Pushes multiple items onto the stack.
    pub fn push_many(&mut self, items: impl IntoIterator<Item = E>) {
        self.items.extend(items);
    }

    /// Pops the top item off the stack.
    pub fn pop(&mut self) -> Result<E> {
        self.items.pop().ok_or(Error::EmptyContainer)
    }

    /// Returns a reference to the top item without removing it.
    pub fn peek(&self) -> Result<&E> {
        self.items.last().ok_or(Error::EmptyContainer)
    }

    /// Returns a mutable reference to the top item without removing it.
    pub fn peek_mut(&mut self) -> Result<&mut E> {
        self.items.last_mut().ok_or(Error::EmptyContainer)
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the stack, removing all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<E> LifoStack<E> for VecStack<E> {
    fn push(&mut self, item: E) -> &E {
        VecStack::push(self, item)
    }

    fn pop(&mut self) -> Result<E> {
        VecStack::pop(self)
    }

    fn peek(&self) -> Result<&E> {
        VecStack::peek(self)
    }

    fn is_empty(&self) -> bool {
        VecStack::is_empty(self)
    }
}

impl<E> FromIterator<E> for VecStack<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
