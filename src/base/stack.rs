// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Generic stack implementation built on immutable linked nodes.
//!
//! [`Stack`] never resizes or copies: a push allocates one node that points at
//! the previous top, and a pop detaches the top node. The chain always ends in
//! [`Node::Empty`], so emptiness is a variant test rather than a null check.

use super::errors::{Error, Result};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Basic last-in-first-out operations shared by every stack in this crate.
pub trait LifoStack<E> {
    /// Places `item` on top of the stack and returns a reference to it.
    fn push(&mut self, item: E) -> &E;

    /// Removes and returns the top item.
    ///
    /// Fails with [`Error::EmptyContainer`] if the stack is empty.
    fn pop(&mut self) -> Result<E>;

    /// Returns a reference to the top item without removing it.
    ///
    /// Fails with [`Error::EmptyContainer`] if the stack is empty.
    fn peek(&self) -> Result<&E>;

    /// Returns `true` if the stack holds no items.
    fn is_empty(&self) -> bool;
}

/// A link in the chain. Nodes are never modified once created.
enum Node<E> {
    Empty,
    Filled(E, Box<Node<E>>),
}

/// A generic stack implemented as a singly-linked chain of nodes.
pub struct Stack<E> {
    top: Node<E>,
    len: usize,
}

impl<E> Stack<E> {
    /// Creates a new empty stack.
    pub const fn new() -> Self {
        Self {
            top: Node::Empty,
            len: 0,
        }
    }

    /// Pushes an item onto the stack and returns a reference to it.
    pub fn push(&mut self, item: E) -> &E {
        let next = mem::replace(&mut self.top, Node::Empty);
        self.top = Node::Filled(item, Box::new(next));
        self.len += 1;
        match &self.top {
            Node::Filled(item, _) => item,
            Node::Empty => unreachable!("top was just filled"),
        }
    }

    /// Pushes multiple items onto the stack, the last one ending up on top.
    pub fn push_many(&mut self, items: impl IntoIterator<Item = E>) {
        for item in items {
            self.push(item);
        }
    }

    /// Pops the top item off the stack.
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<E> {
        match mem::replace(&mut self.top, Node::Empty) {
            Node::Filled(value, next) => {
                self.top = *next;
                self.len -= 1;
                Ok(value)
            }
            Node::Empty => {
                tracing::trace!("pop on empty stack");
                Err(Error::EmptyContainer)
            }
        }
    }

    /// Returns a reference to the top item on the stack without removing it.
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    pub fn peek(&self) -> Result<&E> {
        match &self.top {
            Node::Filled(value, _) => Ok(value),
            Node::Empty => {
                tracing::trace!("peek on empty stack");
                Err(Error::EmptyContainer)
            }
        }
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.top, Node::Empty)
    }

    /// Clears the stack, removing all items.
    pub fn clear(&mut self) {
        let mut node = mem::replace(&mut self.top, Node::Empty);
        // Unlink one node at a time so long chains don't recurse on drop.
        while let Node::Filled(value, next) = node {
            drop(value);
            node = *next;
        }
        self.len = 0;
    }

    /// Returns an iterator over the items from top to bottom.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            node: &self.top,
            remaining: self.len,
        }
    }
}

impl<E> LifoStack<E> for Stack<E> {
    fn push(&mut self, item: E) -> &E {
        Stack::push(self, item)
    }

    fn pop(&mut self) -> Result<E> {
        Stack::pop(self)
    }

    fn peek(&self) -> Result<&E> {
        Stack::peek(self)
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

impl<E> Default for Stack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Stack<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<E: Clone> Clone for Stack<E> {
    fn clone(&self) -> Self {
        let items: Vec<&E> = self.iter().collect();
        items.into_iter().rev().cloned().collect()
    }
}

impl<E: PartialEq> PartialEq for Stack<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for Stack<E> {}

impl<E: fmt::Debug> fmt::Debug for Stack<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E> FromIterator<E> for Stack<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.push_many(iter);
        stack
    }
}

impl<E> Extend<E> for Stack<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.push_many(iter);
    }
}

/// Borrowing iterator over a [`Stack`], top to bottom.
pub struct Iter<'a, E> {
    node: &'a Node<E>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        match self.node {
            Node::Filled(value, next) => {
                self.node = &**next;
                self.remaining -= 1;
                Some(value)
            }
            Node::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<'a, E> IntoIterator for &'a Stack<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator over a [`Stack`], popping from the top.
pub struct IntoIter<E> {
    stack: Stack<E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len, Some(self.stack.len))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

impl<E> IntoIterator for Stack<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_operations() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        assert_eq!(*stack.push(1), 1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Ok(&3));

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        for n in [0usize, 1, 2, 17, 256] {
            let mut stack = Stack::new();
            for i in 0..n {
                stack.push(i);
            }
            let popped: Vec<usize> = (0..n).map(|_| stack.pop().unwrap()).collect();
            let expected: Vec<usize> = (0..n).rev().collect();
            assert_eq!(popped, expected);
            assert!(stack.is_empty());
        }
    }

    #[test]
    fn test_is_empty_tracks_net_pushes() {
        let mut stack = Stack::new();
        let mut net = 0i32;
        for step in 0..50 {
            if step % 3 == 2 {
                stack.pop().unwrap();
                net -= 1;
            } else {
                stack.push(step);
                net += 1;
            }
            assert_eq!(stack.is_empty(), net == 0);
            assert_eq!(stack.len(), net as usize);
        }
    }

    #[test]
    fn test_empty_failures_do_not_mutate() {
        let mut stack: Stack<String> = Stack::new();
        assert_eq!(stack.peek(), Err(Error::EmptyContainer));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);

        stack.push("a".to_string());
        assert_eq!(stack.pop().as_deref(), Ok("a"));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_peek_leaves_top() {
        let mut stack = Stack::new();
        stack.push('x');
        assert_eq!(stack.peek(), Ok(&'x'));
        assert_eq!(stack.peek(), Ok(&'x'));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_iterators() {
        let stack: Stack<i32> = (1..=4).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(stack.iter().len(), 4);
        assert_eq!(format!("{stack:?}"), "[4, 3, 2, 1]");

        let mut copy = stack.clone();
        assert_eq!(copy, stack);
        copy.extend([5]);
        assert_ne!(copy, stack);

        assert_eq!(stack.into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_clear_long_chain() {
        let mut stack = Stack::new();
        stack.push_many(0..200_000u32);
        assert_eq!(stack.len(), 200_000);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);

        stack.push_many(0..200_000u32);
        drop(stack);
    }

    #[test]
    fn test_through_trait() {
        fn reverse<S: LifoStack<u8>>(stack: &mut S, input: &[u8]) -> Vec<u8> {
            for &b in input {
                stack.push(b);
            }
            let mut out = Vec::new();
            while !stack.is_empty() {
                out.push(stack.pop().unwrap());
            }
            out
        }

        let mut stack = Stack::new();
        assert_eq!(reverse(&mut stack, b"abc"), b"cba".to_vec());
    }
}
