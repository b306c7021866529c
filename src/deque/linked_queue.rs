use crate::error::{QueueError, Result, Status};
use crate::linear_list::{Chain, Iter, IterMut, IterOwned, LinkedList, Node};
use crate::stack::VecStack;

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::iter::FromIterator;

/// FIFO queue over a singly linked chain.
///
/// Accessors (`front`, `back`, `get`) fail with a [`QueueError`]; mutators report a [`Status`]
/// and leave the queue untouched when they do not succeed.
pub struct LinkedQueue<T>(LinkedList<T>);

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self(LinkedList::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Head node, for walking the chain by hand.
    pub fn peek(&self) -> Option<&Node<T>> {
        self.0.head()
    }

    pub fn front(&self) -> Result<&T> {
        self.0.front().ok_or(QueueError::EmptyQueue)
    }

    pub fn back(&self) -> Result<&T> {
        self.0.back().ok_or(QueueError::EmptyQueue)
    }

    /// Element at zero-based `position`. O(position).
    pub fn get(&self, position: usize) -> Result<&T> {
        self.check_position(position)?;
        self.0.get(position).ok_or(QueueError::InvalidPosition {
            position,
            len: self.len(),
        })
    }

    pub fn push(&mut self, elem: T) -> Status {
        self.0.push_back(elem);
        Status::Success
    }

    /// Inserts `elem` before the element currently at `position`.
    /// `position == len` appends.
    pub fn push_at(&mut self, position: usize, elem: T) -> Status {
        let len = self.len();
        if position > len {
            return QueueError::InvalidPosition { position, len }.into();
        }
        self.0.insert(position, elem);
        Status::Success
    }

    /// Splices a detached chain onto the tail. O(chain length).
    pub fn merge_chain(&mut self, chain: Chain<T>) -> Status {
        if chain.is_empty() {
            return Status::EmptyQueue;
        }
        self.0.append_chain(chain);
        Status::Success
    }

    /// Moves every element of `other` onto the tail, in order, leaving `other` empty.
    pub fn merge(&mut self, other: &mut LinkedQueue<T>) -> Status {
        if other.is_empty() {
            return Status::EmptyQueue;
        }
        while let Ok(elem) = other.dequeue() {
            self.0.push_back(elem);
        }
        Status::Success
    }

    pub fn pop(&mut self) -> Status {
        match self.0.pop_front() {
            Some(_) => Status::Success,
            None => Status::EmptyQueue,
        }
    }

    /// Removes the element currently at `position`.
    pub fn pop_at(&mut self, position: usize) -> Status {
        if let Err(err) = self.check_position(position) {
            return err.into();
        }
        self.0.remove(position);
        Status::Success
    }

    /// Removes the first `count` elements. Fails without removing anything if `count > len`.
    pub fn pop_batch(&mut self, count: usize) -> Status {
        let len = match self.ensure_non_empty() {
            Ok(len) => len,
            Err(err) => return err.into(),
        };
        if count > len {
            return QueueError::InvalidPosition {
                position: count,
                len,
            }
            .into();
        }
        for _ in 0..count {
            self.0.pop_front();
        }
        Status::Success
    }

    /// Drops every element. Reports `EmptyQueue` if there was nothing to drop.
    pub fn clear(&mut self) -> Status {
        if self.is_empty() {
            return Status::EmptyQueue;
        }
        self.0.clear();
        Status::Success
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.0.pop_front().ok_or(QueueError::EmptyQueue)
    }

    /// Takes every node out as a detached chain, leaving the queue empty.
    pub fn detach(&mut self) -> Chain<T> {
        self.0.take_chain()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.0.iter_mut()
    }

    fn ensure_non_empty(&self) -> Result<usize> {
        match self.len() {
            0 => Err(QueueError::EmptyQueue),
            len => Ok(len),
        }
    }

    // valid positions are [0, len - 1]
    fn check_position(&self, position: usize) -> Result<()> {
        let len = self.ensure_non_empty()?;
        if position >= len {
            return Err(QueueError::InvalidPosition { position, len });
        }
        Ok(())
    }
}

impl<T: Display> LinkedQueue<T> {
    /// Writes one element per line, head to tail.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<Status> {
        if self.is_empty() {
            return Ok(Status::EmptyQueue);
        }
        for elem in self.iter() {
            writeln!(out, "{}", elem)?;
        }
        Ok(Status::Success)
    }

    /// Writes one element per line, tail to head. Does not recurse.
    pub fn reverse_print_to<W: Write>(&self, out: &mut W) -> io::Result<Status> {
        if self.is_empty() {
            return Ok(Status::EmptyQueue);
        }
        let mut stack = VecStack::with_capacity(self.len());
        stack.extend(self.iter());
        for elem in stack.drain() {
            writeln!(out, "{}", elem)?;
        }
        Ok(Status::Success)
    }

    pub fn print(&self) -> io::Result<Status> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.print_to(&mut out)
    }

    pub fn reverse_print(&self) -> io::Result<Status> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.reverse_print_to(&mut out)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedQueue").field(&self.0).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(LinkedList::from_iter(iter))
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = IterOwned<T>;
    fn into_iter(self) -> IterOwned<T> {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
