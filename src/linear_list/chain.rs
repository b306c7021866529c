use super::linked_list::{Iter, Node};

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A detached run of nodes that nothing else points into.
///
/// Produced by draining a list (see [`LinkedList::take_chain`](super::LinkedList::take_chain))
/// or built directly, and consumed by splicing it onto another list's tail.
pub struct Chain<T> {
    head: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for Chain<T> {}
unsafe impl<T: Sync> Sync for Chain<T> {}

impl<T> Chain<T> {
    // cond: `head` owns exactly `len` nodes from `Node::alloc` and nothing else links to them
    pub(crate) unsafe fn from_raw_parts(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            head,
            len,
            _marker: PhantomData,
        }
    }

    /// Gives up ownership of the nodes to the caller.
    pub(crate) fn take_head(&mut self) -> Option<NonNull<Node<T>>> {
        self.len = 0;
        self.head.take()
    }

    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let head = self.take_head();
        unsafe { Node::dealloc_chain(head) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // build back to front so every node is linked exactly once
        let elems: Vec<T> = iter.into_iter().collect();
        let len = elems.len();
        let mut head = None;
        for elem in elems.into_iter().rev() {
            head = Some(Node::alloc(elem, head));
        }
        unsafe { Self::from_raw_parts(head, len) }
    }
}
