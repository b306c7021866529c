use super::Chain;

use std::fmt;
use std::iter::FromIterator;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// One link of the chain. Each node is owned by its predecessor, the head by the list.
pub struct Node<T> {
    pub(crate) elem: T,
    pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn alloc(elem: T, next: Option<NonNull<Node<T>>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { elem, next })))
    }

    // cond: ptr came from `alloc` and nothing links to it any more
    pub(crate) unsafe fn consume(ptr: NonNull<Self>) -> T {
        Box::from_raw(ptr.as_ptr()).elem
    }

    // cond: `head` starts a chain of nodes from `alloc` that nothing else links to
    pub(crate) unsafe fn dealloc_chain(head: Option<NonNull<Self>>) {
        let mut cur = head;
        while let Some(ptr) = cur {
            let node = Box::from_raw(ptr.as_ptr());
            cur = node.next;
        }
    }

    pub fn elem(&self) -> &T {
        &self.elem
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.map(|ptr| unsafe { &*ptr.as_ptr() })
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("elem", &self.elem)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

// Singly linked list. Every node is reached only through raw links, so `tail` stays valid
// for O(1) push_back whatever happens to the nodes before it.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    // invariant: head.is_none() == tail.is_none() == (len == 0)
    // invariant: walking `next` from head reaches tail after len - 1 steps, tail.next is None
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    fn node_ptr(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        let mut ptr = self.head?;
        for _ in 0..index {
            ptr = unsafe { (*ptr.as_ptr()).next }?;
        }
        Some(ptr)
    }

    // cond: index < self.len
    fn expect_node(&self, index: usize) -> NonNull<Node<T>> {
        match self.node_ptr(index) {
            Some(ptr) => ptr,
            None => panic!("index out of bounds"),
        }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_ptr(index)
            .map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn push_back(&mut self, elem: T) {
        let node_ptr = Node::alloc(elem, None);
        match self.tail {
            None => self.head = Some(node_ptr),
            Some(tail_ptr) => unsafe { (*tail_ptr.as_ptr()).next = Some(node_ptr) },
        }
        self.tail = Some(node_ptr);
        self.len += 1;
    }

    pub fn push_front(&mut self, elem: T) {
        let node_ptr = Node::alloc(elem, self.head);
        if self.tail.is_none() {
            self.tail = Some(node_ptr);
        }
        self.head = Some(node_ptr);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|ptr| unsafe {
            self.head = (*ptr.as_ptr()).next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            Node::consume(ptr)
        })
    }

    /// Inserts `elem` so that it ends up at `index`, shifting the old occupant back by one.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, elem: T) {
        if index > self.len {
            panic!("index out of bounds")
        }
        if index == self.len {
            return self.push_back(elem);
        }
        if index == 0 {
            return self.push_front(elem);
        }

        // 0 < index < len: the new node always has a successor, tail is unchanged
        let prev = self.expect_node(index - 1);
        unsafe {
            let next = (*prev.as_ptr()).next;
            (*prev.as_ptr()).next = Some(Node::alloc(elem, next));
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`.
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len {
            panic!("index out of bounds")
        }
        if index == 0 {
            return match self.pop_front() {
                Some(elem) => elem,
                None => panic!("index out of bounds"),
            };
        }

        let prev = self.expect_node(index - 1);
        unsafe {
            let target = match (*prev.as_ptr()).next {
                Some(ptr) => ptr,
                None => panic!("index out of bounds"),
            };
            (*prev.as_ptr()).next = (*target.as_ptr()).next;
            if (*prev.as_ptr()).next.is_none() {
                self.tail = Some(prev);
            }
            self.len -= 1;
            Node::consume(target)
        }
    }

    /// Splices every node of `chain` onto the tail. Returns the number of nodes appended.
    pub fn append_chain(&mut self, mut chain: Chain<T>) -> usize {
        let head = match chain.take_head() {
            Some(head) => head,
            None => return 0,
        };

        let mut last = head;
        let mut count = 1;
        while let Some(next) = unsafe { (*last.as_ptr()).next } {
            last = next;
            count += 1;
        }

        match self.tail {
            None => self.head = Some(head),
            Some(tail_ptr) => unsafe { (*tail_ptr.as_ptr()).next = Some(head) },
        }
        self.tail = Some(last);
        self.len += count;
        count
    }

    /// Moves the whole chain out, leaving the list empty.
    pub fn take_chain(&mut self) -> Chain<T> {
        let len = self.len;
        let head = self.head.take();
        self.tail = None;
        self.len = 0;
        unsafe { Chain::from_raw_parts(head, len) }
    }

    pub fn clear(&mut self) {
        let head = self.head.take();
        self.tail = None;
        self.len = 0;
        unsafe { Node::dealloc_chain(head) }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);

        let mut steps = 0;
        let mut last = None;
        let mut cur = self.head;
        while let Some(ptr) = cur {
            steps += 1;
            last = Some(ptr);
            cur = unsafe { (*ptr.as_ptr()).next };
        }
        assert_eq!(steps, self.len);
        assert_eq!(last, self.tail);
        if let Some(tail) = self.tail {
            assert!(unsafe { (*tail.as_ptr()).next.is_none() });
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

// --------------------------------
// begin: IterOwned

pub struct IterOwned<T>(LinkedList<T>);

impl<T> Iterator for IterOwned<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IterOwned<T>;
    fn into_iter(self) -> IterOwned<T> {
        IterOwned(self)
    }
}

impl<T> ExactSizeIterator for IterOwned<T> {
    fn len(&self) -> usize {
        self.0.len
    }
}

impl<T> FusedIterator for IterOwned<T> {}

// end: IterOwned
// ------------------------------------------

// ------------------------------------------
// begin: Iter

pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iter<'a, T> {
    // cond: `head` starts a chain of `len` nodes that outlives 'a
    pub(crate) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            next: head,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|ptr| unsafe {
            let node = &*ptr.as_ptr();
            self.next = node.next;
            self.len -= 1;
            &node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// end: Iter
// ------------------------------------------

// ------------------------------------------
// begin: IterMut

pub struct IterMut<'a, T> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.next.map(|ptr| unsafe {
            let node = ptr.as_ptr();
            self.next = (*node).next;
            self.len -= 1;
            &mut (*node).elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

// end: IterMut
// ------------------------------------------
