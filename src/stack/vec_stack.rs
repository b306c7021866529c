use std::iter::FusedIterator;

/// LIFO stack over a `Vec`, used to walk singly linked chains backwards without recursion.
pub struct VecStack<T>(Vec<T>);

impl<T> VecStack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn top(&self) -> Option<&T> {
        self.0.last()
    }

    pub fn push(&mut self, elem: T) {
        self.0.push(elem)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    /// Pops every element, most recently pushed first.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self)
    }
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for VecStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

// ------------------------------------
// begin: Drain

pub struct Drain<'a, T>(&'a mut VecStack<T>);

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a, T> FusedIterator for Drain<'a, T> {}

// end: Drain
// ------------------------------------
