//! Read-only iteration over a [`Vector`].
//!
//! Each [`Iter`] carries its own cursor, so iterations nest and restart
//! freely, and an empty vector simply yields nothing. Because the iterator
//! borrows the vector, it cannot outlive a growth operation on it — growth
//! consumes the vector, and the borrow checker rejects the overlap.

use crate::vector::Vector;
use std::iter::FusedIterator;
use std::slice;

/// Borrowed iterator over a vector's elements in index order.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Vector<T> {
    /// Iterate over the elements in index order.
    ///
    /// ```
    /// use sprout_core::Vector;
    ///
    /// let v = Vector::new().append(2).append(3);
    /// let mut total = 0;
    /// for x in v.iter() {
    ///     total += x;
    /// }
    /// assert_eq!(total, 5);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }

    /// Iterate over `(index, element)` pairs, indices running over
    /// `[0, len())` in order.
    ///
    /// ```
    /// use sprout_core::Vector;
    ///
    /// let v = Vector::new().append("zero").append("one");
    /// for (i, name) in v.enumerate() {
    ///     assert_eq!(v[i], *name);
    /// }
    /// ```
    pub fn enumerate(&self) -> std::iter::Enumerate<Iter<'_, T>> {
        self.iter().enumerate()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
