//! The vector engine: construct, append, concatenate, and slice.
//!
//! A [`Vector`] is a growable, contiguous, ordered collection with a
//! power-of-two capacity that only grows by doubling. Growth happens through
//! value-returning operations rather than in-place mutation: [`Vector::append`]
//! consumes its receiver and returns the grown vector, so a stale handle to a
//! reallocated buffer cannot exist — the borrow checker retires it.
//!
//! ```
//! use sprout_core::Vector;
//!
//! let v = Vector::new().append(2.78).append(3.14);
//! assert_eq!(v.len(), 2);
//! assert_eq!(v.capacity(), 2);
//! assert_eq!(v.as_slice(), &[2.78, 3.14]);
//! ```

use crate::raw::RawBuf;
use std::fmt;
use std::ops::Index;

/// Smallest capacity reachable from `cap` by repeated doubling that holds
/// `needed` elements.
///
/// Panics with "capacity overflow" if doubling overflows `usize`.
fn grown_capacity(mut cap: usize, needed: usize) -> usize {
    debug_assert!(cap >= 1);
    while cap < needed {
        cap = cap.checked_mul(2).expect("capacity overflow");
    }
    cap
}

/// A growable, contiguous vector of `T` with amortized-doubling capacity.
///
/// Invariants, upheld by every operation:
/// - `capacity()` is a power of two and at least 1.
/// - `capacity() >= len()`.
/// - The backing allocation holds exactly `capacity()` slots; indices
///   `[0, len())` are the logical content, in order.
///
/// Every vector owns its buffer exclusively. [`Vector::append`] consumes the
/// input and returns the result; [`Vector::concat`] and [`Vector::slice`]
/// copy into a fresh allocation and leave their inputs untouched. Exactly
/// one buffer is released per vector value that is never fed to `append`.
#[must_use]
pub struct Vector<T> {
    buf: RawBuf<T>,
}

impl<T> Vector<T> {
    /// Construct an empty vector with capacity 1.
    ///
    /// The single-slot buffer is allocated immediately, so the first append
    /// needs no growth step.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::allocate(1),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buf.init()
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of allocated element slots. Always a power of two, always at
    /// least [`Self::len`], and monotone across a chain of appends.
    pub fn capacity(&self) -> usize {
        self.buf.slots()
    }

    /// The elements as a slice, in index order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Append `item`, consuming the vector and returning the grown one.
    ///
    /// Capacity doubles from its *current* value until it holds the new
    /// length, so capacity never shrinks and the total copy cost across `n`
    /// appends stays O(n). The buffer is reallocated only when capacity
    /// changes.
    ///
    /// Consuming `self` is the point: after a reallocation the old handle's
    /// buffer is gone, and move semantics make that impossible to observe.
    /// Chain or rebind instead:
    ///
    /// ```
    /// use sprout_core::Vector;
    ///
    /// let mut v = Vector::new();
    /// for i in 0..4 {
    ///     v = v.append(i);
    /// }
    /// assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn append(mut self, item: T) -> Self {
        let needed = self.len() + 1;
        if needed > self.capacity() {
            self.buf.grow(grown_capacity(self.capacity(), needed));
        }
        self.buf.push(item);
        self
    }
}

impl<T: Clone> Vector<T> {
    /// Concatenate two vectors into a brand-new allocation.
    ///
    /// The result holds `self`'s elements followed by `other`'s; its
    /// capacity is doubled up from 1 to hold the combined length. Neither
    /// input is consumed or mutated, so self-concatenation works through two
    /// shared borrows:
    ///
    /// ```
    /// use sprout_core::Vector;
    ///
    /// let v = Vector::new().append(1).append(2);
    /// let doubled = v.concat(&v);
    /// assert_eq!(doubled.as_slice(), &[1, 2, 1, 2]);
    /// assert_eq!(v.len(), 2);
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let total = self.len() + other.len();
        let mut buf = RawBuf::allocate(grown_capacity(1, total));
        for item in self.as_slice() {
            buf.push(item.clone());
        }
        for item in other.as_slice() {
            buf.push(item.clone());
        }
        Self { buf }
    }

    /// Copy the elements in `[start, stop)` into a new vector.
    ///
    /// Both bounds are clamped to [`Self::len`]; an out-of-range `stop` is
    /// not an error, it simply takes everything from `start` to the end.
    /// When the clamped range is empty (`stop <= start`), the result is an
    /// empty vector identical to [`Vector::new`]. The input is neither
    /// consumed nor mutated.
    pub fn slice(&self, start: usize, stop: usize) -> Self {
        let start = start.min(self.len());
        let stop = stop.min(self.len());
        if stop <= start {
            return Self::new();
        }
        let len = stop - start;
        let mut buf = RawBuf::allocate(grown_capacity(1, len));
        for item in &self.as_slice()[start..stop] {
            buf.push(item.clone());
        }
        Self { buf }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clones content and capacity both, so a clone is indistinguishable
    /// from the original to every accessor.
    fn clone(&self) -> Self {
        let mut buf = RawBuf::allocate(self.capacity());
        for item in self.as_slice() {
            buf.push(item.clone());
        }
        Self { buf }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Equality compares logical content only; capacity is an allocation detail.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// Direct element access.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn from_items<T>(items: impl IntoIterator<Item = T>) -> Vector<T> {
        let mut v = Vector::new();
        for item in items {
            v = v.append(item);
        }
        v
    }

    #[test]
    fn construct_is_empty_with_unit_capacity() {
        let v: Vector<i64> = Vector::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn first_append_needs_no_growth() {
        let v = Vector::new().append(7);
        assert_eq!(v.len(), 1);
        assert_eq!(v.capacity(), 1);
        assert_eq!(v[0], 7);
    }

    #[test]
    fn capacity_doubles_from_current_value() {
        let mut v = Vector::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            v = v.append(i);
            seen.push(v.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn concat_is_a_fresh_allocation_and_consumes_neither_input() {
        let a = from_items([1, 2, 3]);
        let b = from_items([4, 5]);
        let c = a.concat(&b);
        assert_eq!(c.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(c.capacity(), 8);
        // Both inputs are still live with unchanged content.
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[4, 5]);
    }

    #[test]
    fn self_concat_duplicates_content() {
        let v = from_items(["a", "b"]);
        let doubled = v.concat(&v);
        assert_eq!(doubled.as_slice(), &["a", "b", "a", "b"]);
    }

    #[test]
    fn concat_with_empty_on_either_side_is_identity() {
        let v = from_items([10, 20]);
        let empty = Vector::new();
        assert_eq!(v.concat(&empty).as_slice(), v.as_slice());
        assert_eq!(empty.concat(&v).as_slice(), v.as_slice());
        let both: Vector<i32> = Vector::new().concat(&Vector::new());
        assert!(both.is_empty());
        assert_eq!(both.capacity(), 1);
    }

    #[test]
    fn slice_full_range_copies_everything() {
        let v = from_items([1, 2, 3, 4]);
        let s = v.slice(0, v.len());
        assert_eq!(s.as_slice(), v.as_slice());
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn slice_interior_range() {
        let v = from_items([0, 1, 2, 3, 4, 5]);
        assert_eq!(v.slice(2, 5).as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn slice_clamps_stop_to_len() {
        let v = from_items([1, 2, 3]);
        assert_eq!(v.slice(1, 100).as_slice(), v.slice(1, 3).as_slice());
    }

    #[test]
    fn slice_with_empty_or_inverted_range_is_a_plain_empty_vector() {
        let v = from_items([1, 2, 3]);
        for (start, stop) in [(0, 0), (2, 2), (3, 1), (100, 100)] {
            let s = v.slice(start, stop);
            assert!(s.is_empty());
            assert_eq!(s.capacity(), 1);
        }
    }

    #[test]
    fn get_checks_bounds() {
        let v = from_items([5, 6]);
        assert_eq!(v.get(1), Some(&6));
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic]
    fn index_past_the_end_panics() {
        let v = from_items([1]);
        let _ = v[1];
    }

    #[test]
    fn clone_preserves_content_and_capacity() {
        let v = from_items([1, 2, 3, 4, 5]);
        let c = v.clone();
        assert_eq!(c, v);
        assert_eq!(c.capacity(), v.capacity());
    }

    #[test]
    fn equality_compares_content() {
        let a = from_items([1, 2]);
        let b = from_items([1, 2, 3]).slice(0, 2);
        assert_eq!(a, b);
        assert_ne!(a, from_items([1, 2, 3]));
        assert_ne!(a, Vector::new());
    }

    #[test]
    fn debug_formats_as_a_list() {
        let v = from_items([1, 2]);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn zero_sized_elements_keep_the_accounting() {
        let mut v = Vector::new();
        for _ in 0..5 {
            v = v.append(());
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.slice(1, 4).len(), 3);
    }

    #[test]
    fn every_vector_releases_its_elements_exactly_once() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut v = Vector::new();
            for _ in 0..10 {
                v = v.append(Rc::clone(&tracker));
            }
            let copy = v.slice(0, 5);
            let joined = v.concat(&copy);
            assert_eq!(Rc::strong_count(&tracker), 1 + 10 + 5 + 15);
            drop(v);
            assert_eq!(Rc::strong_count(&tracker), 1 + 5 + 15);
            drop(joined);
            assert_eq!(Rc::strong_count(&tracker), 1 + 5);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    proptest! {
        #[test]
        fn append_preserves_order(items in vec(any::<i32>(), 0..64)) {
            let v = from_items(items.iter().copied());
            prop_assert_eq!(v.len(), items.len());
            prop_assert_eq!(v.as_slice(), items.as_slice());
        }

        #[test]
        fn capacity_is_a_power_of_two_at_least_len(items in vec(any::<u8>(), 0..64)) {
            let v = from_items(items.iter().copied());
            prop_assert!(v.capacity().is_power_of_two());
            prop_assert!(v.capacity() >= v.len());
            prop_assert!(v.capacity() >= 1);
        }

        #[test]
        fn concat_matches_sequence_concatenation(
            left in vec(any::<i16>(), 0..32),
            right in vec(any::<i16>(), 0..32),
        ) {
            let a = from_items(left.iter().copied());
            let b = from_items(right.iter().copied());
            let c = a.concat(&b);
            let mut expected = left.clone();
            expected.extend_from_slice(&right);
            prop_assert_eq!(c.as_slice(), expected.as_slice());
            prop_assert!(c.capacity().is_power_of_two());
            prop_assert!(c.capacity() >= c.len());
        }

        #[test]
        fn concat_is_associative_on_content(
            xs in vec(any::<u8>(), 0..16),
            ys in vec(any::<u8>(), 0..16),
            zs in vec(any::<u8>(), 0..16),
        ) {
            let a = from_items(xs.iter().copied());
            let b = from_items(ys.iter().copied());
            let c = from_items(zs.iter().copied());
            let left = a.concat(&b).concat(&c);
            let right = a.concat(&b.concat(&c));
            prop_assert_eq!(left.as_slice(), right.as_slice());
        }

        #[test]
        fn slice_matches_std_slicing(
            items in vec(any::<i32>(), 0..48),
            start in 0usize..64,
            stop in 0usize..64,
        ) {
            let v = from_items(items.iter().copied());
            let s = v.slice(start, stop);
            let lo = start.min(items.len());
            let hi = stop.min(items.len());
            let expected: &[i32] = if hi <= lo { &[] } else { &items[lo..hi] };
            prop_assert_eq!(s.as_slice(), expected);
            prop_assert!(s.capacity().is_power_of_two());
            // The input survives untouched.
            prop_assert_eq!(v.as_slice(), items.as_slice());
        }
    }
}
