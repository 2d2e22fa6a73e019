//! Low-level buffer primitives for the vector engine.
//!
//! This module is the only place in the crate permitted to contain `unsafe`
//! code. It exposes [`RawBuf`], an owned allocation of `slots` element slots
//! of which a prefix of `init` slots is initialized, behind a fully safe
//! interface: every precondition is either a struct invariant or checked by
//! an assert. Five functions contain `unsafe`, and every `unsafe` block
//! carries a mandatory `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

/// An owned allocation of `slots` element slots with an initialized prefix.
///
/// Invariants:
/// - `ptr` points to an allocation of exactly `slots` slots of `T`, or is
///   dangling when no memory is owned (zero-sized `T`, or `slots == 0`).
/// - Slots `[0, init)` hold valid values of `T`; `[init, slots)` are
///   uninitialized.
/// - `init <= slots`.
///
/// Dropping a `RawBuf` drops the initialized prefix and releases the
/// allocation.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    slots: usize,
    init: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Allocate a buffer of exactly `slots` uninitialized slots.
    ///
    /// Zero-sized element types never allocate: the pointer stays dangling
    /// and the slot count is purely logical accounting.
    ///
    /// Allocation failure is fatal ([`handle_alloc_error`]); a byte size
    /// exceeding `isize::MAX` panics with "capacity overflow".
    pub(crate) fn allocate(slots: usize) -> Self {
        if mem::size_of::<T>() == 0 || slots == 0 {
            return Self {
                ptr: NonNull::dangling(),
                slots,
                init: 0,
                _marker: PhantomData,
            };
        }
        let layout = Layout::array::<T>(slots).expect("capacity overflow");
        // SAFETY: `layout` has non-zero size (`T` is not zero-sized and
        // `slots > 0`), the only requirement of `alloc`.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout);
        };
        Self {
            ptr,
            slots,
            init: 0,
            _marker: PhantomData,
        }
    }

    /// Total slot count of the allocation.
    pub(crate) fn slots(&self) -> usize {
        self.slots
    }

    /// Length of the initialized prefix.
    pub(crate) fn init(&self) -> usize {
        self.init
    }

    /// Write `value` into the first uninitialized slot, extending the
    /// initialized prefix by one.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full (`init == slots`).
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.init < self.slots, "raw buffer full");
        // SAFETY: `init < slots`, so the offset is within the allocation
        // (for zero-sized `T` the write is a no-op on an aligned dangling
        // pointer, which is permitted). The slot is uninitialized, so no
        // previous value is overwritten undropped.
        unsafe { self.ptr.as_ptr().add(self.init).write(value) };
        self.init += 1;
    }

    /// Replace this buffer with a fresh allocation of `new_slots` slots,
    /// bitwise-moving the initialized prefix across. The old allocation is
    /// released without touching the moved elements.
    ///
    /// # Panics
    ///
    /// Panics if `new_slots < init` (the prefix must fit).
    pub(crate) fn grow(&mut self, new_slots: usize) {
        assert!(
            new_slots >= self.init,
            "new slot count must hold the initialized prefix"
        );
        let mut next = Self::allocate(new_slots);
        // SAFETY: `init` is within both allocations (`init <= slots` by
        // invariant, `init <= new_slots` by the assert above), the source
        // prefix is initialized, and the two allocations are distinct so
        // the ranges cannot overlap.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), next.ptr.as_ptr(), self.init) };
        next.init = self.init;
        // The prefix now lives in `next`; forgetting it here keeps the old
        // buffer's drop from running element destructors twice.
        self.init = 0;
        *self = next;
    }

    /// View the initialized prefix as a slice.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, init)` are initialized by invariant, `init`
        // elements never exceed `isize::MAX` bytes (enforced at allocation),
        // and for zero-sized `T` a dangling-but-aligned pointer is valid
        // for any length. The lifetime is tied to `&self`.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.init) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // SAFETY: slots `[0, init)` are initialized by invariant and are
        // dropped exactly once, here.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.init)) };
        if mem::size_of::<T>() != 0 && self.slots != 0 {
            // Matches the layout used in `allocate`.
            let layout = Layout::array::<T>(self.slots).expect("capacity overflow");
            // SAFETY: `ptr` was returned by `alloc` with this exact layout
            // and has not been released before.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}
