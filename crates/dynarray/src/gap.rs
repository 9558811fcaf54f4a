// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Guard for a hole opened in the middle of a `DynamicArray`.
//!
//! While a `Gap` is alive the array's `len` only covers the elements before
//! the hole. The hole is `count` slots wide starting at `index`; the first
//! `filled` of them have been written, and `tail` live elements follow the
//! hole. Dropping the guard (normally or while unwinding) slides the tail
//! left over the unfilled slots and restores `len`, so every live element is
//! accounted for exactly once.

use core::ptr;

use crate::dynamic_array::DynamicArray;

pub(crate) struct Gap<'a, T> {
    array: &'a mut DynamicArray<T>,
    index: usize,
    count: usize,
    filled: usize,
    tail: usize,
}

impl<'a, T> Gap<'a, T> {
    /// Opens a hole of `count` slots at `index`, moving `[index, len)` right.
    ///
    /// # Safety
    ///
    /// `index <= len` and `len + count <= capacity`.
    pub(crate) unsafe fn open(array: &'a mut DynamicArray<T>, index: usize, count: usize) -> Self {
        debug_assert!(index <= array.len);
        debug_assert!(array.len + count <= array.capacity());

        let tail = array.len - index;
        let base = array.buf.as_ptr();

        // SAFETY: source and destination lie inside the allocation; ptr::copy
        // handles the overlap.
        unsafe { ptr::copy(base.add(index), base.add(index + count), tail) };
        array.len = index;

        Self {
            array,
            index,
            count,
            filled: 0,
            tail,
        }
    }

    /// Treats the `count` live slots at `[index, index + count)` as a hole.
    ///
    /// The caller drops or moves out of those slots; the tail closes over
    /// them when the guard drops.
    ///
    /// # Safety
    ///
    /// `index + count <= len`.
    pub(crate) unsafe fn over_live(
        array: &'a mut DynamicArray<T>,
        index: usize,
        count: usize,
    ) -> Self {
        debug_assert!(index + count <= array.len);

        let tail = array.len - index - count;
        array.len = index;

        Self {
            array,
            index,
            count,
            filled: 0,
            tail,
        }
    }

    /// Pointer to the first slot of the hole.
    pub(crate) fn start(&self) -> *mut T {
        // SAFETY: index <= capacity.
        unsafe { self.array.buf.as_ptr().add(self.index) }
    }

    /// Writes the next value into the hole.
    ///
    /// # Safety
    ///
    /// Fewer than `count` values have been written.
    pub(crate) unsafe fn fill(&mut self, value: T) {
        debug_assert!(self.filled < self.count);
        // SAFETY: the slot is inside the hole and not yet written.
        unsafe { ptr::write(self.start().add(self.filled), value) };
        self.filled += 1;
    }
}

impl<T> Drop for Gap<'_, T> {
    fn drop(&mut self) {
        let filled_end = self.index + self.filled;

        if self.filled < self.count {
            let base = self.array.buf.as_ptr();
            // SAFETY: the tail sits right after the hole; moving it left keeps
            // it inside the allocation.
            unsafe {
                ptr::copy(
                    base.add(self.index + self.count),
                    base.add(filled_end),
                    self.tail,
                )
            };
        }

        self.array.len = filled_end + self.tail;
    }
}
