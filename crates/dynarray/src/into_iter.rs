// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::iter::FusedIterator;
use core::{mem, ptr, slice};

use crate::dynamic_array::DynamicArray;
use crate::raw_buffer::RawBuffer;

/// An iterator that moves elements out of a [`DynamicArray`].
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    // Live elements are exactly [start, end).
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let buf = mem::replace(&mut self.buf, RawBuffer::new());
        let end = mem::replace(&mut self.len, 0);

        IntoIter { buf, start: 0, end }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, the slot is live and leaves the live range.
        let value = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: the slot at the old end - 1 is live and leaves the live range.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: start <= end <= capacity.
            unsafe { self.buf.as_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;

        // SAFETY: the remaining elements were never yielded.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
