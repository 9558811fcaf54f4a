// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem;
use core::ops::Range;
use core::ptr;

use crate::dynamic_array::DynamicArray;
use crate::error::DynamicArrayError;
use crate::gap::Gap;
use crate::remove_if::remove_if;

impl<T> DynamicArray<T> {
    // =========================================================================
    // push(), push_with(), pop()
    // =========================================================================

    /// Appends `value`, doubling the capacity when full.
    ///
    /// Amortized O(1).
    ///
    /// # Errors
    ///
    /// If growing fails the array is unchanged and `value` is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::new();
    ///
    ///     array.push(1u8)?;
    ///     assert_eq!(array.capacity(), 1);
    ///
    ///     array.push(2u8)?;
    ///     array.push(3u8)?;
    ///     assert_eq!(array.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), DynamicArrayError> {
        self.grow_for(1)?;
        // SAFETY: grow_for(1) guarantees a free slot.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends the value returned by `f`, constructed after any growth.
    ///
    /// `f` is not called if growing fails.
    pub fn push_with<F>(&mut self, f: F) -> Result<(), DynamicArrayError>
    where
        F: FnOnce() -> T,
    {
        self.grow_for(1)?;
        let value = f();
        // SAFETY: grow_for(1) guarantees a free slot.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live prefix.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    // =========================================================================
    // insert_at(), insert_with(), insert_n_at(), insert_slice_at()
    // =========================================================================

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Returns the position of the inserted element (`index`).
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::OutOfRange`] if `index > len()`.
    /// - Allocation errors if growing fails; the array is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[1, 3])?;
    ///     let position = array.insert_at(1, 2)?;
    ///
    ///     assert_eq!(position, 1);
    ///     assert_eq!(array, [1, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<usize, DynamicArrayError> {
        self.insert_with(index, || value)
    }

    /// Inserts the value returned by `f` at `index`.
    ///
    /// `f` runs after the bounds check and any growth, and before elements
    /// are shifted, so a panic in `f` leaves the contents untouched.
    pub fn insert_with<F>(&mut self, index: usize, f: F) -> Result<usize, DynamicArrayError>
    where
        F: FnOnce() -> T,
    {
        self.check_position(index)?;
        self.grow_for(1)?;

        let value = f();

        // SAFETY: index <= len and there is room for one more element.
        let mut gap = unsafe { Gap::open(self, index, 1) };
        // SAFETY: the hole is one slot wide and still empty.
        unsafe { gap.fill(value) };

        Ok(index)
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// A zero `count` is a no-op returning `index`.
    ///
    /// If a clone panics, the clones made so far stay in place and the
    /// following elements close up behind them.
    pub fn insert_n_at(
        &mut self,
        index: usize,
        count: usize,
        value: &T,
    ) -> Result<usize, DynamicArrayError>
    where
        T: Clone,
    {
        self.insert_from_fn(index, count, |_| value.clone())
    }

    /// Inserts clones of `items` at `index`, preserving their order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[1, 5])?;
    ///     array.insert_slice_at(1, &[2, 3, 4])?;
    ///
    ///     assert_eq!(array, [1, 2, 3, 4, 5]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert_slice_at(&mut self, index: usize, items: &[T]) -> Result<usize, DynamicArrayError>
    where
        T: Clone,
    {
        self.insert_from_fn(index, items.len(), |i| items[i].clone())
    }

    fn insert_from_fn<F>(
        &mut self,
        index: usize,
        count: usize,
        mut f: F,
    ) -> Result<usize, DynamicArrayError>
    where
        F: FnMut(usize) -> T,
    {
        self.check_position(index)?;

        if count == 0 {
            return Ok(index);
        }

        self.grow_for(count)?;

        // SAFETY: index <= len and grow_for(count) made room for the hole.
        let mut gap = unsafe { Gap::open(self, index, count) };

        for i in 0..count {
            let value = f(i);
            // SAFETY: exactly `count` values are written.
            unsafe { gap.fill(value) };
        }

        Ok(index)
    }

    // =========================================================================
    // erase_at(), erase_range(), erase_if()
    // =========================================================================

    /// Drops the element at `index` and shifts later elements left.
    ///
    /// Returns `index`, which now holds the element that followed the erased
    /// one (or equals `len()` if it was the last).
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn erase_at(&mut self, index: usize) -> Result<usize, DynamicArrayError> {
        if index >= self.len {
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        self.erase_range(index..index + 1)
    }

    /// Drops every element in `range` exactly once and shifts the tail left.
    ///
    /// Returns `range.start`. An empty range is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `range.start > range.end`
    /// or `range.end > len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[1, 2, 3, 4, 5])?;
    ///     let position = array.erase_range(1..4)?;
    ///
    ///     assert_eq!(position, 1);
    ///     assert_eq!(array, [1, 5]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn erase_range(&mut self, range: Range<usize>) -> Result<usize, DynamicArrayError> {
        let Range { start, end } = range;

        if end > self.len || start > end {
            let index = if end > self.len { end } else { start };
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let count = end - start;
        if count == 0 {
            return Ok(start);
        }

        // SAFETY: start + count == end <= len.
        let gap = unsafe { Gap::over_live(self, start, count) };
        let erased = ptr::slice_from_raw_parts_mut(gap.start(), count);

        // SAFETY: the erased slots are outside the live prefix while `gap`
        // lives, so they are dropped here and nowhere else. If a destructor
        // panics the rest are still dropped and `gap` closes the hole.
        unsafe { ptr::drop_in_place(erased) };
        drop(gap);

        Ok(start)
    }

    /// Drops every element for which `pred` returns `true`, keeping the rest
    /// in order. Returns the number of removed elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[1, 2, 3, 4, 5, 6])?;
    ///     let removed = array.erase_if(|x| x % 2 == 0);
    ///
    ///     assert_eq!(removed, 3);
    ///     assert_eq!(array, [1, 3, 5]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn erase_if<F>(&mut self, pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let kept = remove_if(self.as_mut_slice(), pred);
        let removed = self.len - kept;
        self.truncate(kept);
        removed
    }

    // =========================================================================
    // truncate(), clear()
    // =========================================================================

    /// Drops the elements past `len`. No-op if `len >= self.len()`.
    ///
    /// Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        // SAFETY: [len, self.len) is live.
        let excess =
            unsafe { ptr::slice_from_raw_parts_mut(self.buf.as_ptr().add(len), self.len - len) };

        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: the excess slots are no longer reachable through the array.
        unsafe { ptr::drop_in_place(excess) };
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // =========================================================================
    // resize(), resize_default(), resize_with()
    // =========================================================================

    /// Resizes to `count` elements, appending clones of `value` or dropping
    /// the excess.
    ///
    /// Growth follows the doubling policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[1, 2])?;
    ///
    ///     array.resize(4, 0)?;
    ///     assert_eq!(array, [1, 2, 0, 0]);
    ///
    ///     array.resize(1, 0)?;
    ///     assert_eq!(array, [1]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(&mut self, count: usize, value: T) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        if count <= self.len {
            self.truncate(count);
            return Ok(());
        }

        let additional = count - self.len;
        self.grow_for(additional)?;
        self.extend_with(additional, value);
        Ok(())
    }

    /// Resizes to `count` elements, appending `T::default()` values.
    pub fn resize_default(&mut self, count: usize) -> Result<(), DynamicArrayError>
    where
        T: Default,
    {
        self.resize_with(count, T::default)
    }

    /// Resizes to `count` elements, appending values returned by `f`.
    pub fn resize_with<F>(&mut self, count: usize, f: F) -> Result<(), DynamicArrayError>
    where
        F: FnMut() -> T,
    {
        if count <= self.len {
            self.truncate(count);
            return Ok(());
        }

        let additional = count - self.len;
        self.grow_for(additional)?;
        self.extend_from_fn(additional, f);
        Ok(())
    }

    // =========================================================================
    // assign(), assign_from_slice(), append_slice()
    // =========================================================================

    /// Replaces the contents with `count` clones of `value`.
    ///
    /// When more capacity is needed, a buffer of exactly `count` slots is
    /// allocated before anything is dropped.
    ///
    /// # Errors
    ///
    /// On allocation failure the array is unchanged.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        self.prepare_assign(count)?;
        self.extend_with(count, value);
        Ok(())
    }

    /// Replaces the contents with clones of `items`.
    ///
    /// # Errors
    ///
    /// On allocation failure the array is unchanged.
    pub fn assign_from_slice(&mut self, items: &[T]) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        self.prepare_assign(items.len())?;
        self.extend_cloned(items);
        Ok(())
    }

    fn prepare_assign(&mut self, count: usize) -> Result<(), DynamicArrayError> {
        if count <= self.capacity() {
            self.clear();
            return Ok(());
        }

        let buf = self.allocate(count)?;
        self.clear();
        // The old, now empty, buffer is freed here.
        self.buf = buf;
        Ok(())
    }

    /// Appends clones of `items`, growing per the doubling policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut array = DynamicArray::from_slice(&[1])?;
    ///     array.append_slice(&[2, 3])?;
    ///
    ///     assert_eq!(array, [1, 2, 3]);
    ///     assert_eq!(array.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn append_slice(&mut self, items: &[T]) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        self.grow_for(items.len())?;
        self.extend_cloned(items);
        Ok(())
    }

    // =========================================================================
    // swap()
    // =========================================================================

    /// Exchanges buffers, lengths and capacities with `other` in O(1).
    ///
    /// No element is moved, cloned or dropped.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    fn check_position(&self, index: usize) -> Result<(), DynamicArrayError> {
        if index > self.len {
            return Err(DynamicArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }

        Ok(())
    }
}
