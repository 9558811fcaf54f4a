// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::Rev;
use core::{mem, ptr, slice};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::DynamicArrayBehaviour;
use crate::error::DynamicArrayError;
use crate::raw_buffer::{self, RawBuffer};

/// A contiguous growable array with separately managed storage.
///
/// The buffer holds `capacity()` slots of which the first `len()` are live.
/// Slots past `len()` are allocated but uninitialized: growing never
/// default-constructs anything, and live elements are moved bitwise (never
/// cloned) when the buffer is replaced.
///
/// Every operation that may allocate is fallible and returns
/// [`DynamicArrayError`] instead of aborting. When it does, the array is
/// exactly as it was before the call.
///
/// # Example
///
/// ```rust
/// use dynarray::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut array = DynamicArray::new();
///     array.push(10)?;
///     array.push(20)?;
///     array.push(30)?;
///
///     array.erase_at(1)?;
///     assert_eq!(array, [10, 30]);
///
///     array.reserve(100)?;
///     assert_eq!(array.capacity(), 100);
///
///     array.shrink_to_fit()?;
///     assert_eq!(array.capacity(), 2);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    pub(crate) behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Does not allocate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self::from_buffer(RawBuffer::new())
    }

    pub(crate) const fn from_buffer(buf: RawBuffer<T>) -> Self {
        Self {
            buf,
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::None,
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::AllocationFailure`] or
    /// [`DynamicArrayError::CapacityOverflow`] if the storage cannot be
    /// allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynamicArrayError> {
        let buf = RawBuffer::try_allocate(capacity)?;
        Ok(Self::from_buffer(buf))
    }

    /// Creates an array of `count` clones of `value`, with capacity exactly
    /// `count`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let array = DynamicArray::filled(3, 7u32)?;
    ///     assert_eq!(array, [7, 7, 7]);
    ///     assert_eq!(array.capacity(), 3);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn filled(count: usize, value: T) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(count)?;
        array.extend_with(count, value);
        Ok(array)
    }

    /// Creates an array of `count` default values, with capacity exactly
    /// `count`.
    pub fn with_default(count: usize) -> Result<Self, DynamicArrayError>
    where
        T: Default,
    {
        let mut array = Self::with_capacity(count)?;
        array.extend_from_fn(count, T::default);
        Ok(array)
    }

    /// Creates an array holding clones of `items`, with capacity exactly
    /// `items.len()`.
    pub fn from_slice(items: &[T]) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(items.len())?;
        array.extend_cloned(items);
        Ok(array)
    }

    /// Deep-copies the array into a buffer of the same capacity.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::AllocationFailure`] if the copy's buffer
    /// cannot be allocated. Nothing is constructed in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let original = DynamicArray::from_slice(&[1, 2, 3])?;
    ///     let mut copy = original.try_clone()?;
    ///
    ///     copy[0] = 42;
    ///     assert_eq!(original, [1, 2, 3]);
    ///     assert_eq!(copy, [42, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_clone(&self) -> Result<Self, DynamicArrayError>
    where
        T: Clone,
    {
        let buf = self.allocate(self.capacity())?;
        let mut copy = Self::from_buffer(buf);
        copy.extend_cloned(self.as_slice());
        Ok(copy)
    }

    /// Replaces the contents with a deep copy of `other` (copy assignment).
    ///
    /// The copy is built before anything is dropped, so on error `self` is
    /// unchanged.
    pub fn try_clone_from(&mut self, other: &Self) -> Result<(), DynamicArrayError>
    where
        T: Clone,
    {
        let buf = self.allocate(other.capacity())?;
        let mut copy = Self::from_buffer(buf);
        copy.extend_cloned(other.as_slice());

        // Old elements and buffer are dropped with `copy`.
        self.swap(&mut copy);
        Ok(())
    }

    /// Moves the contents out, leaving `self` empty and unallocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut source = DynamicArray::from_slice(&[1, 2])?;
    ///     let moved = source.take();
    ///
    ///     assert_eq!(moved, [1, 2]);
    ///     assert_eq!(source.len(), 0);
    ///     assert_eq!(source.capacity(), 0);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn take(&mut self) -> Self {
        let buf = mem::replace(&mut self.buf, RawBuffer::new());
        let len = mem::replace(&mut self.len, 0);

        let mut taken = Self::from_buffer(buf);
        taken.len = len;
        taken
    }

    // =========================================================================
    // Element access
    // =========================================================================

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// This is the unchecked fast path; [`at`](Self::at) is the checked one.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Anything else is undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "DynamicArray::get_unchecked: index out of range");
        // SAFETY: caller guarantees index < len, so the slot is live.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "DynamicArray::get_unchecked_mut: index out of range");
        // SAFETY: caller guarantees index < len, so the slot is live.
        unsafe { &mut *self.buf.as_ptr().add(index) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dynarray::{DynamicArray, DynamicArrayError};
    ///
    /// let array = DynamicArray::from_slice(&[1, 2]).unwrap();
    /// assert_eq!(array.at(1), Ok(&2));
    /// assert_eq!(array.at(2), Err(DynamicArrayError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, DynamicArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, DynamicArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynamicArrayError::OutOfRange { index, len })
    }

    /// First element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// First element without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The array must not be empty.
    pub unsafe fn front_unchecked(&self) -> &T {
        // SAFETY: caller guarantees len > 0.
        unsafe { self.get_unchecked(0) }
    }

    /// Last element without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The array must not be empty.
    pub unsafe fn back_unchecked(&self) -> &T {
        // SAFETY: caller guarantees len > 0, so len - 1 does not wrap.
        unsafe { self.get_unchecked(self.len - 1) }
    }

    /// Base address of the live prefix.
    ///
    /// Valid until the next operation that reallocates.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable base address of the live prefix.
    ///
    /// Valid until the next operation that reallocates.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Returns the live prefix as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized and the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is initialized and uniquely borrowed through self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterates front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates front to back, mutably.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterates back to front.
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Iterates back to front, mutably.
    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest number of elements an array of `T` could ever hold.
    pub const fn max_size(&self) -> usize {
        raw_buffer::max_slots::<T>()
    }

    /// Ensures `capacity() >= capacity`, allocating exactly `capacity` slots
    /// if it must grow. Never shrinks.
    ///
    /// # Errors
    ///
    /// On allocation failure the array is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), DynamicArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.reallocate(capacity)
    }

    /// Reallocates so that `capacity() == len()`. Frees the buffer entirely
    /// when empty.
    ///
    /// # Errors
    ///
    /// On allocation failure the array is unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<(), DynamicArrayError> {
        if self.len == self.capacity() {
            return Ok(());
        }

        self.reallocate(self.len)
    }

    // =========================================================================
    // Test behaviour
    // =========================================================================

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows
    /// injecting allocation failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn allocate(&self, capacity: usize) -> Result<RawBuffer<T>, DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if capacity > 0 && self.behaviour.fails_allocation() {
            return Err(DynamicArrayError::AllocationFailure { capacity });
        }

        RawBuffer::try_allocate(capacity)
    }

    /// Moves the live prefix into a fresh buffer of exactly `capacity` slots.
    fn reallocate(&mut self, capacity: usize) -> Result<(), DynamicArrayError> {
        debug_assert!(capacity >= self.len);

        let buf = self.allocate(capacity)?;

        // SAFETY (PRECONDITIONS ARE MET): both buffers hold at least len slots
        // and are distinct allocations. The old slots become logically
        // uninitialized; the old buffer is freed without dropping anything.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_ptr(), self.len) };
        self.buf = buf;

        Ok(())
    }

    /// Grows per the doubling policy so that `additional` more elements fit.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<(), DynamicArrayError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(DynamicArrayError::CapacityOverflow)?;

        if required <= self.capacity() {
            return Ok(());
        }

        let capacity = raw_buffer::grown_capacity(self.capacity(), required)?;
        self.reallocate(capacity)
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Safety
    ///
    /// `len() < capacity()`.
    #[inline(always)]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: caller guarantees slot `len` is allocated and free.
        unsafe { ptr::write(self.buf.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    // The helpers below bump `len` after every write, so a panicking `Clone`
    // or constructor leaves exactly the written elements live.

    pub(crate) fn extend_cloned(&mut self, items: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.capacity() - self.len >= items.len());

        for item in items {
            let value = item.clone();
            // SAFETY: capacity for all of `items` was reserved by the caller.
            unsafe { self.push_unchecked(value) };
        }
    }

    pub(crate) fn extend_with(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        debug_assert!(self.capacity() - self.len >= count);

        if count == 0 {
            return;
        }

        for _ in 1..count {
            let clone = value.clone();
            // SAFETY: capacity for `count` elements was reserved by the caller.
            unsafe { self.push_unchecked(clone) };
        }

        // SAFETY: as above; the original value fills the last slot.
        unsafe { self.push_unchecked(value) };
    }

    pub(crate) fn extend_from_fn<F>(&mut self, count: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        debug_assert!(self.capacity() - self.len >= count);

        for _ in 0..count {
            let value = f();
            // SAFETY: capacity for `count` elements was reserved by the caller.
            unsafe { self.push_unchecked(value) };
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: drops exactly the live prefix; `buf` frees the memory after.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}
