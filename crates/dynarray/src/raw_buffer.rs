// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw, uninitialized storage for `DynamicArray`.
//!
//! `RawBuffer<T>` owns an allocation of `capacity` slots and nothing else: it
//! never constructs, reads or drops a `T`. Dropping it only frees the memory.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::DynamicArrayError;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    // We own values of type T and may drop them through the array.
    _marker: PhantomData<T>,
}

// Safety: RawBuffer uniquely owns its allocation.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates exactly `capacity` uninitialized slots.
    ///
    /// Zero-sized types never touch the allocator; their capacity is only
    /// bookkeeping.
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, DynamicArrayError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout =
            Layout::array::<T>(capacity).map_err(|_| DynamicArrayError::CapacityOverflow)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>())
            .ok_or(DynamicArrayError::AllocationFailure { capacity })?;

        Ok(Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        // The layout was valid when the buffer was allocated.
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY (PRECONDITIONS ARE MET): ptr was returned by alloc(layout).
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

/// Capacity chosen when an insertion needs room for `required` elements.
///
/// Doubles from `max(current, 1)` until the result holds `required`, so a run
/// of single pushes sees capacities 1, 2, 4, 8, ...
pub(crate) fn grown_capacity(current: usize, required: usize) -> Result<usize, DynamicArrayError> {
    let mut capacity = current.max(1);

    while capacity < required {
        capacity = capacity
            .checked_mul(2)
            .ok_or(DynamicArrayError::CapacityOverflow)?;
    }

    Ok(capacity)
}

/// Largest element count a single allocation of `T` can describe.
pub(crate) const fn max_slots<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

/// Turns a failed growth into the same outcome as the standard collections:
/// abort through `handle_alloc_error`, or panic on capacity overflow.
///
/// Used by the infallible trait impls (`Clone`, `Extend`, `FromIterator`).
#[cold]
#[inline(never)]
pub(crate) fn fail_infallible<T>(err: DynamicArrayError) -> ! {
    match err {
        DynamicArrayError::AllocationFailure { capacity } => {
            let layout = Layout::array::<T>(capacity).unwrap_or(Layout::new::<T>());
            handle_alloc_error(layout)
        }
        err => panic!("{err}"),
    }
}
