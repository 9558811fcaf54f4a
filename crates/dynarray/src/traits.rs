// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Standard trait impls for `DynamicArray`.
//!
//! Comparisons follow slice semantics: equal iff same length and equal
//! element by element, ordered lexicographically.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};
use core::slice;

use crate::dynamic_array::DynamicArray;
use crate::raw_buffer::fail_infallible;

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Aborts through `handle_alloc_error` if the copy cannot be allocated; use
/// [`DynamicArray::try_clone`] to handle that case.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| fail_infallible::<T>(err))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            fail_infallible::<T>(err)
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// =============================================================================
// Conversion
// =============================================================================

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut array =
            Self::with_capacity(vec.len()).unwrap_or_else(|err| fail_infallible::<T>(err));
        // SAFETY: capacity is exactly vec.len().
        unsafe { array.extend_exact(vec) };
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N).unwrap_or_else(|err| fail_infallible::<T>(err));
        // SAFETY: capacity is exactly N.
        unsafe { array.extend_exact(items) };
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items).unwrap_or_else(|err| fail_infallible::<T>(err))
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        <Self as Extend<T>>::extend(&mut array, iter);
        array
    }
}

/// Grows per the doubling policy; aborts like `Vec` if growth fails.
impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        if let Err(err) = self.grow_for(lower) {
            fail_infallible::<T>(err)
        }

        for value in iter {
            if let Err(err) = self.push(value) {
                fail_infallible::<T>(err)
            }
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> DynamicArray<T> {
    /// Moves every item of `items` into free slots.
    ///
    /// # Safety
    ///
    /// The free capacity must hold every item `items` yields.
    unsafe fn extend_exact<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for value in items {
            // SAFETY: guaranteed by the caller.
            unsafe { self.push_unchecked(value) };
        }
    }
}
