// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Moves every element for which `pred` returns `false` to the front of
/// `slice`, preserving their relative order, and returns how many there are.
///
/// The returned value is the new logical end: `slice[..end]` holds the kept
/// elements and `slice[end..]` holds the removed ones in unspecified order.
/// Nothing is dropped; truncating at `end` is up to the caller (see
/// [`DynamicArray::erase_if`](crate::DynamicArray::erase_if)).
///
/// # Example
///
/// ```rust
/// use dynarray::remove_if;
///
/// let mut data = [1, 2, 3, 4, 5];
/// let end = remove_if(&mut data, |x| x % 2 == 0);
///
/// assert_eq!(end, 3);
/// assert_eq!(&data[..end], &[1, 3, 5]);
/// ```
pub fn remove_if<T, F>(slice: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut end = 0;

    for i in 0..slice.len() {
        if !pred(&slice[i]) {
            slice.swap(end, i);
            end += 1;
        }
    }

    end
}
