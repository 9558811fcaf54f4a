// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use dynarray_test_utils::DropCounter;

use crate::DynamicArray;

fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn test_eq_ignores_capacity() {
    let a = DynamicArray::from_slice(&[1, 2, 3]).expect("Failed to from_slice(..)");
    let mut b = DynamicArray::with_capacity(16).expect("Failed to with_capacity(16)");
    b.append_slice(&[1, 2, 3]).expect("Failed to append_slice(..)");

    assert_eq!(a, b);
    assert_ne!(a.capacity(), b.capacity());
}

#[test]
fn test_eq_against_slices_and_vec() {
    let array = DynamicArray::from_slice(&[1, 2]).expect("Failed to from_slice(..)");

    assert_eq!(array, [1, 2]);
    assert_eq!(array, vec![1, 2]);
    assert_eq!(array, &[1, 2][..]);
    assert_ne!(array, [1, 2, 3]);
    assert_ne!(array, [2, 1]);
}

#[test]
fn test_ordering_is_lexicographic() {
    let short = DynamicArray::from_slice(&[1, 2]).expect("Failed to from_slice(..)");
    let long = DynamicArray::from_slice(&[1, 2, 0]).expect("Failed to from_slice(..)");
    let bigger = DynamicArray::from_slice(&[1, 3]).expect("Failed to from_slice(..)");
    let empty: DynamicArray<i32> = DynamicArray::new();

    assert!(short < long);
    assert!(long < bigger);
    assert!(empty < short);
    assert_eq!(short.cmp(&short.clone()), std::cmp::Ordering::Equal);
}

#[test]
fn test_partial_ord_with_nan() {
    let a = DynamicArray::from_slice(&[f64::NAN]).expect("Failed to from_slice(..)");
    let b = DynamicArray::from_slice(&[1.0]).expect("Failed to from_slice(..)");

    assert_eq!(a.partial_cmp(&b), None);
    assert_ne!(a, a.clone());
}

#[test]
fn test_hash_matches_slice() {
    let array = DynamicArray::from_slice(&[4u8, 5, 6]).expect("Failed to from_slice(..)");

    assert_eq!(hash_of(&array), hash_of(&[4u8, 5, 6][..]));
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_lists_elements() {
    let array = DynamicArray::from_slice(&["a", "b"]).expect("Failed to from_slice(..)");
    let empty: DynamicArray<u8> = DynamicArray::new();

    insta::assert_snapshot!(format!("{array:?}"), @r#"["a", "b"]"#);
    insta::assert_snapshot!(format!("{empty:?}"), @"[]");
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn test_clone_is_deep() {
    let counter = DropCounter::new();
    let mut original = DynamicArray::new();
    original.push(counter.track(1)).expect("Failed to push(..)");
    original.push(counter.track(2)).expect("Failed to push(..)");

    let copy = original.clone();

    assert_eq!(counter.clones(), 2);
    assert_eq!(copy, original);
    assert_eq!(copy.capacity(), original.capacity());

    drop(original);
    assert_eq!(copy[1].value(), 2);
    drop(copy);
    assert_eq!(counter.live(), 0);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = DynamicArray::from_slice(&[7, 8]).expect("Failed to from_slice(..)");
    let mut target = DynamicArray::from_slice(&[1, 2, 3, 4]).expect("Failed to from_slice(..)");

    target.clone_from(&source);

    assert_eq!(target, [7, 8]);
    assert_eq!(target.capacity(), 2);
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn test_from_vec_and_array() {
    let from_vec = DynamicArray::from(vec![1, 2, 3]);
    let from_array = DynamicArray::from([1, 2, 3]);
    let from_slice = DynamicArray::from(&[1, 2, 3][..]);

    assert_eq!(from_vec, from_array);
    assert_eq!(from_array, from_slice);
    assert_eq!(from_vec.capacity(), 3);
    assert_eq!(from_array.capacity(), 3);
}

#[test]
fn test_from_iterator_grows_per_policy() {
    let array: DynamicArray<u32> = (0..5).collect();

    assert_eq!(array, [0, 1, 2, 3, 4]);
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_from_iterator_without_size_hint() {
    let array: DynamicArray<u32> = (0..10).filter(|x| x % 3 == 0).collect();

    assert_eq!(array, [0, 3, 6, 9]);
}

#[test]
fn test_extend_owned_and_borrowed() {
    let mut array = DynamicArray::from_slice(&[1]).expect("Failed to from_slice(..)");

    array.extend(vec![2, 3]);
    array.extend(&[4, 5]);

    assert_eq!(array, [1, 2, 3, 4, 5]);
}

#[test]
fn test_deref_exposes_slice_methods() {
    let mut array = DynamicArray::from_slice(&[3, 1, 2]).expect("Failed to from_slice(..)");

    array.sort();

    assert_eq!(array.first(), Some(&1));
    assert!(array.contains(&3));
    assert_eq!(array.as_ref(), &[1, 2, 3]);

    array.as_mut()[0] = 10;
    assert_eq!(array[0], 10);
}
