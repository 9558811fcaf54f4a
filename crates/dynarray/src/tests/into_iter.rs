// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use dynarray_test_utils::DropCounter;

use crate::DynamicArray;

#[test]
fn test_into_iter_yields_in_order() {
    let array = DynamicArray::from_slice(&[1, 2, 3]).expect("Failed to from_slice(..)");

    let collected: Vec<i32> = array.into_iter().collect();

    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_into_iter_double_ended() {
    let array = DynamicArray::from_slice(&[1, 2, 3, 4]).expect("Failed to from_slice(..)");
    let mut iter = array.into_iter();

    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_drops_remaining() {
    let counter = DropCounter::new();
    let mut array = DynamicArray::new();

    for i in 0..5 {
        array.push(counter.track(i)).expect("Failed to push(..)");
    }

    let mut iter = array.into_iter();
    let first = iter.next().expect("Failed to next()");
    assert_eq!(first.value(), 0);
    drop(iter);

    assert_eq!(counter.drops(), 4);
    drop(first);
    assert_eq!(counter.live(), 0);
}

#[test]
fn test_into_iter_empty() {
    let array: DynamicArray<String> = DynamicArray::new();

    assert_eq!(array.into_iter().count(), 0);
}

#[test]
fn test_into_iter_zero_sized() {
    let mut array = DynamicArray::new();

    for _ in 0..3 {
        array.push(()).expect("Failed to push(())");
    }

    assert_eq!(array.into_iter().count(), 3);
}

#[test]
fn test_into_iter_debug() {
    let array = DynamicArray::from_slice(&[1, 2]).expect("Failed to from_slice(..)");
    let iter = array.into_iter();

    insta::assert_snapshot!(format!("{iter:?}"), @"IntoIter([1, 2])");
}

#[test]
fn test_for_loop_over_references() {
    let mut array = DynamicArray::from_slice(&[1, 2, 3]).expect("Failed to from_slice(..)");

    for value in &mut array {
        *value *= 2;
    }

    let mut sum = 0;
    for value in &array {
        sum += value;
    }

    assert_eq!(sum, 12);
}
