// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};

fn failing(items: &[i32]) -> DynamicArray<i32> {
    let mut array = DynamicArray::from_slice(items).expect("Failed to from_slice(..)");
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    array
}

fn assert_untouched(array: &DynamicArray<i32>, items: &[i32], capacity: usize, ptr: *const i32) {
    assert_eq!(array.as_slice(), items);
    assert_eq!(array.capacity(), capacity);
    assert_eq!(array.as_ptr(), ptr);
}

// =============================================================================
// DynamicArrayBehaviour
// =============================================================================

#[test]
fn test_behaviour_default_is_none() {
    assert_eq!(DynamicArrayBehaviour::default(), DynamicArrayBehaviour::None);
    assert!(!DynamicArrayBehaviour::None.fails_allocation());
    assert!(DynamicArrayBehaviour::FailAtAllocation.fails_allocation());
}

#[test]
fn test_reset_to_none_allocates_again() {
    let mut array = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert_eq!(
        array.push(1u8),
        Err(DynamicArrayError::AllocationFailure { capacity: 1 })
    );

    array.change_behaviour(DynamicArrayBehaviour::None);
    array.push(1u8).expect("Failed to push(1)");

    assert_eq!(array, [1]);
}

// =============================================================================
// Growth under FailAtAllocation
// =============================================================================

#[test]
fn test_reserve_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();

    assert_eq!(
        array.reserve(10),
        Err(DynamicArrayError::AllocationFailure { capacity: 10 })
    );
    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_reserve_within_capacity_does_not_allocate() {
    let mut array = failing(&[1, 2]);

    assert!(array.reserve(2).is_ok());
}

#[test]
fn test_shrink_to_fit_fails_unchanged() {
    let mut array = DynamicArray::with_capacity(8).expect("Failed to with_capacity(8)");
    array.push(1).expect("Failed to push(1)");
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    let ptr = array.as_ptr();

    assert_eq!(
        array.shrink_to_fit(),
        Err(DynamicArrayError::AllocationFailure { capacity: 1 })
    );
    assert_untouched(&array, &[1], 8, ptr);
}

#[test]
fn test_shrink_to_fit_on_empty_needs_no_allocation() {
    let mut array: DynamicArray<i32> =
        DynamicArray::with_capacity(8).expect("Failed to with_capacity(8)");
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    array.shrink_to_fit().expect("Failed to shrink_to_fit()");

    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_push_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();

    assert_eq!(
        array.push(3),
        Err(DynamicArrayError::AllocationFailure { capacity: 4 })
    );
    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_push_within_capacity_succeeds() {
    let mut array = DynamicArray::with_capacity(4).expect("Failed to with_capacity(4)");
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    for i in 0..4 {
        array.push(i).expect("Failed to push(..)");
    }

    assert!(array.push(4).is_err());
    assert_eq!(array, [0, 1, 2, 3]);
}

#[test]
fn test_push_with_does_not_construct_on_failure() {
    let mut array = failing(&[1]);
    let mut called = false;

    let result = array.push_with(|| {
        called = true;
        2
    });

    assert!(result.is_err());
    assert!(!called);
}

#[test]
fn test_insert_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();

    assert!(array.insert_at(0, 0).is_err());
    assert!(array.insert_n_at(1, 3, &7).is_err());
    assert!(array.insert_slice_at(2, &[5, 6]).is_err());

    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_resize_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();

    assert!(array.resize(5, 0).is_err());
    assert!(array.resize_default(5).is_err());
    assert!(array.resize_with(5, || 0).is_err());

    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_append_slice_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();

    assert_eq!(
        array.append_slice(&[3]),
        Err(DynamicArrayError::AllocationFailure { capacity: 4 })
    );
    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_assign_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();

    assert_eq!(
        array.assign(3, 9),
        Err(DynamicArrayError::AllocationFailure { capacity: 3 })
    );
    assert!(array.assign_from_slice(&[4, 5, 6]).is_err());

    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_assign_within_capacity_succeeds() {
    let mut array = failing(&[1, 2]);

    array.assign(2, 9).expect("Failed to assign(..)");

    assert_eq!(array, [9, 9]);
}

// =============================================================================
// Copies under FailAtAllocation
// =============================================================================

#[test]
fn test_try_clone_fails() {
    let array = failing(&[1, 2, 3]);

    assert_eq!(
        array.try_clone().map(|copy| copy.len()),
        Err(DynamicArrayError::AllocationFailure { capacity: 3 })
    );
}

#[test]
fn test_try_clone_from_fails_unchanged() {
    let mut array = failing(&[1, 2]);
    let ptr = array.as_ptr();
    let source = DynamicArray::from_slice(&[7, 8, 9]).expect("Failed to from_slice(..)");

    assert!(array.try_clone_from(&source).is_err());

    assert_untouched(&array, &[1, 2], 2, ptr);
}

#[test]
fn test_behaviour_does_not_follow_swap() {
    let mut failing_array = failing(&[1]);
    let mut normal = DynamicArray::from_slice(&[2]).expect("Failed to from_slice(..)");

    failing_array.swap(&mut normal);

    assert!(failing_array.push(3).is_err());
    normal.push(4).expect("Failed to push(4)");
}
