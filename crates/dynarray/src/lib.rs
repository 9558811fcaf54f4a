// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Contiguous growable array with manual allocation and fallible growth.
//!
//! `DynamicArray<T>` owns a heap buffer of `capacity()` slots of which the
//! first `len()` hold live elements. Allocation is kept separate from
//! construction: growing reserves raw, uninitialized slots, and elements are
//! written into them one by one.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: insertions that overflow the buffer grow it to the
//!   smallest power-of-two multiple of the current capacity (starting at 1)
//!   that fits, giving amortized O(1) pushes.
//! - **Fallible allocation**: every growing operation returns
//!   [`DynamicArrayError`] instead of aborting, and leaves the array exactly
//!   as it was when allocation fails.
//! - **Two-tier access**: [`DynamicArray::at`] is bounds checked;
//!   [`DynamicArray::get_unchecked`] is an `unsafe` fast path whose
//!   precondition (`index < len()`) is the caller's to uphold.
//! - **Panic safety**: a panicking `Clone`, `Default` or constructor closure
//!   leaves the array valid, drops nothing twice and leaks nothing.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarray::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::new();
//!
//!     for i in 0u32..5 {
//!         array.push(i)?;
//!     }
//!
//!     assert_eq!(array.len(), 5);
//!     assert_eq!(array.capacity(), 8);
//!     assert_eq!(array.at(4), Ok(&4));
//!     assert!(array.at(5).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Insertion and Removal
//!
//! ```rust
//! use dynarray::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut array = DynamicArray::from_slice(&[1, 4])?;
//!
//!     array.insert_slice_at(1, &[2, 3])?;
//!     assert_eq!(array, [1, 2, 3, 4]);
//!
//!     array.erase_range(0..2)?;
//!     assert_eq!(array, [3, 4]);
//!
//!     assert_eq!(array.pop(), Some(4));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! dynarray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`DynamicArrayBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use dynarray::{DynamicArray, DynamicArrayBehaviour};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut array = DynamicArray::<u8>::new();
//!         array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
//!
//!         // Test that your code handles the error correctly
//!         assert!(array.reserve(10).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod dynamic_array;
mod error;
mod gap;
mod into_iter;
mod modifiers;
mod raw_buffer;
mod remove_if;
mod traits;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;
pub use into_iter::IntoIter;
pub use remove_if::remove_if;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::DynamicArrayBehaviour;
