// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray.

use thiserror::Error;

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// A checked access or a position argument was not a valid index.
    ///
    /// For element access `index` must be `< len`; for insertion positions it
    /// must be `<= len`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },

    /// The global allocator could not provide the requested storage.
    ///
    /// The array is left exactly as it was before the call.
    #[error("allocation of {capacity} slots failed")]
    AllocationFailure {
        /// Requested capacity, in elements.
        capacity: usize,
    },

    /// The requested capacity cannot be represented as an allocation
    /// (more than `isize::MAX` bytes, or the growth computation overflowed).
    #[error("capacity overflow: requested storage exceeds isize::MAX bytes")]
    CapacityOverflow,
}
