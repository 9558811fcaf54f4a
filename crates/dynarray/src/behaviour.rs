// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting allocation
/// failures without exhausting the heap.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use dynarray::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), DynamicArrayError> {
///         let mut array = DynamicArray::new();
///
///         // Inject failure
///         array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
///
///         // This will fail even though the heap has plenty of room
///         assert!(array.push(1u8).is_err());
///
///         // Reset to normal behaviour
///         array.change_behaviour(DynamicArrayBehaviour::None);
///
///         // Now it works
///         array.push(1u8)?;
///         Ok(())
///     }
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every allocation requested by the array fails with `AllocationFailure`.
    FailAtAllocation,
}

impl DynamicArrayBehaviour {
    pub(crate) fn fails_allocation(&self) -> bool {
        matches!(self, Self::FailAtAllocation)
    }
}
