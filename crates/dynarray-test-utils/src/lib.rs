// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynarray.
//!
//! Element types that record every construction, clone and drop so tests can
//! assert that a container drops each value exactly once and leaks nothing,
//! including when a `Clone` impl panics halfway through an operation.
//!
//! ## License
//!
//! GPL-3.0-only

mod tracked;

pub use tracked::{DropCounter, Tracked};
