// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Tally {
    created: Cell<usize>,
    clones: Cell<usize>,
    drops: Cell<usize>,
    // Number of clones still allowed before the next one panics.
    fuse: Cell<Option<usize>>,
}

/// Shared tally for every [`Tracked`] value created through it.
///
/// Cloning a `DropCounter` shares the same tally.
///
/// # Example
///
/// ```rust
/// use dynarray_test_utils::DropCounter;
///
/// let counter = DropCounter::new();
/// let a = counter.track(1);
/// let b = a.clone();
///
/// drop(a);
/// drop(b);
///
/// assert_eq!(counter.clones(), 1);
/// assert_eq!(counter.drops(), 2);
/// assert_eq!(counter.live(), 0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct DropCounter {
    tally: Rc<Tally>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracked value reporting to this counter.
    pub fn track(&self, value: i32) -> Tracked {
        self.tally.created.set(self.tally.created.get() + 1);

        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.tally.drops.get()
    }

    /// Number of successful clones so far.
    pub fn clones(&self) -> usize {
        self.tally.clones.get()
    }

    /// Values created (tracked or cloned) and not yet dropped.
    pub fn live(&self) -> usize {
        self.tally.created.get() - self.tally.drops.get()
    }

    /// Makes the clone after the next `after` successful clones panic.
    ///
    /// The fuse fires once and then disarms itself.
    pub fn arm_clone_panic(&self, after: usize) {
        self.tally.fuse.set(Some(after));
    }

    pub fn disarm(&self) {
        self.tally.fuse.set(None);
    }
}

/// An `i32` that reports its clones and drops to a [`DropCounter`].
pub struct Tracked {
    value: i32,
    counter: DropCounter,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let tally = &self.counter.tally;

        match tally.fuse.get() {
            Some(0) => {
                tally.fuse.set(None);
                panic!("Tracked::clone: armed clone panic fired");
            }
            Some(n) => tally.fuse.set(Some(n - 1)),
            None => {}
        }

        tally.clones.set(tally.clones.get() + 1);
        self.counter.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let tally = &self.counter.tally;
        tally.drops.set(tally.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
