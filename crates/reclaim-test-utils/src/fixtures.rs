//! Reusable element fixtures.
//!
//! - [`Point2D`] — integer point constructible from a coordinate pair.
//! - [`Node`] — default-constructible object with a mutable payload.
//! - [`DropTracker`] — bumps a shared [`DropCounter`] when dropped.

use std::cell::Cell;
use std::rc::Rc;

use reclaim_core::FromCoords;

/// Integer point, the typical pooled-array element in geometry loops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i64,
    pub y: i64,
}

impl Point2D {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl FromCoords for Point2D {
    type Coord = i64;

    fn from_coords(x: i64, y: i64) -> Self {
        Self::new(x, y)
    }
}

/// A linked-structure node as a recycle pool would hand it out.
///
/// `Default` yields the zero state, so a freshly allocated node is
/// distinguishable from a reused one whose fields were changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub value: i32,
    pub next: Option<usize>,
    pub prev: Option<usize>,
}

impl Node {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// Shared count of dropped [`DropTracker`]s.
#[derive(Clone, Debug, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a tracker tagged with `id` that reports to this counter.
    pub fn tracker(&self, id: usize) -> DropTracker {
        DropTracker {
            id,
            counter: self.clone(),
        }
    }

    /// Number of trackers dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// Increments its [`DropCounter`] exactly once, on drop.
#[derive(Debug)]
pub struct DropTracker {
    pub id: usize,
    counter: DropCounter,
}

impl Drop for DropTracker {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
