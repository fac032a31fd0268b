//! Unchecked element access for hot loops.
//!
//! This is the only module in the crate that contains `unsafe` code. Each
//! function skips the bounds or emptiness check its safe counterpart
//! performs; the `RefCell` borrow flag is still honoured.

#![allow(unsafe_code)]

use std::cell::{Ref, RefMut};

use crate::array::PooledArray;

impl<T> PooledArray<T> {
    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn at_unchecked(&self, index: usize) -> Ref<'_, T> {
        // SAFETY: the caller guarantees `index < len()`, and the shared
        // borrow held by the guard keeps the length fixed.
        Ref::map(self.store.borrow(), |items| unsafe { items.get_unchecked(index) })
    }

    /// Mutable element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> RefMut<'_, T> {
        // SAFETY: as for `at_unchecked`; the exclusive borrow keeps the
        // length fixed while the guard is alive.
        RefMut::map(self.store.borrow_mut(), |items| unsafe {
            items.get_unchecked_mut(index)
        })
    }

    /// Last element without an emptiness check.
    ///
    /// # Safety
    ///
    /// The array must not be empty.
    pub unsafe fn back_unchecked(&self) -> Ref<'_, T> {
        // SAFETY: the caller guarantees `len() > 0`, so `len() - 1` does not
        // wrap and is in bounds.
        Ref::map(self.store.borrow(), |items| unsafe {
            items.get_unchecked(items.len() - 1)
        })
    }
}
