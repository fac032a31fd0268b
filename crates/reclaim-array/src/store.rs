//! Reference-counted backing stores.
//!
//! A [`BackingStore`] is the storage a [`PooledArray`](crate::PooledArray)
//! handle points at. It remembers the factory that produced its vector and
//! hands the vector back to it when the last handle is dropped.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::factory::StoreFactory;

/// Elements of one pooled array plus the factory they return to.
pub struct BackingStore<T> {
    items: RefCell<Vec<T>>,
    origin: Rc<dyn StoreFactory<T>>,
}

/// Shared handle to a backing store. Every `PooledArray` holds one.
pub type SharedStore<T> = Rc<BackingStore<T>>;

impl<T> BackingStore<T> {
    /// Draw a vector from `factory` and wrap it in a new shared store.
    pub fn allocate(factory: &Rc<dyn StoreFactory<T>>) -> SharedStore<T> {
        let items = factory.allocate();
        debug_assert!(items.is_empty(), "store factory returned a non-empty vector");
        Rc::new(Self {
            items: RefCell::new(items),
            origin: Rc::clone(factory),
        })
    }

    /// Shared view of the elements.
    ///
    /// # Panics
    ///
    /// Panics if a mutable view is alive through any handle.
    pub fn borrow(&self) -> Ref<'_, Vec<T>> {
        self.items.borrow()
    }

    /// Mutable view of the elements.
    ///
    /// # Panics
    ///
    /// Panics if any other view is alive through any handle.
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<T>> {
        self.items.borrow_mut()
    }

    /// The factory this store was drawn from.
    pub fn factory(&self) -> &Rc<dyn StoreFactory<T>> {
        &self.origin
    }
}

impl<T> Drop for BackingStore<T> {
    fn drop(&mut self) {
        let items = std::mem::take(self.items.get_mut());
        self.origin.release(items);
    }
}

impl<T: fmt::Debug> fmt::Debug for BackingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
