//! Allocation policies for pooled array backing stores.
//!
//! A [`StoreFactory`] decides where a [`PooledArray`](crate::PooledArray)'s
//! vector comes from and what happens to it once the last handle is gone.
//! The array itself performs no pooling; swapping the factory is the only
//! way reuse is introduced.

use std::cell::RefCell;
use std::fmt;

use tracing::trace;

use crate::config::FactoryConfig;

/// Source and sink of backing-store vectors.
///
/// `allocate` must return an empty vector. Capacity is unconstrained: a
/// reusing factory is expected to hand back vectors that still carry the
/// capacity of an earlier array.
///
/// `release` receives the vector of a store whose last handle was dropped.
/// The default implementation drops it.
pub trait StoreFactory<T> {
    /// Produce an empty vector for a new backing store.
    fn allocate(&self) -> Vec<T>;

    /// Take back the vector of a backing store that is being destroyed.
    fn release(&self, store: Vec<T>) {
        drop(store);
    }
}

/// The default factory: a fresh heap vector per store, dropped on release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapFactory;

impl<T> StoreFactory<T> for HeapFactory {
    fn allocate(&self) -> Vec<T> {
        Vec::new()
    }
}

/// A factory that recycles released vectors.
///
/// Released vectors are cleared (their elements dropped) and kept with
/// their capacity intact. The next `allocate` pops the most recently
/// released one, so a loop that builds and discards arrays of similar size
/// stops hitting the allocator after the first iteration.
///
/// Interior mutability makes the factory usable through the shared
/// `Rc<dyn StoreFactory<T>>` every store holds. It is single-threaded.
pub struct VecPoolFactory<T> {
    /// Cleared vectors ready for reuse (LIFO).
    spare: RefCell<Vec<Vec<T>>>,
    config: FactoryConfig,
}

impl<T> VecPoolFactory<T> {
    /// Create a factory with the default [`FactoryConfig`].
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    /// Create a factory with the given limits.
    pub fn with_config(config: FactoryConfig) -> Self {
        Self {
            spare: RefCell::new(Vec::new()),
            config,
        }
    }

    /// Number of released vectors currently held for reuse.
    pub fn pooled(&self) -> usize {
        self.spare.borrow().len()
    }

    /// Total element capacity held by pooled vectors.
    pub fn pooled_capacity(&self) -> usize {
        self.spare.borrow().iter().map(Vec::capacity).sum()
    }

    /// The limits this factory was built with.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Drop every pooled vector.
    pub fn purge(&self) {
        let drained = std::mem::take(&mut *self.spare.borrow_mut());
        drop(drained);
    }
}

impl<T> StoreFactory<T> for VecPoolFactory<T> {
    fn allocate(&self) -> Vec<T> {
        match self.spare.borrow_mut().pop() {
            Some(store) => {
                trace!(capacity = store.capacity(), "reusing pooled store");
                store
            }
            None => Vec::new(),
        }
    }

    fn release(&self, mut store: Vec<T>) {
        // Elements are dropped before the spare list is borrowed, so a
        // destructor that releases into another factory never re-enters this one.
        store.clear();
        let mut spare = self.spare.borrow_mut();
        if self.config.retains(store.capacity(), spare.len()) {
            spare.push(store);
        } else {
            drop(spare);
            trace!(capacity = store.capacity(), "dropping released store");
        }
    }
}

impl<T> Default for VecPoolFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for VecPoolFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecPoolFactory")
            .field("pooled", &self.pooled())
            .field("config", &self.config)
            .finish()
    }
}
