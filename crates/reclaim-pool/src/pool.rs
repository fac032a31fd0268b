//! Exclusive-ownership free list.
//!
//! [`RecyclePool`] owns a LIFO stack of boxed objects. `grab` pops one
//! (or allocates when the stack is empty) and `recycle` pushes one back.
//! Objects on loan are invisible to the pool: it keeps no registry of
//! outstanding boxes, so dropping a grabbed box instead of recycling it
//! is allowed and simply forfeits the reuse.

use std::fmt;

use tracing::trace;

use crate::config::RecycleConfig;

/// A free list of heap-allocated `T` for reuse in hot loops.
///
/// Every object on the free list is owned by the pool and dropped with
/// it. The pool is not `Clone`: two pools sharing or duplicating one free
/// list would break single ownership of the pooled objects.
///
/// # Example
///
/// ```rust
/// use reclaim_pool::RecyclePool;
///
/// #[derive(Default)]
/// struct Edge { weight: i32 }
///
/// let mut pool = RecyclePool::<Edge>::new();
/// let mut edge = pool.grab();
/// edge.weight = 42;
/// pool.recycle(edge);
///
/// // The same box comes back, with its fields untouched.
/// assert_eq!(pool.grab().weight, 42);
/// ```
pub struct RecyclePool<T> {
    /// Unused objects, most recently recycled last.
    free_list: Vec<Box<T>>,
    config: RecycleConfig,
}

impl<T> RecyclePool<T> {
    /// Create an empty pool with no retention limit.
    pub fn new() -> Self {
        Self::with_config(RecycleConfig::default())
    }

    /// Create an empty pool with the given configuration.
    pub fn with_config(config: RecycleConfig) -> Self {
        Self {
            free_list: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Take an object: the most recently recycled one, or a fresh default.
    ///
    /// A reused object is returned with whatever field values it had when
    /// it was recycled. Callers that need a clean object must reinitialise
    /// it themselves.
    pub fn grab(&mut self) -> Box<T>
    where
        T: Default,
    {
        self.grab_with(T::default)
    }

    /// Take an object: the most recently recycled one, or `make()` boxed.
    ///
    /// Reused objects are not reset, exactly as for [`grab`](Self::grab).
    pub fn grab_with<F>(&mut self, make: F) -> Box<T>
    where
        F: FnOnce() -> T,
    {
        self.free_list.pop().unwrap_or_else(|| Box::new(make()))
    }

    /// Hand `item` back to the pool for reuse.
    ///
    /// No check is made that `item` came from this pool. If the
    /// configured retention limit is reached, `item` is dropped instead.
    pub fn recycle(&mut self, item: Box<T>) {
        if self.config.admits(self.free_list.len()) {
            self.free_list.push(item);
        } else {
            trace!(
                retained = self.free_list.len(),
                "recycle pool full, dropping object"
            );
            drop(item);
        }
    }

    /// Allocate `count` default objects onto the free list ahead of use.
    ///
    /// Stops early once the retention limit is reached.
    pub fn prefill(&mut self, count: usize)
    where
        T: Default,
    {
        for _ in 0..count {
            if !self.config.admits(self.free_list.len()) {
                break;
            }
            self.free_list.push(Box::default());
        }
    }

    /// Number of objects waiting on the free list.
    pub fn available(&self) -> usize {
        self.free_list.len()
    }

    /// Whether the free list is empty (the next `grab` will allocate).
    pub fn is_empty(&self) -> bool {
        self.free_list.is_empty()
    }

    /// Drop every object on the free list now.
    pub fn clear(&mut self) {
        self.free_list.clear();
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &RecycleConfig {
        &self.config
    }
}

impl<T> Default for RecyclePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RecyclePool<T> {
    fn drop(&mut self) {
        if !self.free_list.is_empty() {
            trace!(released = self.free_list.len(), "dropping recycle pool");
        }
    }
}

impl<T> fmt::Debug for RecyclePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclePool")
            .field("available", &self.free_list.len())
            .field("config", &self.config)
            .finish()
    }
}
