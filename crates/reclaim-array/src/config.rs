//! Store factory configuration parameters.

/// Configuration for a [`VecPoolFactory`](crate::VecPoolFactory).
///
/// Bounds how much released storage the factory keeps around for reuse.
/// All values are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Maximum number of released vectors kept for reuse.
    ///
    /// Releases beyond this count are dropped. Default: 64.
    pub max_pooled_stores: usize,

    /// Largest capacity (in elements) a released vector may have and still
    /// be kept.
    ///
    /// Oversized vectors are dropped so one unusually large array does not
    /// pin its memory for the lifetime of the factory. Default: 1_048_576.
    pub max_retained_capacity: usize,
}

impl FactoryConfig {
    /// Default maximum number of pooled vectors.
    pub const DEFAULT_MAX_POOLED_STORES: usize = 64;

    /// Default retained capacity ceiling, in elements.
    pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 1 << 20;

    /// Create a config that keeps at most `max_pooled_stores` vectors.
    ///
    /// Uses the default value for the capacity ceiling.
    pub fn new(max_pooled_stores: usize) -> Self {
        Self {
            max_pooled_stores,
            max_retained_capacity: Self::DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }

    /// Replace the capacity ceiling.
    pub fn with_max_retained_capacity(mut self, max_retained_capacity: usize) -> Self {
        self.max_retained_capacity = max_retained_capacity;
        self
    }

    /// Whether a released vector of the given capacity may be retained
    /// when `pooled` vectors are already held.
    pub fn retains(&self, capacity: usize, pooled: usize) -> bool {
        pooled < self.max_pooled_stores && capacity <= self.max_retained_capacity
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_POOLED_STORES)
    }
}
