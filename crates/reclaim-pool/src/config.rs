//! Recycle pool configuration parameters.

/// Configuration for a [`RecyclePool`](crate::RecyclePool).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecycleConfig {
    /// Free-list slots reserved up front.
    ///
    /// Default: 0. Reserving avoids growing the free list itself during
    /// the first burst of `recycle` calls.
    pub initial_capacity: usize,

    /// Maximum number of objects kept on the free list.
    ///
    /// `None` (the default) keeps every recycled object. With a limit,
    /// objects recycled into a full pool are dropped immediately.
    pub max_retained: Option<usize>,
}

impl RecycleConfig {
    /// Default free-list reservation.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config with an up-front free-list reservation and no limit.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_retained: None,
        }
    }

    /// Cap the free list at `max_retained` objects.
    pub fn with_max_retained(mut self, max_retained: usize) -> Self {
        self.max_retained = Some(max_retained);
        self
    }

    /// Whether one more object may join a free list of length `len`.
    pub fn admits(&self, len: usize) -> bool {
        self.max_retained.is_none_or(|max| len < max)
    }
}
