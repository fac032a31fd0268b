//! Free-list recycling of heap-allocated objects.
//!
//! [`RecyclePool`] keeps boxed objects that callers are done with and
//! hands them out again instead of allocating. It is the object-level
//! counterpart of a pooled array's reusable storage, and is independent
//! of it.
//!
//! Reused objects are returned exactly as they were recycled. The pool
//! never resets them; see [`RecyclePool::grab`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pool;

pub use config::RecycleConfig;
pub use pool::RecyclePool;
