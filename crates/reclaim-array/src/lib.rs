//! Growable array handles backed by pluggable, reusable storage.
//!
//! A [`PooledArray`] is a thin handle over a reference-counted backing
//! store. Where that store comes from is decided by a [`StoreFactory`]:
//! the default [`HeapFactory`] allocates a fresh vector every time, while
//! a [`VecPoolFactory`] hands back vectors released by earlier arrays so
//! hot loops stop paying for allocation.
//!
//! # Architecture
//!
//! ```text
//! PooledArray<T> (handle)
//! └── Rc<BackingStore<T>> (shared by every handle from share())
//!     ├── RefCell<Vec<T>> (the elements)
//!     └── Rc<dyn StoreFactory<T>> (where the Vec came from, and goes back to)
//!
//! registry (thread-local)
//! └── TypeId → default Rc<dyn StoreFactory<T>> used by PooledArray::new()
//! ```
//!
//! # Copy vs. share
//!
//! - `clone()` deep-copies into a new store: the two arrays are independent.
//! - `share()` copies the handle: both arrays alias one store and see each
//!   other's mutations. The store is released when the last handle drops.
//!
//! # Unchecked access
//!
//! The safe accessors panic on a violated precondition. The `unsafe`
//! `*_unchecked` accessors in this crate skip the bounds check entirely;
//! they are the only `unsafe` code and live in a single module.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod factory;
pub mod iter;
mod raw;
pub mod registry;
pub mod store;

// Public re-exports for the primary API surface.
pub use array::PooledArray;
pub use config::FactoryConfig;
pub use factory::{HeapFactory, StoreFactory, VecPoolFactory};
pub use iter::{Iter, IterMut};
pub use registry::{current_factory, install_factory, reset_factory};
pub use store::{BackingStore, SharedStore};
