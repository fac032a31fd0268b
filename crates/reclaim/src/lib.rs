//! Reclaim: memory-reuse primitives for allocation-sensitive loops.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the reclaim sub-crates. For most users, adding `reclaim` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use reclaim::prelude::*;
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq)]
//! struct Pt { x: i32, y: i32 }
//!
//! impl FromCoords for Pt {
//!     type Coord = i32;
//!     fn from_coords(x: i32, y: i32) -> Self { Pt { x, y } }
//! }
//!
//! // Route every new PooledArray<Pt> on this thread through a reusing factory.
//! let factory = Rc::new(VecPoolFactory::<Pt>::new());
//! install_factory::<Pt>(factory.clone());
//!
//! for round in 0..3 {
//!     let mut path = PooledArray::<Pt>::new();
//!     path.emplace(0, round);
//!     path.emplace(1, round);
//!     assert_eq!(path.len(), 2);
//! } // each path's vector goes back to the factory here
//! assert_eq!(factory.pooled(), 1);
//!
//! // Objects: grab, mutate, recycle, grab again (no reset).
//! let mut nodes = RecyclePool::<Pt>::new();
//! let mut n = nodes.grab();
//! n.x = 42;
//! nodes.recycle(n);
//! assert_eq!(nodes.grab().x, 42);
//!
//! reset_factory::<Pt>();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `reclaim-core` | `FromCoords`, `AccessError` |
//! | [`array`] | `reclaim-array` | `PooledArray`, store factories, default-factory registry |
//! | [`pool`] | `reclaim-pool` | `RecyclePool`, `RecycleConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits and error types (`reclaim-core`).
pub use reclaim_core as types;

/// Pooled array handles and store factories (`reclaim-array`).
///
/// [`array::PooledArray`] is the handle; [`array::StoreFactory`] is the
/// allocation policy; [`array::registry`] holds the per-thread defaults.
pub use reclaim_array as array;

/// Free-list object recycling (`reclaim-pool`).
pub use reclaim_pool as pool;

/// Common imports for typical reclaim usage.
///
/// ```rust
/// use reclaim::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use reclaim_core::{AccessError, FromCoords};

    // Arrays
    pub use reclaim_array::{
        current_factory, install_factory, reset_factory, FactoryConfig, HeapFactory,
        PooledArray, StoreFactory, VecPoolFactory,
    };

    // Pools
    pub use reclaim_pool::{RecycleConfig, RecyclePool};
}
