//! Test fixtures for reclaim development.
//!
//! Provides small element types that exercise the array and pool
//! contracts: a coordinate point for emplacement, a node with mutable
//! state for no-reset reuse, and a drop tracker for counting destructions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{DropCounter, DropTracker, Node, Point2D};
