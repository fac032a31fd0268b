//! Core traits and error types for the reclaim workspace.
//!
//! This is the leaf crate with zero internal dependencies. It holds the
//! pieces shared by the pooled array and the recycle pool: the element
//! construction trait used by in-place emplacement, and the error type
//! returned by the checked accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::AccessError;
pub use traits::FromCoords;
