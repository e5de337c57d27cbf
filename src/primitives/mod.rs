//! Core compute primitives (SparseVector).
//!
//! Document vectors over a text vocabulary are sparse: a catalog item's
//! label text touches few dimensions. The similarity engine is built on
//! this type.

mod sparse;

pub use sparse::SparseVector;
