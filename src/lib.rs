//! Sugerir: content-based recommendation engine in pure Rust.
//!
//! Sugerir builds an in-memory item-to-item recommendation index from a
//! catalog of titled, genre-tagged items: TF-IDF over the genre text,
//! cosine similarity between every pair of items, and deterministic
//! top-k ranking by title. Building is a pure function of the catalog,
//! so the same input reproduces the same index bit for bit.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::prelude::*;
//!
//! let index = ContentIndex::build(vec![
//!     Item::new("Alpha", "action adventure"),
//!     Item::new("Beta", "action comedy"),
//!     Item::new("Gamma", "romance drama"),
//! ]);
//!
//! let recs = index.recommend("Alpha", 2);
//! assert_eq!(recs[0].title, "Beta");
//! assert!(recs[0].score > 0.0);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog items (title, genre text, display attributes)
//! - [`error`]: Crate error type and `Result` alias
//! - [`prelude`]: Convenience re-exports for common usage
//! - [`primitives`]: Sparse vectors backing the TF-IDF pipeline
//! - [`recommend`]: Index build, top-k queries, recommender facade
//! - [`text`]: Tokenization, stop words, TF-IDF, cosine similarity

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use catalog::Item;
pub use error::{Result, SugerirError};
pub use recommend::{ContentIndex, Recommendation, Recommender};
