//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sugerir::prelude::*;
//! ```

pub use crate::catalog::Item;
pub use crate::error::{Result, SugerirError};
pub use crate::recommend::{ContentIndex, Recommendation, Recommender};
pub use crate::primitives::SparseVector;
pub use crate::text::{SimilarityMatrix, StopWords, TfidfVectorizer};
