//! Pairwise cosine similarity over unit-length document vectors.
//!
//! [`SimilarityMatrix`] precomputes every pairwise score once at build
//! time so that lookups during recommendation are plain slice reads.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::text::{SimilarityMatrix, TfidfVectorizer};
//!
//! let docs = ["action adventure", "action comedy", "romance"];
//! let vectors = TfidfVectorizer::new()
//!     .fit_transform(&docs)
//!     .expect("fit_transform should succeed");
//!
//! let sim = SimilarityMatrix::pairwise(&vectors);
//! assert_eq!(sim.len(), 3);
//! assert!(sim.get(0, 1) > sim.get(0, 2));
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::primitives::SparseVector;

/// Dense, symmetric matrix of pairwise cosine similarities.
///
/// Because every document vector is unit length or zero, the cosine of
/// a pair is just the dot product:
///
/// ```text
/// sim(i, j) = vᵢ · vⱼ
/// ```
///
/// Each off-diagonal pair is computed exactly once and the same value
/// is written to both `(i, j)` and `(j, i)`, so the matrix is symmetric
/// bit for bit rather than up to rounding. Diagonal cells are set
/// directly: `1.0` for a non-zero vector, `0.0` for the zero vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix for `vectors`.
    ///
    /// With the `parallel` feature enabled, upper-triangle rows are
    /// computed across threads; the scatter that fills the matrix stays
    /// single-threaded, so the result is identical on both paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::primitives::SparseVector;
    /// use sugerir::text::SimilarityMatrix;
    ///
    /// let mut a = SparseVector::from_entries(vec![(0, 3.0), (1, 4.0)]);
    /// a.normalize();
    /// let b = SparseVector::from_entries(vec![(0, 1.0)]);
    ///
    /// let sim = SimilarityMatrix::pairwise(&[a, b]);
    /// assert_eq!(sim.get(0, 1), 0.6);
    /// assert_eq!(sim.get(1, 0), 0.6);
    /// assert_eq!(sim.get(0, 0), 1.0);
    /// ```
    #[must_use]
    pub fn pairwise(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();

        // Dot products for j in i+1..n, one segment per row (parallel
        // when available).
        #[cfg(feature = "parallel")]
        let segments: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| upper_segment(vectors, i))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let segments: Vec<Vec<f64>> = (0..n).map(|i| upper_segment(vectors, i)).collect();

        let mut data = vec![0.0; n * n];
        for (i, vector) in vectors.iter().enumerate() {
            data[i * n + i] = if vector.is_empty() { 0.0 } else { 1.0 };
        }
        for (i, segment) in segments.into_iter().enumerate() {
            for (offset, score) in segment.into_iter().enumerate() {
                let j = i + 1 + offset;
                data[i * n + j] = score;
                data[j * n + i] = score;
            }
        }

        Self { n, data }
    }

    /// Similarity of the pair `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics when `i` or `j` is out of bounds. Use [`len`] to check
    /// first, or [`row`] for a fallible lookup.
    ///
    /// [`len`]: SimilarityMatrix::len
    /// [`row`]: SimilarityMatrix::row
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "pair ({i}, {j}) out of bounds");
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice of `len()` scores, or `None` when out of
    /// bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// True for the zero-item matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

fn upper_segment(vectors: &[SparseVector], i: usize) -> Vec<f64> {
    ((i + 1)..vectors.len())
        .map(|j| vectors[i].dot(&vectors[j]))
        .collect()
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
