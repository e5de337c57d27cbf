//! Sparse vectors of term weights.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A sparse vector stored as `(dimension, weight)` pairs sorted by
/// dimension.
///
/// Entries are unique and non-zero, so the zero vector is the vector
/// with no entries, and the dot product is a linear merge walk over two
/// sorted lists.
///
/// # Examples
///
/// ```
/// use sugerir::primitives::SparseVector;
///
/// let a = SparseVector::from_entries(vec![(0, 1.0), (2, 2.0)]);
/// let b = SparseVector::from_entries(vec![(2, 3.0), (5, 1.0)]);
///
/// assert_eq!(a.dot(&b), 6.0);
/// assert_eq!(a.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// The zero vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(dimension, weight)` pairs.
    ///
    /// Pairs are sorted by dimension, duplicate dimensions are summed,
    /// and zero weights are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::primitives::SparseVector;
    ///
    /// let v = SparseVector::from_entries(vec![(3, 1.0), (1, 2.0), (3, 0.5)]);
    /// assert_eq!(v.get(1), 2.0);
    /// assert_eq!(v.get(3), 1.5);
    /// assert_eq!(v.nnz(), 2);
    /// ```
    #[must_use]
    pub fn from_entries(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_unstable_by_key(|&(dim, _)| dim);
        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (dim, weight) in pairs {
            match entries.last_mut() {
                Some(last) if last.0 == dim => last.1 += weight,
                _ => entries.push((dim, weight)),
            }
        }
        entries.retain(|&(_, weight)| weight != 0.0);
        Self { entries }
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True for the zero vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at `dim`, or `0.0` when the dimension is absent.
    #[must_use]
    pub fn get(&self, dim: usize) -> f64 {
        match self.entries.binary_search_by_key(&dim, |&(d, _)| d) {
            Ok(pos) => self.entries[pos].1,
            Err(_) => 0.0,
        }
    }

    /// Dot product with another sparse vector.
    ///
    /// A merge walk over the two sorted entry lists; runs in
    /// `O(nnz(self) + nnz(other))`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let a = &self.entries;
        let b = &other.entries;
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean (L2) norm.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::primitives::SparseVector;
    ///
    /// let v = SparseVector::from_entries(vec![(0, 3.0), (7, 4.0)]);
    /// assert_eq!(v.l2_norm(), 5.0);
    /// ```
    #[must_use]
    pub fn l2_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale the vector to unit L2 norm in place.
    ///
    /// The zero vector is left unchanged; there is nothing to scale and
    /// no division happens.
    pub fn normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
    }

    /// Iterate over `(dimension, weight)` pairs in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
