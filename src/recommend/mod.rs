//! Content-based recommendation over TF-IDF cosine similarity.
//!
//! [`ContentIndex`] is the owned build result: one value holding the
//! catalog, the fitted vocabulary, the document vectors, the pairwise
//! similarity matrix, and the title lookup. Building is a pure function
//! of the catalog; queries take `&self`, so a built index can be shared
//! behind a reference (or an `Arc`) and served concurrently.
//!
//! [`Recommender`] is a thin stateful facade over the index for callers
//! that want a configure-fit-query object with a replaceable catalog.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::catalog::Item;
//! use sugerir::recommend::ContentIndex;
//!
//! let index = ContentIndex::build(vec![
//!     Item::new("Alpha", "action adventure"),
//!     Item::new("Beta", "action comedy"),
//!     Item::new("Gamma", "romance drama"),
//! ]);
//!
//! let recs = index.recommend("Alpha", 1);
//! assert_eq!(recs[0].title, "Beta");
//! assert!(recs[0].score > 0.0);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Item;
use crate::error::{Result, SugerirError};
use crate::primitives::SparseVector;
use crate::text::{SimilarityMatrix, StopWords, TfidfVectorizer, Vocabulary};

/// Result count used by [`Recommender`] when none is configured.
const DEFAULT_K: usize = 5;

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog row of the recommended item.
    pub row: usize,
    /// Title of the recommended item.
    pub title: String,
    /// Cosine similarity to the query item, in `[0, 1]`.
    pub score: f64,
}

/// Immutable recommendation index built from a catalog.
///
/// All text processing happens once in [`build`]; every query after
/// that is a row lookup, a sort, and a truncate. Rebuilding from the
/// same catalog reproduces the vocabulary, the weights, the similarity
/// matrix, and every query result bit for bit.
///
/// Ranking rules:
///
/// - the query row is excluded from its own results
/// - scores sort descending; ties break by ascending catalog row
/// - a known title always yields `min(k, len() - 1)` entries, zero
///   scores included
/// - an unknown title yields an empty result, not an error
///
/// [`build`]: ContentIndex::build
#[derive(Debug, Clone)]
pub struct ContentIndex {
    items: Vec<Item>,
    vocabulary: Vocabulary,
    vectors: Vec<SparseVector>,
    similarity: SimilarityMatrix,
    titles: HashMap<String, usize>,
}

impl ContentIndex {
    /// Build an index from `items` with the default vectorizer
    /// (term tokenizer, English stop words).
    ///
    /// An empty catalog builds an empty index; every query on it
    /// returns an empty result.
    #[must_use]
    pub fn build(items: Vec<Item>) -> Self {
        Self::build_with(items, TfidfVectorizer::new())
    }

    /// Build an index from `items` with a configured vectorizer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::catalog::Item;
    /// use sugerir::recommend::ContentIndex;
    /// use sugerir::text::{StopWords, TfidfVectorizer};
    ///
    /// let vectorizer = TfidfVectorizer::new().with_stop_words(StopWords::none());
    /// let index = ContentIndex::build_with(
    ///     vec![Item::new("Solo", "the heist")],
    ///     vectorizer,
    /// );
    /// assert_eq!(index.vocabulary().len(), 2);
    /// ```
    #[must_use]
    pub fn build_with(items: Vec<Item>, mut vectorizer: TfidfVectorizer) -> Self {
        let documents: Vec<&str> = items.iter().map(|item| item.genres.as_str()).collect();
        vectorizer.fit(&documents);
        let vectors: Vec<SparseVector> = documents
            .iter()
            .map(|doc| vectorizer.vectorize(doc))
            .collect();

        let similarity = SimilarityMatrix::pairwise(&vectors);
        debug!(
            "computed {}x{} similarity matrix",
            similarity.len(),
            similarity.len()
        );

        // First occurrence of a duplicated title wins.
        let mut titles: HashMap<String, usize> = HashMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            titles.entry(item.title.clone()).or_insert(row);
        }

        info!(
            "built content index: {} items, {} terms",
            items.len(),
            vectorizer.vocabulary().len()
        );

        Self {
            vocabulary: vectorizer.vocabulary().clone(),
            vectors,
            similarity,
            titles,
            items,
        }
    }

    /// Top-`k` items most similar to the item titled `title`.
    ///
    /// An unknown title returns an empty vector. Title matching is
    /// exact; when the catalog holds duplicate titles the first row
    /// wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::catalog::Item;
    /// use sugerir::recommend::ContentIndex;
    ///
    /// let index = ContentIndex::build(vec![
    ///     Item::new("Alpha", "action adventure"),
    ///     Item::new("Beta", "action comedy"),
    /// ]);
    ///
    /// assert_eq!(index.recommend("Alpha", 5).len(), 1);
    /// assert!(index.recommend("Missing", 5).is_empty());
    /// ```
    #[must_use]
    pub fn recommend(&self, title: &str, k: usize) -> Vec<Recommendation> {
        match self.titles.get(title) {
            Some(&row) => self.rank(row, k),
            None => Vec::new(),
        }
    }

    /// Top-`k` items most similar to the item at `row`.
    ///
    /// # Errors
    ///
    /// [`SugerirError::RowOutOfBounds`] when `row >= len()`.
    pub fn recommend_row(&self, row: usize, k: usize) -> Result<Vec<Recommendation>> {
        if row >= self.items.len() {
            return Err(SugerirError::RowOutOfBounds {
                row,
                len: self.items.len(),
            });
        }
        Ok(self.rank(row, k))
    }

    /// Row of `title`, if the title is in the catalog.
    #[must_use]
    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.titles.get(title).copied()
    }

    /// Item at `row`, if in range.
    #[must_use]
    pub fn item(&self, row: usize) -> Option<&Item> {
        self.items.get(row)
    }

    /// The catalog, in row order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// TF-IDF vector of the item at `row`, if in range.
    #[must_use]
    pub fn vector(&self, row: usize) -> Option<&SparseVector> {
        self.vectors.get(row)
    }

    /// The fitted vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The pairwise similarity matrix.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Number of catalog items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True for the empty catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn rank(&self, row: usize, k: usize) -> Vec<Recommendation> {
        let scores = match self.similarity.row(row) {
            Some(scores) => scores,
            None => return Vec::new(),
        };

        let mut candidates: Vec<(usize, f64)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, _)| other != row)
            .collect();
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        candidates.truncate(k);

        candidates
            .into_iter()
            .map(|(other, score)| Recommendation {
                row: other,
                title: self.items[other].title.clone(),
                score,
            })
            .collect()
    }
}

/// Stateful facade: configure once, fit a catalog, query by title.
///
/// Queries before the first [`fit`] fail with
/// [`SugerirError::NotFitted`]; fitting again replaces the catalog
/// wholesale. The underlying [`ContentIndex`] stays reachable through
/// [`index`] for row-addressed queries and introspection.
///
/// [`fit`]: Recommender::fit
/// [`index`]: Recommender::index
///
/// # Examples
///
/// ```
/// use sugerir::catalog::Item;
/// use sugerir::recommend::Recommender;
///
/// let mut recommender = Recommender::new().with_default_k(2);
/// recommender.fit(vec![
///     Item::new("Alpha", "action adventure"),
///     Item::new("Beta", "action comedy"),
///     Item::new("Gamma", "romance drama"),
/// ]);
///
/// let recs = recommender.recommend("Alpha").expect("recommender is fitted");
/// assert_eq!(recs.len(), 2);
/// ```
#[derive(Debug)]
pub struct Recommender {
    stop_words: StopWords,
    default_k: usize,
    index: Option<ContentIndex>,
}

impl Recommender {
    /// Create an unfitted recommender with English stop words and a
    /// default result count of 5.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::english(),
            default_k: DEFAULT_K,
            index: None,
        }
    }

    /// Replace the stop-word set used at the next [`fit`].
    ///
    /// [`fit`]: Recommender::fit
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Replace the default result count used by [`recommend`].
    ///
    /// [`recommend`]: Recommender::recommend
    #[must_use]
    pub fn with_default_k(mut self, k: usize) -> Self {
        self.default_k = k;
        self
    }

    /// Build the index for `items`, replacing any previous catalog.
    pub fn fit(&mut self, items: Vec<Item>) {
        if let Some(previous) = &self.index {
            info!(
                "replacing catalog: {} items -> {} items",
                previous.len(),
                items.len()
            );
        }
        let vectorizer = TfidfVectorizer::new().with_stop_words(self.stop_words.clone());
        self.index = Some(ContentIndex::build_with(items, vectorizer));
    }

    /// Top recommendations for `title` at the configured default count.
    ///
    /// # Errors
    ///
    /// [`SugerirError::NotFitted`] before the first [`fit`]. An unknown
    /// title on a fitted recommender is `Ok` with an empty vector.
    ///
    /// [`fit`]: Recommender::fit
    pub fn recommend(&self, title: &str) -> Result<Vec<Recommendation>> {
        self.recommend_top(title, self.default_k)
    }

    /// Top-`k` recommendations for `title`.
    ///
    /// # Errors
    ///
    /// [`SugerirError::NotFitted`] before the first [`fit`].
    ///
    /// [`fit`]: Recommender::fit
    pub fn recommend_top(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        let index = self.index.as_ref().ok_or(SugerirError::NotFitted)?;
        Ok(index.recommend(title, k))
    }

    /// The built index, once fitted.
    #[must_use]
    pub fn index(&self) -> Option<&ContentIndex> {
        self.index.as_ref()
    }

    /// True after the first [`fit`](Recommender::fit).
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.index.is_some()
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}
