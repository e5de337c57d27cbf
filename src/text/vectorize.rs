//! TF-IDF vectorization over catalog label text.
//!
//! [`TfidfVectorizer`] turns each document into a unit-length
//! [`SparseVector`] over a [`Vocabulary`] learned from the corpus.

use crate::error::{Result, SugerirError};
use crate::primitives::SparseVector;
use crate::text::stopwords::StopWords;
use crate::text::tokenize::{TermTokenizer, Tokenizer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Term-to-dimension mapping in first-appearance order.
///
/// Dimensions are assigned as terms are first seen, scanning documents
/// in catalog order and tokens in text order, so rebuilding from the
/// same corpus reproduces the same mapping exactly.
///
/// # Examples
///
/// ```
/// use sugerir::text::Vocabulary;
///
/// let mut vocab = Vocabulary::new();
/// assert_eq!(vocab.add("action"), 0);
/// assert_eq!(vocab.add("comedy"), 1);
/// assert_eq!(vocab.add("action"), 0);
/// assert_eq!(vocab.len(), 2);
/// assert_eq!(vocab.term(1), Some("comedy"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            terms: Vec::new(),
        }
    }

    /// Dimension of `term`, assigning the next free dimension when the
    /// term is new.
    pub fn add(&mut self, term: &str) -> usize {
        if let Some(&dim) = self.index.get(term) {
            dim
        } else {
            let dim = self.terms.len();
            self.index.insert(term.to_string(), dim);
            self.terms.push(term.to_string());
            dim
        }
    }

    /// Dimension of `term`, if the term has been seen.
    #[must_use]
    pub fn dim(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at `dim`, if in range.
    #[must_use]
    pub fn term(&self, dim: usize) -> Option<&str> {
        self.terms.get(dim).map(String::as_str)
    }

    /// All terms, in dimension order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no term has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// TF-IDF vectorizer producing unit-length sparse document vectors.
///
/// **Weighting:**
///
/// ```text
/// tf(t, d) = raw count of t in d
/// idf(t)   = ln((1 + N) / (1 + df(t))) + 1
/// w(t, d)  = tf(t, d) × idf(t), then each row is L2-normalized
/// ```
///
/// `N` is the document count and `df(t)` the number of documents
/// containing `t`. The smoothing keeps idf finite and positive; a term
/// appearing in every document still weighs `1.0` before normalization.
/// A document whose tokens are all filtered out stays the zero vector.
///
/// Fitting an empty corpus is valid and yields an empty vocabulary;
/// only transforming before any fit at all is an error.
///
/// # Examples
///
/// ```
/// use sugerir::text::TfidfVectorizer;
///
/// let docs = ["action adventure", "action comedy"];
/// let mut vectorizer = TfidfVectorizer::new();
/// let vectors = vectorizer
///     .fit_transform(&docs)
///     .expect("fit_transform should succeed");
///
/// assert_eq!(vectors.len(), 2);
/// assert_eq!(vectorizer.vocabulary().len(), 3);
/// assert!((vectors[0].l2_norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: StopWords,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    fitted: bool,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the default tokenizer
    /// ([`TermTokenizer`]) and the English stop-word list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(TermTokenizer::new()),
            stop_words: StopWords::english(),
            vocabulary: Vocabulary::new(),
            idf: Vec::new(),
            fitted: false,
        }
    }

    /// Replace the stop-word set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::{StopWords, TfidfVectorizer};
    ///
    /// let mut vectorizer = TfidfVectorizer::new().with_stop_words(StopWords::none());
    /// vectorizer.fit(&["the fall"]);
    /// assert_eq!(vectorizer.vocabulary().len(), 2);
    /// ```
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Replace the tokenizer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::text::{TfidfVectorizer, WhitespaceTokenizer};
    ///
    /// let vectorizer =
    ///     TfidfVectorizer::new().with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Learn the vocabulary and document frequencies in one pass over
    /// `documents`, in order.
    ///
    /// An empty corpus fits to an empty vocabulary; it is a valid
    /// state, not an error.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let mut vocabulary = Vocabulary::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for doc in documents {
            let mut doc_dims: HashSet<usize> = HashSet::new();
            for token in self.tokenizer.tokenize(doc.as_ref()) {
                if self.stop_words.is_stop_word(&token) {
                    continue;
                }
                let dim = vocabulary.add(&token);
                if dim == doc_freq.len() {
                    doc_freq.push(0);
                }
                doc_dims.insert(dim);
            }
            for dim in doc_dims {
                doc_freq[dim] += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        debug!(
            "fitted vocabulary: {} terms from {} documents",
            vocabulary.len(),
            documents.len()
        );

        self.vocabulary = vocabulary;
        self.fitted = true;
    }

    /// Vectorize `documents` against the fitted vocabulary.
    ///
    /// Terms unseen at fit time are ignored. Returns
    /// [`SugerirError::NotFitted`] when called before [`fit`].
    ///
    /// [`fit`]: TfidfVectorizer::fit
    ///
    /// # Errors
    ///
    /// `NotFitted` when the vectorizer has never been fit.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<SparseVector>> {
        if !self.fitted {
            return Err(SugerirError::NotFitted);
        }
        Ok(documents
            .iter()
            .map(|doc| self.vectorize(doc.as_ref()))
            .collect())
    }

    /// Fit on `documents`, then transform them.
    ///
    /// # Errors
    ///
    /// None in practice: the fit immediately precedes the transform.
    /// The `Result` mirrors [`transform`](TfidfVectorizer::transform).
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<SparseVector>> {
        self.fit(documents);
        self.transform(documents)
    }

    /// The fitted vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Smoothed inverse document frequency per dimension.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// True after the first [`fit`](TfidfVectorizer::fit).
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Vectorize one document against the fitted vocabulary.
    ///
    /// The index build calls this directly right after [`fit`], where
    /// the not-fitted case cannot arise.
    ///
    /// [`fit`]: TfidfVectorizer::fit
    pub(crate) fn vectorize(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if self.stop_words.is_stop_word(&token) {
                continue;
            }
            if let Some(dim) = self.vocabulary.dim(&token) {
                *counts.entry(dim).or_insert(0.0) += 1.0;
            }
        }
        let mut vector = SparseVector::from_entries(
            counts
                .into_iter()
                .map(|(dim, tf)| (dim, tf * self.idf[dim]))
                .collect(),
        );
        vector.normalize();
        vector
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
