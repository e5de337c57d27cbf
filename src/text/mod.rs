//! Text processing: tokenization, stop-word filtering, TF-IDF, cosine
//! similarity.
//!
//! The pipeline through this module is the front half of the engine:
//!
//! - [`Tokenizer`] splits label text into lowercase terms
//! - [`StopWords`] drops function words before counting
//! - [`TfidfVectorizer`] weighs terms and L2-normalizes each document
//! - [`SimilarityMatrix`] holds the pairwise cosine scores
//!
//! # Examples
//!
//! ```
//! use sugerir::text::{SimilarityMatrix, TfidfVectorizer};
//!
//! let docs = ["action adventure", "action comedy", "romance"];
//! let mut vectorizer = TfidfVectorizer::new();
//! let vectors = vectorizer
//!     .fit_transform(&docs)
//!     .expect("fit_transform should succeed");
//!
//! let sim = SimilarityMatrix::pairwise(&vectors);
//! assert_eq!(sim.get(0, 0), 1.0);
//! assert_eq!(sim.get(0, 1), sim.get(1, 0));
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use similarity::SimilarityMatrix;
pub use stopwords::{StopWords, ENGLISH_STOP_WORDS};
pub use tokenize::{TermTokenizer, Tokenizer, WhitespaceTokenizer};
pub use vectorize::{TfidfVectorizer, Vocabulary};
