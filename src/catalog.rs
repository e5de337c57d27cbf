//! Catalog items: the rows the engine indexes.
//!
//! An [`Item`] is one catalog row: a title, the free-text label field the
//! engine vectorizes, and opaque display attributes (rating, popularity,
//! poster reference) that pass through untouched for the caller to render.

use serde::{Deserialize, Serialize};

/// One catalog row.
///
/// Only `title` and `genres` participate in indexing; the remaining
/// fields are display attributes the engine never inspects.
///
/// Rows deserialized from external data tolerate a missing text field:
/// the row comes back with empty text, which vectorizes to the zero
/// vector instead of failing the build.
///
/// # Examples
///
/// ```
/// use sugerir::catalog::Item;
///
/// let item = Item::new("Heat", "action crime thriller")
///     .with_rating(8.3)
///     .with_popularity(61.4);
///
/// assert_eq!(item.title, "Heat");
/// assert_eq!(item.rating, Some(8.3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display title; also the query key.
    pub title: String,
    /// Free-text label field (genre tags in the original catalog).
    #[serde(default)]
    pub genres: String,
    /// Opaque display attribute.
    pub rating: Option<f32>,
    /// Opaque display attribute.
    pub popularity: Option<f32>,
    /// Opaque display attribute (poster image reference).
    pub poster_url: Option<String>,
}

impl Item {
    /// Create an item from a title and its label text.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::catalog::Item;
    ///
    /// let item = Item::new("Alien", "horror scifi");
    /// assert_eq!(item.genres, "horror scifi");
    /// assert_eq!(item.rating, None);
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, genres: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genres: genres.into(),
            rating: None,
            popularity: None,
            poster_url: None,
        }
    }

    /// Attach a rating for display passthrough.
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach a popularity figure for display passthrough.
    #[must_use]
    pub fn with_popularity(mut self, popularity: f32) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Attach a poster reference for display passthrough.
    #[must_use]
    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }
}
