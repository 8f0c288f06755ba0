use std::fmt;
use std::fmt::Write as _;

/// Capability set shared by indexable media items: anything with a
/// title, contributors, and a word list can be indexed. Books are the
/// only concrete media here; films or articles would implement the
/// same trait.
pub trait Media {
    fn title(&self) -> &str;
    fn contributors(&self) -> &[String];
    /// Tokenized content in ingestion order, original casing preserved.
    fn words(&self) -> &[String];

    /// Human-readable summary, `"<title> by [<contributors>]"`.
    /// Implementors may append more detail (ratings, etc).
    fn describe(&self) -> String {
        format!("{} by [{}]", self.title(), self.contributors().join(", "))
    }
}

#[derive(Debug, Clone)]
pub struct Book {
    title: String,
    contributors: Vec<String>,
    ratings: Vec<u32>,
    words: Vec<String>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contributors: vec![author.into()],
            ratings: Vec::new(),
            words: Vec::new(),
        }
    }

    pub fn with_contributors(title: impl Into<String>, contributors: Vec<String>) -> Self {
        Self {
            title: title.into(),
            contributors,
            ratings: Vec::new(),
            words: Vec::new(),
        }
    }

    /// Drains a token source eagerly into the fixed word list. Any
    /// iterator of strings works; see `tokenizer::tokenize` for the
    /// default text source.
    pub fn from_tokens<I>(title: impl Into<String>, contributors: Vec<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            title: title.into(),
            contributors,
            ratings: Vec::new(),
            words: tokens.into_iter().collect(),
        }
    }

    /// Records a rating. Negative scores are ignored without error.
    pub fn add_rating(&mut self, score: i32) {
        if score >= 0 {
            self.ratings.push(score as u32);
        } else {
            tracing::debug!(score, title = %self.title, "ignoring negative rating");
        }
    }

    pub fn num_ratings(&self) -> usize {
        self.ratings.len()
    }

    /// Arithmetic mean of all accepted ratings, 0.0 when none exist.
    /// Unrounded; rounding belongs to display.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.ratings.iter().map(|&r| u64::from(r)).sum();
        sum as f64 / self.ratings.len() as f64
    }

    /// Number of words in this book exactly matching `query`,
    /// case-insensitively. The stored words keep their original casing.
    pub fn term_count(&self, query: &str) -> usize {
        let needle = query.to_lowercase();
        self.words
            .iter()
            .filter(|w| w.to_lowercase() == needle)
            .count()
    }
}

impl Media for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn contributors(&self) -> &[String] {
        &self.contributors
    }

    fn words(&self) -> &[String] {
        &self.words
    }

    /// Adds `": <avg> (<n> ratings)"` once ratings exist. The average
    /// is shown to two decimals.
    fn describe(&self) -> String {
        let mut out = format!("{} by [{}]", self.title, self.contributors.join(", "));
        if !self.ratings.is_empty() {
            let _ = write!(
                out,
                ": {:.2} ({} ratings)",
                self.average_rating(),
                self.num_ratings()
            );
        }
        out
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Media::describe(self))
    }
}
