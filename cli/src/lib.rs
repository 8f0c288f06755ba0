use anyhow::{bail, Context, Result};
use bookrank_core::tokenizer::tokenize;
use bookrank_core::{rank_by_relevance, Book, Media};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One book as it appears in input JSON/JSONL. Either an explicit
/// `words` list or raw `text` (tokenized on load); `words` wins when
/// both are present. Negative ratings pass through and are rejected by
/// the book itself.
#[derive(Debug, Deserialize)]
pub struct InputBook {
    pub title: String,
    pub contributors: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub words: Option<Vec<String>>,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

impl InputBook {
    pub fn into_book(self) -> Book {
        let words = match (self.words, self.text) {
            (Some(words), _) => words,
            (None, Some(text)) => tokenize(&text),
            (None, None) => Vec::new(),
        };
        let mut book = Book::from_tokens(self.title, self.contributors, words);
        for score in self.ratings {
            book.add_rating(score);
        }
        book
    }
}

/// A ranked result in machine-readable form.
#[derive(Debug, Serialize)]
pub struct RankedHit {
    pub title: String,
    pub contributors: Vec<String>,
    pub term_count: usize,
    pub average_rating: f64,
    pub num_ratings: usize,
}

/// Ranks `books` against `query` and flattens the result for output.
pub fn rank_to_hits(books: &[Book], query: &str) -> Vec<RankedHit> {
    rank_by_relevance(books, query)
        .into_iter()
        .map(|book| RankedHit {
            title: book.title().to_string(),
            contributors: book.contributors().to_vec(),
            term_count: book.term_count(query),
            average_rating: book.average_rating(),
            num_ratings: book.num_ratings(),
        })
        .collect()
}

/// Loads books from a `.json`/`.jsonl` file or from every such file in
/// a directory tree. Ingestion order is the ranking tie-break order, so
/// directory walks are sorted for determinism.
pub fn load_books(input: &Path) -> Result<Vec<Book>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input path does not exist: {}", input.display());
    }

    let mut books = Vec::new();
    for file in files {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, &mut books)?;
        } else {
            load_json(&file, &mut books)?;
        }
    }
    tracing::info!(num_books = books.len(), "loaded books");
    Ok(books)
}

fn load_jsonl(file: &Path, books: &mut Vec<Book>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let input: InputBook = serde_json::from_str(&line)
            .with_context(|| format!("parsing a line of {}", file.display()))?;
        books.push(input.into_book());
    }
    Ok(())
}

fn load_json(file: &Path, books: &mut Vec<Book>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let input: InputBook = serde_json::from_value(v)?;
                books.push(input.into_book());
            }
        }
        other => {
            let input: InputBook = serde_json::from_value(other)
                .with_context(|| format!("parsing {}", file.display()))?;
            books.push(input.into_book());
        }
    }
    Ok(())
}

/// The built-in three-book corpus used by `bookrank demo`.
pub fn demo_books() -> Vec<Book> {
    let mut mistborn = Book::from_tokens(
        "Mistborn",
        vec!["Brandon Sanderson".to_string()],
        tokenize("Epic fantasy worldbuilding content"),
    );
    mistborn.add_rating(5);
    mistborn.add_rating(4);

    let fahrenheit = Book::from_tokens(
        "Fahrenheit 451",
        vec!["Ray Bradbury".to_string()],
        tokenize("Realistic \"sci-fi\" content"),
    );

    let mut hobbit = Book::from_tokens(
        "The Hobbit",
        vec!["J.R.R. Tolkien".to_string()],
        tokenize("Epic fantasy quest content"),
    );
    hobbit.add_rating(3);

    vec![mistborn, fahrenheit, hobbit]
}
