use crate::document::Media;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as _;

pub type DocId = u32;

/// Inverted index: lowercased word -> set of documents containing it.
/// Keys iterate in lexicographic order; membership within a key is an
/// unordered, deduplicated id set. Documents are referred to by their
/// position in the slice the index was built from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Index {
    entries: BTreeMap<String, HashSet<DocId>>,
}

impl Index {
    /// Documents containing `word`, matched case-insensitively.
    pub fn docs_for(&self, word: &str) -> Option<&HashSet<DocId>> {
        self.entries.get(&word.to_lowercase())
    }

    /// Number of distinct indexed terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<DocId>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the index as one `word: {description, description}` line
    /// per term, terms in key order. Set membership is unordered, so
    /// ids are sorted here purely to keep the output deterministic.
    pub fn render<M: Media>(&self, docs: &[M]) -> String {
        let mut out = String::new();
        for (word, ids) in &self.entries {
            let mut ids: Vec<DocId> = ids.iter().copied().collect();
            ids.sort_unstable();
            let members: Vec<String> = ids
                .iter()
                .filter_map(|&id| docs.get(id as usize).map(Media::describe))
                .collect();
            let _ = writeln!(out, "{}: {{{}}}", word, members.join(", "));
        }
        out
    }
}

/// Builds the index from scratch: one pass over every document and
/// every word. The key is the lowercased word; the document's own word
/// list is left untouched.
pub fn build_index<M: Media>(docs: &[M]) -> Index {
    let mut entries: BTreeMap<String, HashSet<DocId>> = BTreeMap::new();
    for (doc_id, doc) in docs.iter().enumerate() {
        for word in doc.words() {
            entries
                .entry(word.to_lowercase())
                .or_default()
                .insert(doc_id as DocId);
        }
    }
    tracing::debug!(
        num_docs = docs.len(),
        num_terms = entries.len(),
        "built inverted index"
    );
    Index { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Book;

    fn shelf() -> Vec<Book> {
        vec![
            Book::from_tokens(
                "Mistborn",
                vec!["Brandon Sanderson".to_string()],
                ["Epic", "fantasy", "worldbuilding", "content"].map(String::from),
            ),
            Book::from_tokens(
                "Fahrenheit 451",
                vec!["Ray Bradbury".to_string()],
                ["Realistic", "sci-fi", "content"].map(String::from),
            ),
            Book::from_tokens(
                "The Hobbit",
                vec!["J.R.R. Tolkien".to_string()],
                ["Epic", "fantasy", "quest", "content"].map(String::from),
            ),
        ]
    }

    #[test]
    fn keys_are_lowercased_and_membership_is_complete() {
        let docs = shelf();
        let index = build_index(&docs);

        let content: &HashSet<DocId> = index.docs_for("content").unwrap();
        assert_eq!(content, &HashSet::from([0, 1, 2]));

        let epic = index.docs_for("epic").unwrap();
        assert_eq!(epic, &HashSet::from([0, 2]));
        // Lookup folds case the same way the build does.
        assert_eq!(index.docs_for("Epic"), Some(epic));
        // The raw uppercase form is not a key in its own right.
        assert!(!index.iter().any(|(w, _)| w == "Epic"));
    }

    #[test]
    fn repeated_words_dedupe_to_one_membership() {
        let docs = vec![Book::from_tokens(
            "Repetitive",
            vec!["Anon".to_string()],
            ["spam", "Spam", "SPAM"].map(String::from),
        )];
        let index = build_index(&docs);
        assert_eq!(index.len(), 1);
        assert_eq!(index.docs_for("spam").unwrap().len(), 1);
    }

    #[test]
    fn empty_inputs_are_valid() {
        let none: Vec<Book> = Vec::new();
        assert!(build_index(&none).is_empty());

        let wordless = vec![Book::new("Untitled", "Anon")];
        assert!(build_index(&wordless).is_empty());
    }

    #[test]
    fn keys_iterate_in_lexicographic_order() {
        let docs = shelf();
        let index = build_index(&docs);
        let keys: Vec<&str> = index.iter().map(|(w, _)| w).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn render_lists_terms_in_order_with_braced_members() {
        let docs = shelf();
        let rendered = build_index(&docs).render(&docs);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[0],
            "content: {Mistborn by [Brandon Sanderson], Fahrenheit 451 by [Ray Bradbury], The Hobbit by [J.R.R. Tolkien]}"
        );
        assert_eq!(
            lines[1],
            "epic: {Mistborn by [Brandon Sanderson], The Hobbit by [J.R.R. Tolkien]}"
        );
        assert!(rendered.contains("sci-fi: {Fahrenheit 451 by [Ray Bradbury]}"));
    }
}
