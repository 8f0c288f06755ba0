use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex =
        Regex::new(r"(?u)[\p{L}\p{N}][\p{L}\p{N}_'-]*").expect("valid regex");
}

/// Splits text into words, keeping original casing and order. This is
/// the default token source for building a `Book` word list; any other
/// iterator of strings works just as well. No stemming, stop-word
/// filtering, or normalization happens here: the index lowercases its
/// own keys and ranking compares case-insensitively, but the stored
/// words stay as written.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_casing_and_order() {
        let words = tokenize("Epic fantasy Worldbuilding content");
        assert_eq!(words, ["Epic", "fantasy", "Worldbuilding", "content"]);
    }

    #[test]
    fn strips_surrounding_punctuation() {
        let words = tokenize("Realistic \"sci-fi\" content!");
        assert_eq!(words, ["Realistic", "sci-fi", "content"]);
    }

    #[test]
    fn empty_text_yields_no_words() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
    }
}
