use crate::document::Book;
use std::cmp::Ordering;

/// Relevance of `a` versus `b` for `query`: term count first, average
/// rating on a tie, `Equal` beyond that. `Less` means `a` is less
/// relevant. The query is an explicit parameter so the relation is
/// total and consistent across a whole sort; neither book is mutated.
pub fn compare_relevance(a: &Book, b: &Book, query: &str) -> Ordering {
    a.term_count(query)
        .cmp(&b.term_count(query))
        .then_with(|| a.average_rating().total_cmp(&b.average_rating()))
}

/// Orders books by relevance to `query`, most relevant first. The sort
/// is stable: books with equal term count and equal average rating keep
/// their input order. Term counts are computed once per book, so an
/// unmatched or empty query simply degrades to the rating tie-break.
pub fn rank_by_relevance<'a>(books: &'a [Book], query: &str) -> Vec<&'a Book> {
    let mut scored: Vec<(usize, &Book)> = books
        .iter()
        .map(|book| (book.term_count(query), book))
        .collect();
    scored.sort_by(|(count_a, a), (count_b, b)| {
        count_b
            .cmp(count_a)
            .then_with(|| b.average_rating().total_cmp(&a.average_rating()))
    });
    tracing::debug!(query, num_books = books.len(), "ranked books");
    scored.into_iter().map(|(_, book)| book).collect()
}
