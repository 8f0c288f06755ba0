pub mod document;
pub mod index;
pub mod rank;
pub mod tokenizer;

pub use document::{Book, Media};
pub use index::{build_index, DocId, Index};
pub use rank::{compare_relevance, rank_by_relevance};
