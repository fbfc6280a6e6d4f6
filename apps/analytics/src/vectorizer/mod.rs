// Sparse vector space model: TF-IDF weighting and cosine similarity.
// No statistics library; memory scales with document length, not vocabulary.

pub mod sparse;
pub mod tfidf;

pub use sparse::{cosine_similarity, SparseVector};
pub use tfidf::{TfidfVectorizer, VectorizerConfig};
