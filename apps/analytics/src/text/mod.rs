pub mod keywords;
pub mod tokenizer;

pub use keywords::KeywordExtractor;
pub use tokenizer::Tokenizer;
