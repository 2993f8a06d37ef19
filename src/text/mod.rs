//! Text processing module
//!
//! This module contains the tokenizer and the stopword set:
//! - Whitespace splitting with explicit ASCII alphanumeric classification
//! - Word splitting at non-alphanumeric boundaries
//! - Case-folded word-frequency aggregation
//! - Stopword filtering support

mod stopwords;
mod tokenizer;

pub use stopwords::StopwordSet;
pub use tokenizer::{compute_word_frequencies, tokenize};
