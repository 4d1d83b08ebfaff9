//! Summarization components
//!
//! Provides frequency-based extractive summarization at two granularities:
//! the most frequent tokens of a document, or its highest-scoring sentences.

pub mod frequency;
pub mod sentences;
