//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering and text
//! statistics.

pub mod stats;
pub mod stopwords;
pub mod tokenizer;
