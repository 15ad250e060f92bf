//! Text analysis module for textbayes.
//!
//! This is the tokenizer adapter consumed by the classifiers: tokenizers
//! split raw documents into tokens, filters normalize them, and analyzers
//! chain the two.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
