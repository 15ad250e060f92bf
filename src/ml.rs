//! Machine learning models built on top of the analysis pipeline.

pub mod naive_bayes;
