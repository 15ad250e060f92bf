//! Common types for Naive Bayes classification.

use serde::{Deserialize, Serialize};

/// Labeled training document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample<C = String> {
    /// Raw document text.
    pub text: String,
    /// Class label.
    pub label: C,
}

impl<C> TrainingSample<C> {
    /// Create a new training sample.
    pub fn new<S: Into<String>>(text: S, label: C) -> Self {
        TrainingSample {
            text: text.into(),
            label,
        }
    }
}

/// A class label paired with a score.
///
/// Depending on where it comes from, `score` is either a log score
/// (`ln P(A) + Σ ln P(Hi|A)`) or a normalized posterior probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore<C> {
    /// Class label.
    pub label: C,
    /// Score of the class.
    pub score: f64,
}

impl<C> ClassScore<C> {
    /// Create a new class score.
    pub fn new(label: C, score: f64) -> Self {
        ClassScore { label, score }
    }
}
