//! # textbayes
//!
//! Multinomial Naive Bayes text classification.
//!
//! ## Features
//!
//! - Incremental training with per-class word counts
//! - Add-one smoothing over the global vocabulary
//! - Log-space scoring and posterior estimates without underflow
//! - Open class sets keyed by any hashable label type
//! - Pluggable text analysis pipeline (tokenizers and filters)
//!
//! ## Example
//!
//! ```
//! use textbayes::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut classifier = NaiveBayesClassifier::default();
//! classifier.train("cheap loans now", "spam")?;
//! classifier.train("meeting agenda attached", "ham")?;
//! classifier.train("free cheap offer", "spam")?;
//!
//! assert_eq!(classifier.classify("cheap offer now")?, "spam");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
    pub use crate::analysis::analyzer::standard::StandardAnalyzer;
    pub use crate::error::{Result, TextBayesError};
    pub use crate::ml::naive_bayes::{
        ClassScore, NaiveBayesClassifier, NaiveBayesConfig, NaiveBayesModel, SharedNaiveBayes,
        TextClassifier, TrainingSample,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
