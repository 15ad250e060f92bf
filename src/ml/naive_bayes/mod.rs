//! Multinomial Naive Bayes text classification.
//!
//! The classifier estimates, for each class seen during training, how likely
//! an unseen document is to belong to it, using per-class word counts with
//! add-one smoothing and log-space scoring.
//!
//! # Architecture
//!
//! - `NaiveBayesModel`: token-level counts and scoring, tokenizer-agnostic
//! - `NaiveBayesClassifier`: a model paired with the analyzer that tokenizes documents
//! - `SharedNaiveBayes`: lock-guarded handle for training and classifying across threads
//! - `TextClassifier` trait: common interface for document classifiers
//! - `NaiveBayesConfig`: serializable analyzer configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use textbayes::ml::naive_bayes::{self, TrainingSample};
//! use textbayes::analysis::analyzer::standard::StandardAnalyzer;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let samples: Vec<TrainingSample> = naive_bayes::load_training_data("training.json")?;
//!
//! let analyzer = Arc::new(StandardAnalyzer::new());
//! let classifier = naive_bayes::new_naive_bayes(samples, analyzer)?;
//!
//! let label = classifier.classify("cheap offer now")?;
//! # Ok(())
//! # }
//! ```

mod bayes_classifier;
mod classifier;
mod config;
mod core;
mod model;
mod shared;
mod types;

pub use bayes_classifier::NaiveBayesClassifier;
pub use classifier::TextClassifier;
pub use config::{NaiveBayesConfig, TokenizerConfig};
pub use self::core::{from_config, load_config, load_training_data, new_naive_bayes};
pub use model::NaiveBayesModel;
pub use shared::SharedNaiveBayes;
pub use types::{ClassScore, TrainingSample};
