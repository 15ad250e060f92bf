//! Helper functions for creating Naive Bayes classifiers.

use std::fs;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

use super::bayes_classifier::NaiveBayesClassifier;
use super::config::NaiveBayesConfig;
use super::types::TrainingSample;

/// Load training samples from a JSON file holding an array of
/// `{"text": ..., "label": ...}` objects.
pub fn load_training_data<C, P>(path: P) -> Result<Vec<TrainingSample<C>>>
where
    C: DeserializeOwned,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;
    let samples: Vec<TrainingSample<C>> = serde_json::from_str(&content)?;
    Ok(samples)
}

/// Load a classifier configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<NaiveBayesConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Create a Naive Bayes classifier and train it on `samples`.
pub fn new_naive_bayes<C>(
    samples: Vec<TrainingSample<C>>,
    analyzer: Arc<dyn Analyzer>,
) -> Result<NaiveBayesClassifier<C>>
where
    C: Clone + Eq + Hash,
{
    let mut classifier = NaiveBayesClassifier::new(analyzer);
    classifier.train_all(samples)?;
    Ok(classifier)
}

/// Create an untrained classifier from a configuration.
pub fn from_config<C>(config: &NaiveBayesConfig) -> Result<NaiveBayesClassifier<C>>
where
    C: Clone + Eq + Hash,
{
    Ok(NaiveBayesClassifier::new(config.build_analyzer()?))
}
