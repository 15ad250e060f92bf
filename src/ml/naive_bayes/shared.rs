//! Thread-safe handle around a Naive Bayes model.
//!
//! The model itself is single-threaded. `SharedNaiveBayes` adds the external
//! synchronization needed to train and classify from several threads: one
//! writer at a time for `train`, any number of concurrent readers for
//! `classify`. Tokenization runs before the lock is taken and a whole
//! document is applied under a single write guard, so a reader sees either
//! none or all of a document's counts.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::Result;

use super::bayes_classifier::NaiveBayesClassifier;
use super::classifier::TextClassifier;
use super::model::NaiveBayesModel;
use super::types::ClassScore;

/// Cloneable, lock-guarded Naive Bayes classifier.
///
/// Clones share the same model.
pub struct SharedNaiveBayes<C> {
    model: Arc<RwLock<NaiveBayesModel<C>>>,
    analyzer: Arc<dyn Analyzer>,
}

impl<C> SharedNaiveBayes<C>
where
    C: Clone + Eq + Hash,
{
    /// Create an untrained shared classifier that tokenizes with `analyzer`.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::from_parts(NaiveBayesModel::new(), analyzer)
    }

    /// Wrap an existing model.
    pub fn from_parts(model: NaiveBayesModel<C>, analyzer: Arc<dyn Analyzer>) -> Self {
        SharedNaiveBayes {
            model: Arc::new(RwLock::new(model)),
            analyzer,
        }
    }

    /// Record one labeled training document.
    pub fn train(&self, document: &str, label: C) -> Result<()> {
        let terms = self.analyzer.terms(document)?;
        self.model.write().train_tokens(terms, label);
        Ok(())
    }

    /// Predict the label of a document.
    pub fn classify(&self, document: &str) -> Result<C> {
        let terms = self.analyzer.terms(document)?;
        self.model.read().classify_tokens(terms)
    }

    /// Posterior probability of every known class for a document.
    pub fn posteriors(&self, document: &str) -> Result<Vec<ClassScore<C>>> {
        let terms = self.analyzer.terms(document)?;
        self.model.read().posteriors(terms)
    }

    /// Run `f` against the model under a read lock.
    pub fn read<R>(&self, f: impl FnOnce(&NaiveBayesModel<C>) -> R) -> R {
        f(&self.model.read())
    }

    /// Copy of the model as it is right now.
    pub fn snapshot(&self) -> NaiveBayesModel<C> {
        self.model.read().clone()
    }
}

impl<C> Clone for SharedNaiveBayes<C> {
    fn clone(&self) -> Self {
        SharedNaiveBayes {
            model: Arc::clone(&self.model),
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

impl<C> Default for SharedNaiveBayes<C>
where
    C: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new(Arc::new(StandardAnalyzer::new()))
    }
}

impl<C> From<NaiveBayesClassifier<C>> for SharedNaiveBayes<C>
where
    C: Clone + Eq + Hash,
{
    fn from(classifier: NaiveBayesClassifier<C>) -> Self {
        let (model, analyzer) = classifier.into_parts();
        Self::from_parts(model, analyzer)
    }
}

impl<C> TextClassifier<C> for SharedNaiveBayes<C>
where
    C: Clone + Eq + Hash + Send + Sync,
{
    fn train(&mut self, document: &str, label: C) -> Result<()> {
        SharedNaiveBayes::train(self, document, label)
    }

    fn classify(&self, document: &str) -> Result<C> {
        SharedNaiveBayes::classify(self, document)
    }

    fn name(&self) -> &str {
        "shared_naive_bayes"
    }
}

impl<C> fmt::Debug for SharedNaiveBayes<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedNaiveBayes")
            .field("model", &*self.model.read())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_model() {
        let shared = SharedNaiveBayes::default();
        let other = shared.clone();

        shared.train("cheap loans now", "spam").unwrap();
        other.train("meeting agenda attached", "ham").unwrap();

        assert_eq!(shared.read(|model| model.total_documents()), 2);
        assert_eq!(other.classify("cheap loans").unwrap(), "spam");
    }

    #[test]
    fn test_from_trained_classifier() {
        let mut classifier = NaiveBayesClassifier::default();
        classifier.train("free cheap offer", "spam").unwrap();

        let shared = SharedNaiveBayes::from(classifier);
        assert_eq!(shared.classify("offer").unwrap(), "spam");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedNaiveBayes::default();
        shared.train("cheap", "spam").unwrap();

        let snapshot = shared.snapshot();
        shared.train("agenda", "ham").unwrap();

        assert_eq!(snapshot.class_count(), 1);
        assert_eq!(shared.read(|model| model.class_count()), 2);
    }

    #[test]
    fn test_untrained_shared_classifier_fails() {
        let shared: SharedNaiveBayes<String> = SharedNaiveBayes::default();
        assert!(shared.classify("cheap").unwrap_err().is_no_training_data());
        assert!(shared.posteriors("cheap").unwrap_err().is_no_training_data());
    }
}
