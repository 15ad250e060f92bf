//! Document-level Naive Bayes classifier.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::Result;

use super::classifier::TextClassifier;
use super::model::NaiveBayesModel;
use super::types::{ClassScore, TrainingSample};

/// Naive Bayes classifier over raw documents.
///
/// Pairs a [`NaiveBayesModel`] with the analyzer that turns documents into
/// tokens. The same analyzer is used for training and classification.
///
/// # Examples
///
/// ```
/// use textbayes::ml::naive_bayes::NaiveBayesClassifier;
///
/// # fn main() -> textbayes::error::Result<()> {
/// let mut classifier = NaiveBayesClassifier::default();
/// classifier.train("cheap loans now", "spam")?;
/// classifier.train("meeting agenda attached", "ham")?;
/// classifier.train("free cheap offer", "spam")?;
///
/// assert_eq!(classifier.classify("cheap offer now")?, "spam");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NaiveBayesClassifier<C> {
    model: NaiveBayesModel<C>,
    analyzer: Arc<dyn Analyzer>,
}

impl<C> NaiveBayesClassifier<C>
where
    C: Clone + Eq + Hash,
{
    /// Create an untrained classifier that tokenizes with `analyzer`.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        NaiveBayesClassifier {
            model: NaiveBayesModel::new(),
            analyzer,
        }
    }

    /// Record one labeled training document.
    ///
    /// The document is tokenized before the model is touched, so a
    /// tokenization failure leaves the model unchanged.
    pub fn train(&mut self, document: &str, label: C) -> Result<()> {
        let terms = self.analyzer.terms(document)?;
        self.model.train_tokens(terms, label);
        Ok(())
    }

    /// Train on every sample in order.
    pub fn train_all<I>(&mut self, samples: I) -> Result<()>
    where
        I: IntoIterator<Item = TrainingSample<C>>,
    {
        let mut trained = 0usize;
        for sample in samples {
            self.train(&sample.text, sample.label)?;
            trained += 1;
        }

        debug!(
            samples = trained,
            classes = self.model.class_count(),
            vocabulary = self.model.vocabulary_size(),
            "trained classifier from samples"
        );
        Ok(())
    }

    /// Predict the label of a document.
    pub fn classify(&self, document: &str) -> Result<C> {
        let terms = self.analyzer.terms(document)?;
        self.model.classify_tokens(terms)
    }

    /// Log score of every known class for a document, in training order.
    pub fn scores(&self, document: &str) -> Result<Vec<ClassScore<C>>> {
        let terms = self.analyzer.terms(document)?;
        Ok(self.model.score_tokens(terms))
    }

    /// Posterior probability of every known class for a document.
    pub fn posteriors(&self, document: &str) -> Result<Vec<ClassScore<C>>> {
        let terms = self.analyzer.terms(document)?;
        self.model.posteriors(terms)
    }

    /// Get the underlying model.
    pub fn model(&self) -> &NaiveBayesModel<C> {
        &self.model
    }

    /// Get the analyzer used for tokenization.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Split the classifier into its model and analyzer.
    pub fn into_parts(self) -> (NaiveBayesModel<C>, Arc<dyn Analyzer>) {
        (self.model, self.analyzer)
    }
}

impl<C> Default for NaiveBayesClassifier<C>
where
    C: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new(Arc::new(StandardAnalyzer::new()))
    }
}

impl<C> TextClassifier<C> for NaiveBayesClassifier<C>
where
    C: Clone + Eq + Hash + Send + Sync,
{
    fn train(&mut self, document: &str, label: C) -> Result<()> {
        NaiveBayesClassifier::train(self, document, label)
    }

    fn classify(&self, document: &str) -> Result<C> {
        NaiveBayesClassifier::classify(self, document)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

impl<C> fmt::Debug for NaiveBayesClassifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("model", &self.model)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
