//! Text classifier trait definition.

use crate::error::Result;

/// Text classifier trait.
///
/// Implementations learn from labeled documents and assign a label to
/// unseen documents. `C` is the class label type.
pub trait TextClassifier<C>: Send + Sync {
    /// Record one labeled training document.
    fn train(&mut self, document: &str, label: C) -> Result<()>;

    /// Predict the label of a document.
    ///
    /// Fails with [`TextBayesError::NoTrainingData`] when nothing has been
    /// trained yet.
    ///
    /// [`TextBayesError::NoTrainingData`]: crate::error::TextBayesError::NoTrainingData
    fn classify(&self, document: &str) -> Result<C>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
