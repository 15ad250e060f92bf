//! Multinomial Naive Bayes model over word tokens.
//!
//! The model keeps three tables: the vocabulary, the number of training
//! documents per class, and the per-class word occurrence counts. Training
//! only ever adds to them; classification only reads them.
//!
//! For a token sequence `H = (H1 .. Hn)` every known class `A` is scored as
//!
//! ```text
//! score(A) = ln P(A) + Σ ln P(Hi|A)
//! P(A)     = docs(A) / total_docs
//! P(Hi|A)  = (count(Hi, A) + 1) / (words(A) + |V|)
//! ```
//!
//! and the class with the strictly greatest score wins. Classes are visited
//! in the order their labels were first trained, so on a tie the earliest
//! class is kept.

use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::iter;

use ahash::{AHashMap, AHashSet};
use tracing::{debug, trace};

use crate::analysis::token_filter::lowercase::lowercase;
use crate::error::{Result, TextBayesError};
use crate::ml::naive_bayes::types::ClassScore;

/// Training statistics of a single class.
#[derive(Clone, Debug)]
struct ClassStats<C> {
    label: C,
    document_count: u64,
    word_counts: AHashMap<String, u64>,
    /// Sum of `word_counts` values.
    total_words: u64,
}

impl<C> ClassStats<C> {
    fn new(label: C) -> Self {
        ClassStats {
            label,
            document_count: 0,
            word_counts: AHashMap::new(),
            total_words: 0,
        }
    }

    fn count(&self, term: &str) -> u64 {
        self.word_counts.get(term).copied().unwrap_or(0)
    }
}

/// Incrementally trained multinomial Naive Bayes model.
///
/// `C` is the class label type. Any `Clone + Eq + Hash` value works, and the
/// set of classes grows as new labels are trained.
///
/// # Examples
///
/// ```
/// use textbayes::ml::naive_bayes::NaiveBayesModel;
///
/// let mut model = NaiveBayesModel::new();
/// model.train_tokens(["cheap", "loans", "now"], "spam");
/// model.train_tokens(["meeting", "agenda", "attached"], "ham");
///
/// assert_eq!(model.classify_tokens(["cheap", "now"]).unwrap(), "spam");
/// ```
#[derive(Clone)]
pub struct NaiveBayesModel<C> {
    vocabulary: AHashSet<String>,
    /// Classes in the order their label was first trained.
    classes: Vec<ClassStats<C>>,
    class_index: AHashMap<C, usize>,
    /// Sum of every class's document count.
    total_documents: u64,
}

/// Lowercase a token unless lowercasing would leave it unchanged.
///
/// Titlecase letters such as `ǅ` are not `is_uppercase`, so the check asks
/// each char for its lowercase mapping instead.
fn normalize(token: &str) -> Cow<'_, str> {
    if token.chars().any(|c| c.to_lowercase().ne(iter::once(c))) {
        Cow::Owned(lowercase(token))
    } else {
        Cow::Borrowed(token)
    }
}

impl<C> NaiveBayesModel<C>
where
    C: Clone + Eq + Hash,
{
    /// Create an empty model.
    pub fn new() -> Self {
        NaiveBayesModel {
            vocabulary: AHashSet::new(),
            classes: Vec::new(),
            class_index: AHashMap::new(),
            total_documents: 0,
        }
    }

    /// Record one training document, given as its token sequence.
    ///
    /// Every token increments the label's count for that token and joins the
    /// vocabulary; the label's document count grows by exactly one, even
    /// when the sequence is empty.
    pub fn train_tokens<I, S>(&mut self, tokens: I, label: C)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (index, new_class) = match self.class_index.get(&label) {
            Some(&index) => (index, false),
            None => {
                let index = self.classes.len();
                self.class_index.insert(label.clone(), index);
                self.classes.push(ClassStats::new(label));
                (index, true)
            }
        };

        let stats = &mut self.classes[index];
        let mut token_count = 0usize;

        for token in tokens {
            let term = normalize(token.as_ref());
            match stats.word_counts.get_mut(term.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    stats.word_counts.insert(term.to_string(), 1);
                }
            }
            stats.total_words += 1;
            if !self.vocabulary.contains(term.as_ref()) {
                self.vocabulary.insert(term.into_owned());
            }
            token_count += 1;
        }

        stats.document_count += 1;
        self.total_documents += 1;

        debug!(
            tokens = token_count,
            class_index = index,
            new_class,
            vocabulary = self.vocabulary.len(),
            "trained document"
        );
    }

    /// Return the class with the greatest log score for a token sequence.
    ///
    /// Fails with [`TextBayesError::NoTrainingData`] when no class has been
    /// trained yet.
    pub fn classify_tokens<I, S>(&self, tokens: I) -> Result<C>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = self.prepare(tokens)?;

        let mut best: Option<(usize, f64)> = None;
        for (index, stats) in self.classes.iter().enumerate() {
            let score = self.log_score(stats, &terms);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        let (index, score) = best.ok_or_else(Self::untrained)?;
        trace!(
            candidates = self.classes.len(),
            tokens = terms.len(),
            best = index,
            score,
            "classified document"
        );

        Ok(self.classes[index].label.clone())
    }

    /// Log score of every known class, in training order.
    ///
    /// Returns an empty vector for an untrained model.
    pub fn score_tokens<I, S>(&self, tokens: I) -> Vec<ClassScore<C>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = tokens
            .into_iter()
            .map(|token| normalize(token.as_ref()).into_owned())
            .collect();

        self.classes
            .iter()
            .map(|stats| ClassScore::new(stats.label.clone(), self.log_score(stats, &terms)))
            .collect()
    }

    /// Posterior probability estimate `P(A|H)` of every known class.
    ///
    /// The log scores are normalized with log-sum-exp, so the returned
    /// probabilities sum to 1 without underflowing on long documents.
    pub fn posteriors<I, S>(&self, tokens: I) -> Result<Vec<ClassScore<C>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = self.prepare(tokens)?;
        let scores: Vec<f64> = self
            .classes
            .iter()
            .map(|stats| self.log_score(stats, &terms))
            .collect();

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = scores.iter().map(|score| (score - max).exp()).collect();
        let total: f64 = weights.iter().sum();

        Ok(self
            .classes
            .iter()
            .zip(weights)
            .map(|(stats, weight)| ClassScore::new(stats.label.clone(), weight / total))
            .collect())
    }

    /// Prior probability `P(A)` of a class, or `None` for an unknown label.
    pub fn class_probability(&self, label: &C) -> Option<f64> {
        self.stats(label)
            .map(|stats| stats.document_count as f64 / self.total_documents as f64)
    }

    /// Smoothed conditional probability `P(token|A)`, or `None` for an
    /// unknown label. Unseen tokens still get a positive probability.
    pub fn word_probability(&self, label: &C, token: &str) -> Option<f64> {
        let term = normalize(token);
        self.stats(label)
            .map(|stats| self.conditional_probability(stats, &term))
    }

    /// Class labels in the order they were first trained.
    pub fn classes(&self) -> impl Iterator<Item = &C> {
        self.classes.iter().map(|stats| &stats.label)
    }

    /// Number of known classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct tokens seen across all training documents.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether a token has been seen in any training document.
    pub fn contains_token(&self, token: &str) -> bool {
        self.vocabulary.contains(normalize(token).as_ref())
    }

    /// Total number of training documents.
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    /// Number of training documents assigned to a class.
    pub fn document_count(&self, label: &C) -> u64 {
        self.stats(label).map_or(0, |stats| stats.document_count)
    }

    /// Occurrences of a token in a class's training documents.
    pub fn word_count(&self, label: &C, token: &str) -> u64 {
        let term = normalize(token);
        self.stats(label).map_or(0, |stats| stats.count(&term))
    }

    /// Number of distinct tokens recorded for a class.
    pub fn distinct_word_count(&self, label: &C) -> usize {
        self.stats(label).map_or(0, |stats| stats.word_counts.len())
    }

    /// Sum of all token occurrences recorded for a class.
    pub fn total_word_count(&self, label: &C) -> u64 {
        self.stats(label).map_or(0, |stats| stats.total_words)
    }

    /// Whether no document has been trained yet.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn stats(&self, label: &C) -> Option<&ClassStats<C>> {
        self.class_index.get(label).map(|&index| &self.classes[index])
    }

    fn prepare<I, S>(&self, tokens: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.classes.is_empty() {
            return Err(Self::untrained());
        }

        Ok(tokens
            .into_iter()
            .map(|token| normalize(token.as_ref()).into_owned())
            .collect())
    }

    fn untrained() -> TextBayesError {
        TextBayesError::no_training_data("no class has been trained")
    }

    fn conditional_probability(&self, stats: &ClassStats<C>, term: &str) -> f64 {
        // Only empty documents trained so far: every token is equally unseen.
        let denominator = (stats.total_words + self.vocabulary.len() as u64).max(1);
        (stats.count(term) + 1) as f64 / denominator as f64
    }

    fn log_score(&self, stats: &ClassStats<C>, terms: &[String]) -> f64 {
        let prior = stats.document_count as f64 / self.total_documents as f64;

        terms.iter().fold(prior.ln(), |score, term| {
            score + self.conditional_probability(stats, term).ln()
        })
    }
}

impl<C> Default for NaiveBayesModel<C>
where
    C: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for NaiveBayesModel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesModel")
            .field("classes", &self.classes.len())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("total_documents", &self.total_documents)
            .finish()
    }
}
