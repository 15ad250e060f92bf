//! Configuration for building a Naive Bayes classifier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{Result, TextBayesError};

/// Tokenizer selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Split on whitespace.
    Whitespace,
    /// Split on Unicode word boundaries.
    #[default]
    UnicodeWord,
    /// Extract regex matches, or the text between them when `gaps` is set.
    Regex {
        /// Regular expression.
        pattern: String,
        /// Treat matches as separators.
        #[serde(default)]
        gaps: bool,
    },
}

impl TokenizerConfig {
    /// Build the configured tokenizer.
    ///
    /// An empty regex pattern is rejected: it matches nothing but empty
    /// strings, so every document would tokenize to nothing.
    pub fn build(&self) -> Result<Arc<dyn Tokenizer>> {
        if let TokenizerConfig::Regex { pattern, .. } = self {
            if pattern.is_empty() {
                return Err(TextBayesError::invalid_config(
                    "regex tokenizer requires a non-empty pattern",
                ));
            }
        }

        Ok(match self {
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerConfig::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerConfig::Regex { pattern, gaps: false } => {
                Arc::new(RegexTokenizer::with_pattern(pattern)?)
            }
            TokenizerConfig::Regex { pattern, gaps: true } => {
                Arc::new(RegexTokenizer::with_gaps(pattern)?)
            }
        })
    }
}

/// Configuration for a Naive Bayes classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Tokenizer used for both training and classification.
    pub tokenizer: TokenizerConfig,
    /// Append a lowercase filter to the analysis pipeline.
    pub lowercase: bool,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            lowercase: true,
        }
    }
}

impl NaiveBayesConfig {
    /// Build the analysis pipeline described by this configuration.
    pub fn build_analyzer(&self) -> Result<Arc<dyn Analyzer>> {
        let mut analyzer = PipelineAnalyzer::new(self.tokenizer.build()?);
        if self.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        Ok(Arc::new(analyzer))
    }
}
