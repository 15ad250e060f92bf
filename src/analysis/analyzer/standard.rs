//! Standard analyzer: Unicode word segmentation followed by lowercasing.
//!
//! This is the analyzer a classifier uses when none is configured. It suits
//! languages that separate words with spaces. Word boundaries are not
//! dictionary-aware, so Chinese and Japanese text comes out one ideograph per
//! token (`東京都` becomes `東`, `京`, `都`). Such text needs a morphological
//! segmenter implementing [`Tokenizer`], plugged in through a
//! [`PipelineAnalyzer`].
//!
//! [`Tokenizer`]: crate::analysis::tokenizer::Tokenizer

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// A standard analyzer with Unicode word tokenization and lowercasing.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard");

        StandardAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "standard"
    }
}
