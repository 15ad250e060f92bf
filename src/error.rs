//! Error types for the textbayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TextBayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use textbayes::error::{Result, TextBayesError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextBayesError::invalid_config("regex pattern must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textbayes operations.
#[derive(Error, Debug)]
pub enum TextBayesError {
    /// I/O errors (reading training data or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Classification was requested before any class was trained
    #[error("No training data: {0}")]
    NoTrainingData(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TextBayesError.
pub type Result<T> = std::result::Result<T, TextBayesError>;

impl TextBayesError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextBayesError::Analysis(msg.into())
    }

    /// Create a new no-training-data error.
    pub fn no_training_data<S: Into<String>>(msg: S) -> Self {
        TextBayesError::NoTrainingData(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextBayesError::InvalidConfig(msg.into())
    }

    /// Whether this error means the model has not been trained yet.
    pub fn is_no_training_data(&self) -> bool {
        matches!(self, TextBayesError::NoTrainingData(_))
    }
}
