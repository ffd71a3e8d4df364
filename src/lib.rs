//! Two-label sentiment classification with a multinomial Naive Bayes model.

pub mod bayes;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod tokenizer;

pub use bayes::{Label, NaiveBayesClassifier, WordFrequency};
pub use error::{ClassifierError, Result};
