//! Query expansion module for Javelin.
//!
//! This module implements the full expansion pipeline: vocabulary
//! construction and TF-IDF weighting, Rocchio-style score combination,
//! added-term selection, and phrase-frequency-driven reordering of the
//! expanded query.

pub mod expander;
pub mod ngram;
pub mod rocchio;
pub mod vectorizer;

// Re-export commonly used types
pub use expander::{Expansion, QueryExpander, MAX_ADDED_TERMS};
pub use ngram::{PhraseEntry, PhraseTable, MAX_PHRASE_TERMS};
pub use rocchio::{RocchioConfig, ALPHA, BETA, GAMMA};
pub use vectorizer::TfIdfVectorizer;
