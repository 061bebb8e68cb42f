//! # Javelin
//!
//! A relevance-feedback query expansion library for Rust.
//!
//! Given a query, a set of documents judged relevant, and a set judged
//! irrelevant, Javelin computes which terms should be appended to the query
//! and in what order, so that a re-issued query is more likely to retrieve
//! relevant results.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline
//! - TF-IDF weighting over a single shared vocabulary
//! - Rocchio-style relevance feedback scoring
//! - Phrase-frequency-driven reordering of the expanded query
//!
//! ## Example
//!
//! ```
//! use javelin::expansion::QueryExpander;
//!
//! let relevant = vec![
//!     "machine learning tutorial guide".to_string(),
//!     "learning machine basics tutorial".to_string(),
//! ];
//! let irrelevant = vec!["cooking recipes guide".to_string()];
//!
//! let expander = QueryExpander::new("machine learning", &relevant, &irrelevant).unwrap();
//!
//! assert!(expander.added_terms().len() <= 2);
//! assert!(!expander.final_query().is_empty());
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod expansion;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
