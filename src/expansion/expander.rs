//! Query expander: Rocchio term selection and phrase-based reordering.
//!
//! [`QueryExpander`] runs the whole pipeline eagerly at construction time:
//! it fits a TF-IDF vectorizer on the feedback corpus, vectorizes the query
//! and both document sets against the shared vocabulary, combines the
//! weights into Rocchio scores, selects up to [`MAX_ADDED_TERMS`] new terms,
//! and reorders the expanded query around the best confirmed phrase.
//!
//! # Examples
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
//! assert_eq!(expander.added_terms(), &["tutorial", "basics"]);
//! assert_eq!(expander.final_query(), "learning machine basics tutorial");
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::{JavelinError, Result};
use crate::expansion::ngram::{PhraseTable, MAX_PHRASE_TERMS};
use crate::expansion::rocchio::RocchioConfig;
use crate::expansion::vectorizer::TfIdfVectorizer;

/// Maximum number of terms appended to the query per feedback round.
pub const MAX_ADDED_TERMS: usize = 2;

/// The outcome of one expansion round, ready for serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// The original query.
    pub query: String,
    /// Terms appended to the query, highest score first.
    pub added_terms: Vec<String>,
    /// Added terms prepended to the original query.
    pub expanded_query: String,
    /// The expanded query after phrase-based reordering.
    pub final_query: String,
}

/// Expands a query from relevance feedback.
///
/// All weight vectors, scores, and the reordered query are computed when the
/// expander is constructed; accessors only read back results. Each expander
/// owns its vocabulary and phrase table, so independent expansions can run
/// concurrently without shared state.
pub struct QueryExpander {
    query: String,
    vectorizer: TfIdfVectorizer,
    scores: Vec<f64>,
    added_terms: Vec<String>,
    expanded_query: String,
    final_query: String,
}

impl QueryExpander {
    /// Expand `query` using the default Rocchio constants.
    ///
    /// `relevant_docs` and `irrelevant_docs` are raw document texts; either
    /// may be empty.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when the query has more than
    /// `MAX_PHRASE_TERMS - MAX_ADDED_TERMS` whitespace-separated terms, since
    /// phrase candidate generation is factorial in the term count.
    pub fn new(query: &str, relevant_docs: &[String], irrelevant_docs: &[String]) -> Result<Self> {
        Self::with_config(query, relevant_docs, irrelevant_docs, RocchioConfig::default())
    }

    /// Expand `query` with explicit Rocchio constants.
    pub fn with_config(
        query: &str,
        relevant_docs: &[String],
        irrelevant_docs: &[String],
        config: RocchioConfig,
    ) -> Result<Self> {
        let query_terms: Vec<String> = WhitespaceTokenizer::new()
            .tokenize(query)?
            .map(|token| token.text)
            .collect();
        if query_terms.len() + MAX_ADDED_TERMS > MAX_PHRASE_TERMS {
            return Err(JavelinError::invalid_argument(format!(
                "query has {} terms; at most {} are supported",
                query_terms.len(),
                MAX_PHRASE_TERMS - MAX_ADDED_TERMS
            )));
        }

        let analyzer: Arc<dyn Analyzer> = Arc::new(EnglishAnalyzer::new()?);

        let mut corpus = Vec::with_capacity(relevant_docs.len() + irrelevant_docs.len());
        corpus.extend_from_slice(relevant_docs);
        corpus.extend_from_slice(irrelevant_docs);

        let mut vectorizer = TfIdfVectorizer::new(Arc::clone(&analyzer));
        vectorizer.fit(&corpus)?;

        let query_weights = vectorizer.transform(query)?;
        let relevant_weights = relevant_docs
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect::<Result<Vec<_>>>()?;
        let irrelevant_weights = irrelevant_docs
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect::<Result<Vec<_>>>()?;

        let scores = config.combine(&query_weights, &relevant_weights, &irrelevant_weights);

        let added_terms = select_added_terms(&scores, &query_terms, &vectorizer);
        let expanded_query = if added_terms.is_empty() {
            query.to_string()
        } else {
            format!("{} {}", added_terms.join(" "), query)
        };

        let final_query = reorder_query(&expanded_query, relevant_docs, &analyzer)?;

        Ok(QueryExpander {
            query: query.to_string(),
            vectorizer,
            scores,
            added_terms,
            expanded_query,
            final_query,
        })
    }

    /// The original query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected added terms, highest score first.
    pub fn added_terms(&self) -> &[String] {
        &self.added_terms
    }

    /// The added terms as a space-joined string (may be empty).
    pub fn added_terms_joined(&self) -> String {
        self.added_terms.join(" ")
    }

    /// The expanded query: added terms prepended to the original query.
    pub fn expanded_query(&self) -> &str {
        &self.expanded_query
    }

    /// The expanded query after phrase-based reordering.
    pub fn final_query(&self) -> &str {
        &self.final_query
    }

    /// The Rocchio score per vocabulary index. Every entry is >= 0.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// The fitted vectorizer (vocabulary and IDF) used for this expansion.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Collect the expansion outcome into a serializable record.
    pub fn expansion(&self) -> Expansion {
        Expansion {
            query: self.query.clone(),
            added_terms: self.added_terms.clone(),
            expanded_query: self.expanded_query.clone(),
            final_query: self.final_query.clone(),
        }
    }
}

/// Select up to [`MAX_ADDED_TERMS`] vocabulary terms by descending score.
///
/// Terms already present in the query (compared case-insensitively against
/// its whitespace-split terms) are skipped, as are terms with a non-positive
/// score. Equal scores are resolved by ascending vocabulary index, which is
/// first-occurrence order over the corpus.
fn select_added_terms(
    scores: &[f64],
    query_terms: &[String],
    vectorizer: &TfIdfVectorizer,
) -> Vec<String> {
    let query_terms: AHashSet<String> = query_terms
        .iter()
        .map(|term| term.to_lowercase())
        .collect();

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut added = Vec::new();
    for idx in order {
        if scores[idx] <= 0.0 {
            break;
        }
        let term = match vectorizer.term(idx) {
            Some(term) => term,
            None => continue,
        };
        if query_terms.contains(term) {
            continue;
        }
        added.push(term.to_string());
        if added.len() == MAX_ADDED_TERMS {
            break;
        }
    }

    added
}

/// Reorder the expanded query around its best confirmed phrase.
///
/// The top-ranked phrase becomes the anchor; every expanded-query token not
/// in the anchor is appended after it in original left-to-right order. When
/// no phrase was observed in the relevant documents, the expanded query is
/// returned unchanged.
fn reorder_query(
    expanded_query: &str,
    relevant_docs: &[String],
    analyzer: &Arc<dyn Analyzer>,
) -> Result<String> {
    let original_tokens: Vec<String> = WhitespaceTokenizer::new()
        .tokenize(expanded_query)?
        .map(|token| token.text)
        .collect();
    let lowered: Vec<String> = original_tokens
        .iter()
        .map(|token| token.to_lowercase())
        .collect();

    let mut table = PhraseTable::from_query_terms(&lowered)?;
    table.count_in_documents(relevant_docs, analyzer)?;

    let sorted = table.into_sorted();
    let anchor = match sorted.first() {
        Some(entry) => &entry.terms,
        None => return Ok(expanded_query.to_string()),
    };

    let mut final_query = anchor.join(" ");
    for (original, lowered) in original_tokens.iter().zip(&lowered) {
        if !anchor.contains(lowered) {
            final_query.push(' ');
            final_query.push_str(original);
        }
    }

    Ok(final_query)
}
