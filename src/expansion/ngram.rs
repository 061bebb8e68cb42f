//! Phrase candidate generation and counting.
//!
//! After term selection, the expanded query's tokens are recombined into
//! every ordered arrangement of every subset size from 2 up to the query
//! length. Each arrangement is a phrase candidate; its count is the number of
//! times it occurs as a contiguous token run in the normalized relevant
//! documents. Candidates never observed are discarded, and survivors are
//! ranked longest-first (a confirmed three-word phrase outranks any two-word
//! phrase, regardless of count).
//!
//! Candidate generation is factorial in the token count, which is acceptable
//! only because queries are short; [`MAX_PHRASE_TERMS`] enforces that bound.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::error::{JavelinError, Result};

/// Maximum token count accepted for phrase candidate generation.
pub const MAX_PHRASE_TERMS: usize = 8;

/// A phrase candidate and its occurrence count in the relevant documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseEntry {
    /// The phrase terms, in order.
    pub terms: Vec<String>,
    /// How many times the phrase occurred as a contiguous run.
    pub count: usize,
}

/// Occurrence counts for every ordered arrangement of the query's terms.
///
/// Entries are stored in generation order (smallest arrangement size first,
/// then lexicographic by term position), which serves as the deterministic
/// tie-break when two phrases have equal length and count.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use javelin::analysis::analyzer::{Analyzer, EnglishAnalyzer};
/// use javelin::expansion::ngram::PhraseTable;
///
/// let terms = vec!["machine".to_string(), "learning".to_string()];
/// let mut table = PhraseTable::from_query_terms(&terms).unwrap();
///
/// let analyzer: Arc<dyn Analyzer> = Arc::new(EnglishAnalyzer::new().unwrap());
/// let docs = vec!["machine learning in practice".to_string()];
/// table.count_in_documents(&docs, &analyzer).unwrap();
///
/// let sorted = table.into_sorted();
/// assert_eq!(sorted[0].terms, vec!["machine", "learning"]);
/// assert_eq!(sorted[0].count, 1);
/// ```
pub struct PhraseTable {
    entries: Vec<PhraseEntry>,
    index: AHashMap<Vec<String>, usize>,
    max_run_len: usize,
}

impl PhraseTable {
    /// Build the candidate table from the expanded query's terms.
    ///
    /// Generates every ordered arrangement of every subset size from 2 to
    /// `terms.len()`. Duplicate arrangements (possible when the query repeats
    /// a term) are inserted once.
    pub fn from_query_terms(terms: &[String]) -> Result<Self> {
        if terms.len() > MAX_PHRASE_TERMS {
            return Err(JavelinError::invalid_argument(format!(
                "cannot generate phrase candidates for {} terms (limit is {MAX_PHRASE_TERMS})",
                terms.len()
            )));
        }

        let mut table = PhraseTable {
            entries: Vec::new(),
            index: AHashMap::new(),
            max_run_len: terms.len(),
        };

        let mut used = vec![false; terms.len()];
        let mut prefix = Vec::new();
        for size in 2..=terms.len() {
            table.push_arrangements(terms, size, &mut prefix, &mut used);
        }

        Ok(table)
    }

    fn push_arrangements(
        &mut self,
        terms: &[String],
        size: usize,
        prefix: &mut Vec<String>,
        used: &mut [bool],
    ) {
        if prefix.len() == size {
            if !self.index.contains_key(prefix.as_slice()) {
                self.index.insert(prefix.clone(), self.entries.len());
                self.entries.push(PhraseEntry {
                    terms: prefix.clone(),
                    count: 0,
                });
            }
            return;
        }

        for i in 0..terms.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            prefix.push(terms[i].clone());
            self.push_arrangements(terms, size, prefix, used);
            prefix.pop();
            used[i] = false;
        }
    }

    /// Count candidate occurrences in the given documents.
    ///
    /// Each document is normalized with the analyzer, then every contiguous
    /// token run of length 1 up to the query length is matched against the
    /// candidate table.
    pub fn count_in_documents(
        &mut self,
        documents: &[String],
        analyzer: &Arc<dyn Analyzer>,
    ) -> Result<()> {
        for doc in documents {
            let tokens: Vec<String> = analyzer.analyze(doc)?.map(|token| token.text).collect();
            for gram in everygrams(&tokens, self.max_run_len) {
                if let Some(&idx) = self.index.get(gram) {
                    self.entries[idx].count += 1;
                }
            }
        }
        Ok(())
    }

    /// Number of candidates in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table, discard unobserved candidates, and sort the rest.
    ///
    /// The sort is descending by phrase length, then by count. It is stable,
    /// so full ties keep generation order.
    pub fn into_sorted(self) -> Vec<PhraseEntry> {
        let mut entries: Vec<PhraseEntry> = self
            .entries
            .into_iter()
            .filter(|entry| entry.count > 0)
            .collect();

        entries.sort_by(|a, b| {
            b.terms
                .len()
                .cmp(&a.terms.len())
                .then(b.count.cmp(&a.count))
        });

        entries
    }
}

/// Iterate every contiguous token run of length 1 to `max_len`.
pub fn everygrams(tokens: &[String], max_len: usize) -> impl Iterator<Item = &[String]> {
    (0..tokens.len()).flat_map(move |start| {
        (1..=max_len.min(tokens.len() - start)).map(move |len| &tokens[start..start + len])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::EnglishAnalyzer;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn analyzer() -> Arc<dyn Analyzer> {
        Arc::new(EnglishAnalyzer::new().unwrap())
    }

    #[test]
    fn test_everygrams() {
        let tokens = terms(&["a", "b", "c"]);
        let grams: Vec<Vec<String>> = everygrams(&tokens, 2).map(|g| g.to_vec()).collect();

        assert_eq!(
            grams,
            vec![
                terms(&["a"]),
                terms(&["a", "b"]),
                terms(&["b"]),
                terms(&["b", "c"]),
                terms(&["c"]),
            ]
        );
    }

    #[test]
    fn test_candidate_count_for_three_terms() {
        // P(3,2) + P(3,3) = 6 + 6
        let table = PhraseTable::from_query_terms(&terms(&["a", "b", "c"])).unwrap();
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_duplicate_terms_are_deduplicated() {
        let table = PhraseTable::from_query_terms(&terms(&["a", "a"])).unwrap();
        // Both orderings of ("a", "a") collapse into one candidate
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_single_term_has_no_candidates() {
        let table = PhraseTable::from_query_terms(&terms(&["solo"])).unwrap();
        assert!(table.is_empty());
        assert!(table.into_sorted().is_empty());
    }

    #[test]
    fn test_too_many_terms_is_rejected() {
        let many = terms(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        let result = PhraseTable::from_query_terms(&many);
        assert!(result.is_err());
    }

    #[test]
    fn test_counts_contiguous_runs_only() {
        let mut table =
            PhraseTable::from_query_terms(&terms(&["guitar", "tabs", "ultimate"])).unwrap();
        let docs = vec![
            "ultimate guitar tabs".to_string(),
            "guitar tabs archive".to_string(),
            "tabs archive guitar".to_string(),
        ];
        table.count_in_documents(&docs, &analyzer()).unwrap();
        let sorted = table.into_sorted();

        // "ultimate guitar tabs" is the only confirmed three-word phrase
        assert_eq!(sorted[0].terms, terms(&["ultimate", "guitar", "tabs"]));
        assert_eq!(sorted[0].count, 1);

        // "guitar tabs" occurred twice; "tabs guitar" never did
        let guitar_tabs = sorted
            .iter()
            .find(|e| e.terms == terms(&["guitar", "tabs"]))
            .unwrap();
        assert_eq!(guitar_tabs.count, 2);
        assert!(
            sorted
                .iter()
                .all(|e| e.terms != terms(&["tabs", "guitar"]))
        );
    }

    #[test]
    fn test_longer_phrase_outranks_higher_count() {
        let mut table = PhraseTable::from_query_terms(&terms(&["x", "y", "z"])).unwrap();
        let mut docs = vec!["x y z".to_string()];
        for _ in 0..5 {
            docs.push("y z".to_string());
        }
        table.count_in_documents(&docs, &analyzer()).unwrap();
        let sorted = table.into_sorted();

        assert_eq!(sorted[0].terms, terms(&["x", "y", "z"]));
        let runner_up = &sorted[1];
        assert_eq!(runner_up.terms, terms(&["y", "z"]));
        assert!(runner_up.count > sorted[0].count);
    }

    #[test]
    fn test_unobserved_candidates_are_discarded() {
        let mut table = PhraseTable::from_query_terms(&terms(&["x", "y"])).unwrap();
        let docs = vec!["completely unrelated text".to_string()];
        table.count_in_documents(&docs, &analyzer()).unwrap();
        assert!(table.into_sorted().is_empty());
    }

    #[test]
    fn test_empty_document_set_counts_nothing() {
        let mut table = PhraseTable::from_query_terms(&terms(&["x", "y"])).unwrap();
        table.count_in_documents(&[], &analyzer()).unwrap();
        assert!(table.into_sorted().is_empty());
    }
}
