//! TF-IDF vectorizer for term weighting.
//!
//! The vectorizer is fitted once on the feedback corpus (relevant plus
//! irrelevant documents) and then transforms the query and each document
//! against that fixed vocabulary, so that a given index refers to the same
//! term in every weight vector.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// TF-IDF vectorizer over a fixed vocabulary.
///
/// Vocabulary indices are assigned in first-occurrence order over the fitted
/// corpus, which makes weight vectors reproducible for identical inputs.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use javelin::analysis::analyzer::EnglishAnalyzer;
/// use javelin::expansion::vectorizer::TfIdfVectorizer;
///
/// let documents = vec![
///     "machine learning tutorial".to_string(),
///     "cooking tutorial".to_string(),
/// ];
///
/// let analyzer = Arc::new(EnglishAnalyzer::new().unwrap());
/// let mut vectorizer = TfIdfVectorizer::new(analyzer);
/// vectorizer.fit(&documents).unwrap();
///
/// let weights = vectorizer.transform("machine learning").unwrap();
/// assert_eq!(weights.len(), vectorizer.vocabulary_size());
/// ```
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Terms in index order.
    terms: Vec<String>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.terms.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on the feedback corpus.
    ///
    /// Builds the vocabulary and computes per-term IDF. Terms are indexed in
    /// the order they first occur in the corpus.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut vocabulary = AHashMap::new();
        let mut terms: Vec<String> = Vec::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.token_texts(doc)?;
            let mut seen: AHashSet<&str> = AHashSet::new();

            for token in &tokens {
                if !vocabulary.contains_key(token.as_str()) {
                    vocabulary.insert(token.clone(), terms.len());
                    terms.push(token.clone());
                }
                if seen.insert(token.as_str()) {
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        // IDF = log((N + 1) / (df + 1)) + 1
        let mut idf = vec![0.0; terms.len()];
        for (term, idx) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[*idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.terms = terms;
        self.idf = idf;

        Ok(())
    }

    /// Transform a text into a TF-IDF weight vector over the fitted vocabulary.
    ///
    /// Terms absent from the vocabulary are ignored; they cannot receive
    /// weight.
    pub fn transform(&self, text: &str) -> Result<Vec<f64>> {
        let tokens = self.token_texts(text)?;
        let mut tf = vec![0.0; self.terms.len()];

        // Count term frequencies
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by token count
        let token_count = tokens.len() as f64;
        if token_count > 0.0 {
            for count in &mut tf {
                *count /= token_count;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        Ok(tf)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Get the term at the given vocabulary index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(|t| t.as_str())
    }

    /// Get all terms in vocabulary index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the vocabulary index of a term, if present.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Get the analyzer backing this vectorizer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Tokenize a text using the configured analyzer.
    fn token_texts(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::EnglishAnalyzer;

    fn fitted(documents: &[String]) -> TfIdfVectorizer {
        let analyzer = Arc::new(EnglishAnalyzer::new().unwrap());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(documents).unwrap();
        vectorizer
    }

    #[test]
    fn test_fit_builds_vocabulary_in_first_occurrence_order() {
        let documents = vec![
            "machine learning tutorial".to_string(),
            "tutorial basics".to_string(),
        ];
        let vectorizer = fitted(&documents);

        assert_eq!(
            vectorizer.terms(),
            &["machine", "learning", "tutorial", "basics"]
        );
        assert_eq!(vectorizer.index_of("tutorial"), Some(2));
    }

    #[test]
    fn test_vocabulary_excludes_stop_words() {
        let documents = vec!["the machine and the tutorial".to_string()];
        let vectorizer = fitted(&documents);

        assert_eq!(vectorizer.index_of("the"), None);
        assert_eq!(vectorizer.index_of("and"), None);
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }

    #[test]
    fn test_idf_decreases_with_document_frequency() {
        let documents = vec![
            "common rare".to_string(),
            "common other".to_string(),
            "common third".to_string(),
        ];
        let vectorizer = fitted(&documents);

        let common = vectorizer.transform("common").unwrap();
        let rare = vectorizer.transform("rare").unwrap();
        let common_idx = vectorizer.index_of("common").unwrap();
        let rare_idx = vectorizer.index_of("rare").unwrap();

        assert!(rare[rare_idx] > common[common_idx]);
    }

    #[test]
    fn test_transform_ignores_out_of_vocabulary_terms() {
        let documents = vec!["machine learning".to_string()];
        let vectorizer = fitted(&documents);

        let weights = vectorizer.transform("quantum computing").unwrap();
        assert!(weights.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_transform_of_empty_text() {
        let documents = vec!["machine learning".to_string()];
        let vectorizer = fitted(&documents);

        let weights = vectorizer.transform("").unwrap();
        assert_eq!(weights.len(), 2);
        assert!(weights.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_index_alignment_across_transforms() {
        let documents = vec![
            "machine learning tutorial guide".to_string(),
            "cooking recipes guide".to_string(),
        ];
        let vectorizer = fitted(&documents);
        let idx = vectorizer.index_of("guide").unwrap();

        for text in ["guide", "machine guide", "cooking guide guide"] {
            let weights = vectorizer.transform(text).unwrap();
            assert_eq!(weights.len(), vectorizer.vocabulary_size());
            assert!(weights[idx] > 0.0, "guide should be weighted in {text:?}");
        }
    }

    #[test]
    fn test_weights_are_non_negative() {
        let documents = vec![
            "machine learning tutorial".to_string(),
            "cooking recipes".to_string(),
        ];
        let vectorizer = fitted(&documents);

        for doc in &documents {
            let weights = vectorizer.transform(doc).unwrap();
            assert!(weights.iter().all(|&w| w >= 0.0));
        }
    }
}
