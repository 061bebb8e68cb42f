//! Rocchio relevance feedback scoring.
//!
//! Combines the query weight vector with the aggregated relevant and
//! irrelevant document weight vectors into a single score per vocabulary
//! term:
//!
//! ```text
//! score = alpha * query + beta * sum(relevant) - gamma * sum(irrelevant)
//! ```
//!
//! Negative scores are clamped to zero.

/// Weight of the original query vector.
pub const ALPHA: f64 = 1.0;

/// Weight of the summed relevant document vectors.
pub const BETA: f64 = 0.75;

/// Weight of the summed irrelevant document vectors.
pub const GAMMA: f64 = 0.15;

/// Weighting constants for the Rocchio combination.
///
/// The defaults are empirically chosen and are the only place the constants
/// are defined.
///
/// # Examples
///
/// ```
/// use javelin::expansion::rocchio::RocchioConfig;
///
/// let config = RocchioConfig::default();
/// let scores = config.combine(&[1.0, 0.0], &[vec![0.0, 2.0]], &[]);
/// assert_eq!(scores, vec![1.0, 1.5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocchioConfig {
    /// Multiplier for the query weights.
    pub alpha: f64,
    /// Multiplier for the summed relevant document weights.
    pub beta: f64,
    /// Multiplier for the summed irrelevant document weights.
    pub gamma: f64,
}

impl Default for RocchioConfig {
    fn default() -> Self {
        RocchioConfig {
            alpha: ALPHA,
            beta: BETA,
            gamma: GAMMA,
        }
    }
}

impl RocchioConfig {
    /// Create a config with explicit constants.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        RocchioConfig { alpha, beta, gamma }
    }

    /// Combine query, relevant, and irrelevant weight vectors into one score
    /// vector.
    ///
    /// All vectors must be over the same vocabulary (equal length). Empty
    /// document sets contribute nothing. Every returned entry is >= 0.
    pub fn combine(
        &self,
        query_weights: &[f64],
        relevant_weights: &[Vec<f64>],
        irrelevant_weights: &[Vec<f64>],
    ) -> Vec<f64> {
        let mut scores: Vec<f64> = query_weights.iter().map(|w| self.alpha * w).collect();

        for doc_weights in relevant_weights {
            debug_assert_eq!(doc_weights.len(), scores.len());
            for (score, weight) in scores.iter_mut().zip(doc_weights) {
                *score += self.beta * weight;
            }
        }

        for doc_weights in irrelevant_weights {
            debug_assert_eq!(doc_weights.len(), scores.len());
            for (score, weight) in scores.iter_mut().zip(doc_weights) {
                *score -= self.gamma * weight;
            }
        }

        // Clamp negative scores to zero
        for score in &mut scores {
            if *score < 0.0 {
                *score = 0.0;
            }
        }

        scores
    }
}
