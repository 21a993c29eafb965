//! Collapsed Gibbs sampling over a [`CorpusState`].
//!
//! A sweep visits tokens in document order, then position order. Each
//! resampling step sees the counts already updated by every earlier step of
//! the same sweep, so sweeps must stay sequential.

use crate::random::RandomSource;
use crate::state::{CorpusState, TopicId};
use crate::vocabulary::WordId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GibbsSampler {
    pub alpha: f64,
    pub beta: f64,
}

impl GibbsSampler {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Perform exactly `iterations` sweeps.
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        state: &mut CorpusState,
        rng: &mut R,
        iterations: usize,
    ) {
        let mut weights = vec![0.0f64; state.num_topics()];
        for it in 0..iterations {
            self.sweep_with(state, rng, &mut weights);
            debug_assert!(state.is_consistent());

            if (it + 1) % 50 == 0 {
                log::debug!("Training LDA: iteration {}/{}", it + 1, iterations);
            }
        }
    }

    /// Resample every token once.
    pub fn sweep<R: RandomSource + ?Sized>(&self, state: &mut CorpusState, rng: &mut R) {
        let mut weights = vec![0.0f64; state.num_topics()];
        self.sweep_with(state, rng, &mut weights);
    }

    fn sweep_with<R: RandomSource + ?Sized>(
        &self,
        state: &mut CorpusState,
        rng: &mut R,
        weights: &mut [f64],
    ) {
        for d in 0..state.num_docs() {
            for pos in 0..state.doc_lengths()[d] {
                let w = state.docs()[d][pos];

                state.unassign(d, pos);
                self.conditional(state, d, w, weights);
                let new_t = sample_index(weights, rng);
                state.assign(d, pos, new_t);
            }
        }
    }

    /// Unnormalized full conditional for word `word` in document `doc`:
    ///
    /// `(WordTopic[w][k] + β) / (TopicTotals[k] + V·β) · (DocTopic[d][k] + α) / (DocLength[d] + K·α)`
    ///
    /// The document denominator uses the full document length. It is the same
    /// for every topic, so it does not change which topic gets drawn.
    pub fn conditional(&self, state: &CorpusState, doc: usize, word: WordId, weights: &mut [f64]) {
        let k = state.num_topics();
        let doc_den = state.doc_lengths()[doc] as f64 + k as f64 * self.alpha;
        let doc_topic = state.doc_topic().row(doc);
        for (t, weight) in weights.iter_mut().enumerate().take(k) {
            let left = (doc_topic[t] as f64 + self.alpha) / doc_den;
            *weight = state.word_likelihood(word, t, self.beta) * left;
        }
    }
}

/// Draw an index with probability proportional to `weights`.
///
/// A single uniform value `u` in `[0, Σ weights)` is drawn and the first index
/// whose cumulative weight exceeds `u` is returned. Rounding at the top end
/// falls back to the last index.
pub fn sample_index<R: RandomSource + ?Sized>(weights: &[f64], rng: &mut R) -> TopicId {
    let total: f64 = weights.iter().sum();
    let threshold = rng.next_f64() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len().saturating_sub(1)
}
