use std::collections::HashMap;

use crate::config::LdaConfig;
use crate::error::Result;
use crate::random::{RandomSource, SeededRandom};
use crate::sampler::GibbsSampler;
use crate::state::{CorpusState, TopicId};
use crate::tokenizer::{SimpleTokenizer, Tokenizer};
use crate::vocabulary::Vocabulary;

type TopDocuments = HashMap<usize, HashMap<String, f64>>;

/// LDA engine. Owns its corpus state, tokenizer and random source exclusively.
pub struct Lda<R: RandomSource = SeededRandom> {
    config: LdaConfig,
    tokenizer: Box<dyn Tokenizer>,
    state: Option<CorpusState>,
    rng: R,
}

impl Lda<SeededRandom> {
    /// Create an engine whose random source is seeded from `config.seed`.
    pub fn new(config: LdaConfig) -> Result<Self> {
        let seed = config.seed;
        Self::with_random(config, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Lda<R> {
    pub fn with_random(config: LdaConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tokenizer: Box::new(SimpleTokenizer),
            state: None,
            rng,
        })
    }

    /// Replace the tokenizer. Takes effect on the next `initialize` and `transform`.
    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn config(&self) -> &LdaConfig {
        &self.config
    }

    pub fn num_topics(&self) -> usize {
        self.config.num_topics
    }

    /// Build the vocabulary and draw a random initial topic for every token.
    ///
    /// Any previous state is replaced only when this succeeds.
    pub fn initialize<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()> {
        self.config.validate()?;
        let state = CorpusState::initialize(
            texts,
            self.tokenizer.as_ref(),
            self.config.num_topics,
            &mut self.rng,
        )?;
        log::info!(
            "Initialized LDA: {} documents, {} tokens, vocabulary of {}",
            state.num_docs(),
            state.num_tokens(),
            state.vocabulary().len()
        );
        self.state = Some(state);
        Ok(())
    }

    /// Perform `iterations` Gibbs sweeps over the initialized corpus.
    pub fn run(&mut self, iterations: usize) {
        let sampler = GibbsSampler::new(self.config.alpha, self.config.beta);
        match self.state.as_mut() {
            Some(state) => sampler.run(state, &mut self.rng, iterations),
            None => log::warn!("LDA run requested before initialize, nothing to sample"),
        }
    }

    /// Initialize on `texts` and run the configured number of sweeps.
    pub fn fit<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()> {
        self.initialize(texts)?;
        let iterations = self.config.iterations;
        log::info!("Training LDA (K={}, iters={})", self.config.num_topics, iterations);
        self.run(iterations);
        log::info!("Training LDA: done");
        Ok(())
    }

    /// Topic distribution for unseen text.
    ///
    /// Starts from α for every topic and multiplies in the trained likelihood
    /// of each known token. Unknown tokens are skipped, so text with no known
    /// tokens gets the uniform distribution. The product is accumulated in log
    /// space and normalized with max-subtraction.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let k = self.config.num_topics;
        let mut log_weights = vec![self.config.alpha.ln(); k];

        if let Some(state) = &self.state {
            for token in self.tokenizer.tokenize(text) {
                if let Some(w) = state.vocabulary().get(&token) {
                    for (t, lw) in log_weights.iter_mut().enumerate() {
                        *lw += state.word_likelihood(w, t, self.config.beta).ln();
                    }
                }
            }
        }

        let max = log_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = log_weights.iter().map(|lw| (lw - max).exp()).collect();
        let sum: f64 = weights.iter().sum();
        weights.into_iter().map(|w| w / sum).collect()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&CorpusState> {
        self.state.as_ref()
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.state.as_ref().map(CorpusState::vocabulary)
    }

    pub fn assignments(&self) -> Option<&[Vec<TopicId>]> {
        self.state.as_ref().map(CorpusState::assignments)
    }

    /// θ[d][t] = (ndk[d][t] + α) / (N_d + K*α)
    pub fn theta(&self) -> Vec<Vec<f64>> {
        let Some(state) = &self.state else {
            return Vec::new();
        };
        let k = self.config.num_topics;
        let alpha = self.config.alpha;
        (0..state.num_docs())
            .map(|d| {
                let denom = state.doc_lengths()[d] as f64 + k as f64 * alpha;
                state
                    .doc_topic()
                    .row(d)
                    .iter()
                    .map(|&c| (c as f64 + alpha) / denom)
                    .collect()
            })
            .collect()
    }

    /// φ[t][w] = (nkw[t][w] + β) / (nk[t] + V*β)
    pub fn phi(&self) -> Vec<Vec<f64>> {
        let Some(state) = &self.state else {
            return Vec::new();
        };
        let v = state.vocabulary().len();
        (0..self.config.num_topics)
            .map(|t| {
                (0..v)
                    .map(|w| state.word_likelihood(w, t, self.config.beta))
                    .collect()
            })
            .collect()
    }

    /// Return top `n` words for each topic by φ[t][w].
    pub fn top_words(&self, n: usize) -> Vec<Vec<(String, f64)>> {
        let Some(state) = &self.state else {
            return Vec::new();
        };
        let vocab = state.vocabulary();
        self.phi()
            .into_iter()
            .map(|row| {
                let mut pairs: Vec<(usize, f64)> = row.into_iter().enumerate().collect();
                // stable sort keeps vocabulary order among ties
                pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
                pairs
                    .into_iter()
                    .take(n)
                    .filter_map(|(w, p)| vocab.word(w).map(|s| (s.to_string(), p)))
                    .collect()
            })
            .collect()
    }

    /// Convert "top words" into HashMap
    pub fn topics(&self, topn: usize) -> TopDocuments {
        self.top_words(topn)
            .into_iter()
            .enumerate()
            .map(|(t, words)| (t, words.into_iter().collect()))
            .collect()
    }
}
