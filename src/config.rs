//! Hyper-parameters and run settings for the sampler.

use serde::{Deserialize, Serialize};

use crate::error::{LdaError, Result};

/// Configuration for an [`Lda`](crate::Lda) engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdaConfig {
    /// Number of latent topics (K).
    pub num_topics: usize,

    /// Dirichlet prior for document-topic distributions.
    pub alpha: f64,

    /// Dirichlet prior for topic-word distributions.
    pub beta: f64,

    /// Sweeps performed by `fit`.
    pub iterations: usize,

    /// Seed for the default random source.
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            num_topics: 3,
            alpha: 0.1,
            beta: 0.01,
            iterations: 1000,
            seed: 42,
        }
    }
}

impl LdaConfig {
    pub fn new(num_topics: usize) -> Self {
        Self {
            num_topics,
            ..Default::default()
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_topics < 1 {
            return Err(LdaError::InvalidConfiguration(
                "num_topics must be at least 1".into(),
            ));
        }

        // `!(x > 0.0)` also rejects NaN
        if !(self.alpha > 0.0) || !self.alpha.is_finite() {
            return Err(LdaError::InvalidConfiguration(format!(
                "alpha must be a positive finite number, got {}",
                self.alpha
            )));
        }

        if !(self.beta > 0.0) || !self.beta.is_finite() {
            return Err(LdaError::InvalidConfiguration(format!(
                "beta must be a positive finite number, got {}",
                self.beta
            )));
        }

        Ok(())
    }
}
