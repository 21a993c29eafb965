//! Latent Dirichlet Allocation trained with a collapsed Gibbs sampler.
//!
//! ```no_run
//! use ldagibbs::{Lda, LdaConfig};
//!
//! let mut lda = Lda::new(LdaConfig::new(2).iterations(500)).unwrap();
//! lda.fit(&["the cat sat", "the dog ran"]).unwrap();
//! let topics = lda.transform("the cat");
//! assert_eq!(topics.len(), 2);
//! ```

extern crate log;

pub mod config;
pub mod error;
pub mod lda;
pub mod random;
pub mod sampler;
pub mod state;
pub mod tokenizer;
pub mod vocabulary;

pub use config::LdaConfig;
pub use error::{LdaError, Result};
pub use lda::Lda;
pub use random::{RandomSource, SeededRandom};
pub use sampler::GibbsSampler;
pub use state::{CorpusState, CountMatrix, TopicId};
pub use tokenizer::{SimpleTokenizer, StopwordTokenizer, Tokenizer};
pub use vocabulary::{Vocabulary, WordId};

/// Three-topic model (α = 0.1, β = 0.01, seed 42) initialized on `docs_raw`
/// and ready for [`Lda::run`].
pub fn default<S: AsRef<str>>(docs_raw: &[S]) -> Result<Lda> {
    let mut lda = Lda::new(LdaConfig::default())?;
    lda.initialize(docs_raw)?;
    Ok(lda)
}
